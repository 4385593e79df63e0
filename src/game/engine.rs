use super::{
    config::GameConfig,
    direction::Direction,
    state::{Cell, Food, GameState, Snake},
};
use rand::Rng;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether a self-collision reset the snake this tick
    pub reset: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create the initial game state: a single-cell snake at the grid
    /// center and one food item at a random cell
    pub fn new_state(&mut self) -> GameState {
        let center = Cell::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right);
        let food = Food::new(self.random_cell());

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the game by one tick
    ///
    /// Order matters: the buffered direction is applied first, then the new
    /// head is computed and checked against the body before any tail
    /// removal. A collision resets the snake in place; otherwise the snake
    /// advances, growing when it lands on the food.
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        state.snake.apply_pending_direction();

        let new_head =
            state
                .snake
                .head()
                .stepped(state.snake.direction, state.grid_width, state.grid_height);

        // The tail stays put on an eating tick, so it remains a collidable
        // cell exactly then.
        let ate_food = new_head == state.food.cell;

        if state.snake.hits_body(new_head, !ate_food) {
            let direction = self.random_direction();
            state.snake.reset(state.center(), direction);
            state.ticks += 1;

            return StepOutcome {
                ate_food: false,
                reset: true,
            };
        }

        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.food.cell = self.random_cell();
        }

        state.ticks += 1;

        StepOutcome {
            ate_food,
            reset: false,
        }
    }

    /// Draw a uniformly random cell, each axis independent
    ///
    /// Deliberately no exclusion check against the snake body: food may
    /// spawn under the snake and stay unreachable until the body moves off
    /// it.
    fn random_cell(&mut self) -> Cell {
        let x = self.rng.gen_range(0..self.config.grid_width) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height) as i32;
        Cell::new(x, y)
    }

    fn random_direction(&mut self) -> Direction {
        match self.rng.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }
}
