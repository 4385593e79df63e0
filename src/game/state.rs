use super::direction::Direction;
use ratatui::style::Color;

/// A cell on the game grid
///
/// Coordinates are grid-indexed and always kept within bounds; movement past
/// an edge wraps to the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, wrapped onto the torus
    pub fn stepped(&self, direction: Direction, width: usize, height: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(width as i32),
            y: (self.y + dy).rem_euclid(height as i32),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, with head at index 0
    pub cells: Vec<Cell>,
    /// Current direction of movement
    pub direction: Direction,
    /// Buffered direction change, applied at most once per tick
    pub pending_direction: Option<Direction>,
    /// Explicit length counter; always equals `cells.len()`
    pub length: usize,
}

impl Snake {
    /// Create a new snake occupying a single cell
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            cells: vec![head],
            direction,
            pending_direction: None,
            length: 1,
        }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// Buffer a direction change for the next tick
    ///
    /// Reversing into the cell directly behind the head would be an instant
    /// self-collision, so the exact opposite of the current direction is
    /// ignored.
    pub fn set_intended_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Apply the buffered direction change, if any
    ///
    /// Called once per tick before movement, so at most one change takes
    /// effect per tick no matter how many key events arrived.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Check whether moving the head to `cell` would hit the body
    ///
    /// The check runs against the body as it stands before this tick's tail
    /// removal, excluding the old head (about to be superseded). When the
    /// tail is being vacated this tick it is excluded too: a snake may
    /// legally re-occupy the cell its own tail is just leaving.
    pub fn hits_body(&self, cell: Cell, tail_vacates: bool) -> bool {
        let mut body = &self.cells[1..];
        if tail_vacates && !body.is_empty() {
            body = &body[..body.len() - 1];
        }
        body.contains(&cell)
    }

    /// Move the head to `new_head`, growing by one cell if `grow` is set
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.cells.insert(0, new_head);
        if grow {
            self.length += 1;
        } else {
            self.cells.pop();
        }
    }

    /// Reset in place to a single cell at `head`
    pub fn reset(&mut self, head: Cell, direction: Direction) {
        self.length = 1;
        self.cells.clear();
        self.cells.push(head);
        self.direction = direction;
        self.pending_direction = None;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The single food item on the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub cell: Cell,
    pub color: Color,
}

impl Food {
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            color: Color::Red,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    pub ticks: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            ticks: 0,
        }
    }

    /// The center cell of the grid, where the snake starts and resets to
    pub fn center(&self) -> Cell {
        Cell::new((self.grid_width / 2) as i32, (self.grid_height / 2) as i32)
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.grid_width as i32
            && cell.y >= 0
            && cell.y < self.grid_height as i32
    }
}
