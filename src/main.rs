use anyhow::Result;
use clap::Parser;
use torus_snake::app::App;
use torus_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Snake on a wrap-around grid in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "32")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,

    /// Logic ticks per second
    #[arg(long, default_value = "5")]
    tps: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let mut config = GameConfig::new(cli.width, cli.height);
    config.ticks_per_second = cli.tps;

    let mut app = App::new(config);
    app.run().await
}
