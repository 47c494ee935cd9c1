use anyhow::Result;
use clap::{Parser, ValueEnum};
use ring_snake::game::GameConfig;
use ring_snake::logging::{self, LogTarget};
use ring_snake::modes::{HeadlessMode, PlayMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ring_snake")]
#[command(version, about = "Grid snake with a ring-buffer body")]
struct Cli {
    /// How to run the game
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON file with a game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Frame budget for headless mode
    #[arg(long, default_value = "100000")]
    max_frames: u64,

    /// Write logs to this file (play mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
    /// Run the snake straight ahead on a virtual clock and print a JSON summary
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }

    fn log_target(&self) -> LogTarget<'_> {
        match (&self.log_file, &self.mode) {
            (Some(path), _) => LogTarget::File(path),
            (None, Mode::Headless) => LogTarget::Stderr,
            (None, Mode::Play) => LogTarget::Off,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_target(), &cli.log_level)?;

    let config = cli.game_config()?;

    let outcome = match cli.mode {
        Mode::Play => PlayMode::new(config).run().await.map(|_| ()),
        Mode::Headless => {
            let summary = HeadlessMode::new(config, cli.max_frames).run().await;
            summary.and_then(|summary| {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                Ok(())
            })
        }
    };

    if let Err(err) = &outcome {
        tracing::error!(error = %err, "ring_snake stopped");
    }
    outcome
}
