#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use caro::{
    init_logging, CliSession, Difficulty, GameEngine, GameMode, Settings, Theme, SETTINGS_FILE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Overrides shared by both subcommands; anything left out comes from the
/// settings file.
#[derive(clap::Args, Debug)]
#[cfg(feature = "std")]
struct Overrides {
    #[arg(long, default_value = SETTINGS_FILE, help = "Settings file to read (and write with --save)")]
    settings: PathBuf,
    #[arg(long, help = "Board side length, 3-10")]
    size: Option<usize>,
    #[arg(long, help = "Marks in a row needed to win, 3-min(size, 6)")]
    win: Option<usize>,
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    #[arg(long, value_enum)]
    mode: Option<GameMode>,
    #[arg(long, value_enum)]
    theme: Option<Theme>,
    #[arg(long, help = "Write the resulting settings back to the settings file")]
    save: bool,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a match in the terminal.
    Play {
        #[command(flatten)]
        overrides: Overrides,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 500, help = "Pause before the computer replies, in milliseconds")]
        delay_ms: u64,
    },
    /// Show, change and optionally save the settings.
    Settings {
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[cfg(feature = "std")]
impl Overrides {
    fn apply(&self) -> anyhow::Result<Settings> {
        let mut settings = Settings::load(&self.settings)?;
        if let Some(size) = self.size {
            settings.set_board_size(size)?;
        }
        if let Some(win) = self.win {
            settings.win_condition = win;
        }
        if let Some(difficulty) = self.difficulty {
            settings.ai_difficulty = difficulty;
        }
        if let Some(mode) = self.mode {
            settings.game_mode = mode;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        // reject bad combinations before anything is saved
        settings.to_configuration()?;
        Ok(settings)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            overrides,
            seed,
            delay_ms,
        } => {
            let settings = overrides.apply()?;
            let config = settings.to_configuration()?;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let engine = match seed {
                Some(s) => GameEngine::seeded(config, s),
                None => GameEngine::from_entropy(config),
            };
            let save_to = overrides.save.then(|| overrides.settings.clone());
            let mut session =
                CliSession::new(engine, settings, save_to, Duration::from_millis(delay_ms));

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            session.run(&mut stdin.lock(), &mut stdout.lock())?;
        }
        Commands::Settings { overrides } => {
            let settings = overrides.apply()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if overrides.save {
                settings.save(&overrides.settings)?;
                println!("Saved to {}", overrides.settings.display());
            }
        }
    }
    Ok(())
}
