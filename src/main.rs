use anyhow::{Context, Result};
use clap::Parser;
use plantsim_lib::app::{self, Controller, Ending, Plan};
use plantsim_lib::model::config::AppConfig;
use plantsim_lib::model::game::Game;
use plantsim_lib::model::metrics::init_logging;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grow a plant by managing its water, light and nutrients", long_about = None)]
struct Args {
    /// Number of rounds in the game (time periods)
    max_time_periods: i64,

    /// Plant size to reach before the end of the game, in inches
    max_plant_size: i64,

    /// Mode to run the game in
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// JSON round plan, required in headless mode
    #[arg(short, long)]
    plan: Option<PathBuf>,

    /// Log round details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Interactive,
    Headless,
}

fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    AppConfig::from_toml(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = load_config(&args.config)?;
    config.game.max_time_period = args.max_time_periods;
    config.game.max_plant_size = args.max_plant_size as f64;
    tracing::info!(fingerprint = %config.fingerprint(), "Configuration loaded");

    let mut game = Game::new(config.game, config.plant);

    match args.mode {
        Mode::Headless => {
            let plan_path = args
                .plan
                .context("--plan is required in headless mode")?;
            let content = std::fs::read_to_string(&plan_path)
                .with_context(|| format!("Failed to read plan {}", plan_path.display()))?;
            let plan = Plan::from_json(&content)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let ending = app::run_plan(&mut game, &plan, &mut out)?;
            out.flush()?;
            tracing::info!(?ending, rounds = game.metrics().rounds(), "Headless game finished");
        }
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut controller = Controller::new(game, stdin.lock(), io::stdout());
            let ending = controller.run()?;
            if matches!(ending, Ending::Quit) {
                tracing::debug!("Player quit");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["plantsim", "20", "10"]);
        assert_eq!(args.max_time_periods, 20);
        assert_eq!(args.max_plant_size, 10);
        assert_eq!(args.mode, Mode::Interactive);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(args.plan.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_headless() {
        let args = Args::parse_from([
            "plantsim", "5", "3", "--mode", "headless", "--plan", "rounds.json",
        ]);
        assert_eq!(args.mode, Mode::Headless);
        assert_eq!(args.plan, Some(PathBuf::from("rounds.json")));
    }

    #[test]
    fn test_args_reject_non_integer_limits() {
        assert!(Args::try_parse_from(["plantsim", "ten", "10"]).is_err());
        assert!(Args::try_parse_from(["plantsim", "10", "2.5"]).is_err());
    }

    #[test]
    fn test_negative_limits_parse_and_fall_back() {
        let args = Args::parse_from(["plantsim", "--", "-1", "0"]);
        assert_eq!(args.max_time_periods, -1);
        let mut config = AppConfig::default();
        config.game.max_time_period = args.max_time_periods;
        config.game.max_plant_size = args.max_plant_size as f64;
        let game = Game::new(config.game, config.plant);
        assert_eq!(game.max_time_period(), 20);
        assert_eq!(game.max_plant_size(), 10.0);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = load_config(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
