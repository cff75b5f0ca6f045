use logger::{Color, Logger};

mod atlas;
pub mod config;
pub mod data;
pub mod error;
mod map;
mod plugins;
pub mod state;
pub mod style;
mod tiles;
pub mod types;
mod widgets;
mod windows;

use config::Config;
use error::MapError;
use state::MapState;

const LOG_NAME: &str = "region_map";

/// Loads the locations named by `config` and shows them on the map window.
pub fn run(config: Config) -> Result<(), MapError> {
    let logger = Logger::new(&config.log_dir, LOG_NAME)?;

    let locations = match &config.locations {
        Some(path) => {
            let locations = data::load_locations(path)?;
            let _ = logger.info(
                &format!("loaded {} locations from {}", locations.len(), path.display()),
                Color::Cyan,
                config.echo,
            );
            locations
        }
        None => data::seed_locations(),
    };

    let state = MapState::new(locations).with_logger(logger.clone(), config.echo);
    map::open(state, config, logger)?;
    Ok(())
}

