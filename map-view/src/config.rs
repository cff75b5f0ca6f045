use std::path::PathBuf;

use crate::error::MapError;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

const USAGE: &str = "region-map [--locations <file.csv>] [--log-dir <dir>] \
    [--tiles <url-template>] [--tiles-attribution <text>] [--quiet]";

/// Startup options for the map window.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file with the locations to show. The built-in regions are used
    /// when absent.
    pub locations: Option<PathBuf>,
    pub log_dir: PathBuf,
    /// Raster tile URL with `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url: String,
    /// Credit shown for the tiles. Derived from `tile_url` when absent.
    pub tile_attribution: Option<String>,
    /// Echo log lines to the console.
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: None,
            echo: true,
        }
    }
}

impl Config {
    /// Builds the config from command line arguments, program name excluded.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Usage` for unknown flags and flags missing their
    /// value.
    pub fn from_args<I, S>(args: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--locations" => {
                    config.locations = Some(PathBuf::from(value(&mut args, "--locations")?))
                }
                "--log-dir" => config.log_dir = PathBuf::from(value(&mut args, "--log-dir")?),
                "--tiles" => {
                    let url = value(&mut args, "--tiles")?;
                    if !url.contains("{z}") || !url.contains("{x}") || !url.contains("{y}") {
                        return Err(MapError::Usage(format!(
                            "tile url '{}' needs {{z}}, {{x}} and {{y}} placeholders",
                            url
                        )));
                    }
                    config.tile_url = url;
                }
                "--tiles-attribution" => {
                    config.tile_attribution = Some(value(&mut args, "--tiles-attribution")?)
                }
                "--quiet" => config.echo = false,
                other => {
                    return Err(MapError::Usage(format!(
                        "unknown argument '{}'. Usage: {}",
                        other, USAGE
                    )))
                }
            }
        }

        Ok(config)
    }
}

fn value<I, S>(args: &mut I, flag: &str) -> Result<String, MapError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    args.next()
        .map(|v| v.as_ref().to_string())
        .ok_or_else(|| MapError::Usage(format!("{} needs a value. Usage: {}", flag, USAGE)))
}
