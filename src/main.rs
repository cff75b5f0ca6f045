use std::env;

use map_view::{config::Config, error::MapError};

/// Opens the region map window.
///
/// # Usage
///
/// ```sh
/// cargo run -- [--locations regions.csv] [--log-dir logs] [--tiles <url-template>] [--quiet]
/// ```
///
/// Without `--locations` the built-in regions are shown.
fn main() -> Result<(), MapError> {
    let config = Config::from_args(env::args().skip(1))?;
    map_view::run(config)
}
