use walkers::{
    sources::{Attribution, TileSource},
    TileId,
};

use crate::config::DEFAULT_TILE_URL;

const OSM_TEXT: &str = "OpenStreetMap contributors";
const OSM_URL: &str = "https://www.openstreetmap.org/copyright";

/// Raster tiles fetched from a `{z}/{x}/{y}` URL template.
#[derive(Debug, Clone)]
pub struct TemplateTiles {
    url_template: String,
    attribution_text: &'static str,
    attribution_url: &'static str,
}

impl TemplateTiles {
    /// Tiles from `url_template`, credited to `attribution` when given.
    ///
    /// Without an explicit attribution the default template is credited to
    /// OpenStreetMap and any other template to its host.
    pub fn new(url_template: &str, attribution: Option<&str>) -> Self {
        let (text, url) = match attribution {
            Some(text) => (text.to_string(), String::new()),
            None if url_template == DEFAULT_TILE_URL => (OSM_TEXT.to_string(), OSM_URL.to_string()),
            None => {
                let (scheme, host) = split_host(url_template);
                (host.to_string(), format!("{}{}", scheme, host))
            }
        };

        // Attribution wants 'static text. Tiles are built once per window.
        Self {
            url_template: url_template.to_string(),
            attribution_text: Box::leak(text.into_boxed_str()),
            attribution_url: Box::leak(url.into_boxed_str()),
        }
    }
}

fn split_host(url: &str) -> (&str, &str) {
    let (scheme, rest) = match url.find("://") {
        Some(i) => url.split_at(i + 3),
        None => ("", url),
    };
    let host = rest.split('/').next().unwrap_or(rest);
    (scheme, host)
}

impl TileSource for TemplateTiles {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.url_template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution_text,
            url: self.attribution_url,
            logo_light: None,
            logo_dark: None,
        }
    }
}
