use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use egui::{Context, Rect};
use egui_extras::install_image_loaders;
use logger::{Color, Logger};
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    atlas::IconAtlas,
    config::Config,
    plugins,
    state::MapState,
    style::MarkerLayer,
    tiles::TemplateTiles,
    types::{Viewport, ICON_ATLAS},
    windows,
};

const PAGE_TITLE: &str = "Карта";

/// The map page: a heading on top and the interactive map below it.
///
/// `MapApp` owns the tile cache and the walkers map memory; the locations and
/// the interaction state live in a `MapState` shared with the map plugins.
pub struct MapApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    state: Rc<RefCell<MapState>>,
    layer: MarkerLayer,
    atlas: IconAtlas,
    popup_rect: Rc<Cell<Option<Rect>>>,
    logger: Logger,
    echo: bool,
}

impl MapApp {
    /// Creates the page, starting the camera at the state's viewport.
    pub fn new(egui_ctx: Context, state: MapState, config: &Config, logger: Logger) -> Self {
        install_image_loaders(&egui_ctx);

        let viewport = state.viewport();
        let mut map_memory = MapMemory::default();
        if map_memory.set_zoom(viewport.zoom).is_err() {
            let _ = logger.warn(
                &format!("initial zoom {} out of range, using default", viewport.zoom),
                config.echo,
            );
        }

        Self {
            tiles: Box::new(HttpTiles::with_options(
                TemplateTiles::new(&config.tile_url, config.tile_attribution.as_deref()),
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory,
            state: Rc::new(RefCell::new(state)),
            layer: MarkerLayer::new(),
            atlas: IconAtlas::new(ICON_ATLAS),
            popup_rect: Rc::new(Cell::new(None)),
            logger,
            echo: config.echo,
        }
    }

    /// Reports camera moves made through the map controls back to the state.
    fn sync_viewport(&mut self, home: Position) {
        let center = self.map_memory.detached().unwrap_or(home);
        let viewport = Viewport::from_position(center, self.map_memory.zoom());

        let mut state = self.state.borrow_mut();
        if state.viewport() != viewport {
            state.on_viewport_change(viewport);
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = self.atlas.poll(ctx) {
            let _ = self.logger.warn(&error, self.echo);
        }

        egui::TopBottomPanel::top("page_heading").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(PAGE_TITLE);
            });
        });

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let home = self.state.borrow().viewport().center();

                let markers = plugins::Markers::new(
                    self.state.clone(),
                    &mut self.layer,
                    self.atlas.texture(),
                    self.popup_rect.get(),
                );
                let overlay = plugins::Overlay::new(self.state.clone(), self.popup_rect.clone());

                let map = Map::new(Some(self.tiles.as_mut()), &mut self.map_memory, home)
                    .with_plugin(markers)
                    .with_plugin(overlay);

                ui.add(map);

                windows::zoom(ui, &mut self.map_memory);
                windows::acknowledge(ui, self.tiles.attribution());

                self.sync_viewport(home);
            });
    }
}

/// Opens the map window and blocks until it is closed.
pub fn open(state: MapState, config: Config, logger: Logger) -> Result<(), eframe::Error> {
    let _ = logger.info(
        &format!("opening map with {} locations", state.locations().len()),
        Color::Green,
        config.echo,
    );

    eframe::run_native(
        PAGE_TITLE,
        Default::default(),
        Box::new(move |cc| Ok(Box::new(MapApp::new(cc.egui_ctx.clone(), state, &config, logger)))),
    )
}
