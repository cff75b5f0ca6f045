use logger::Logger;

use crate::types::{LocationRecord, PointerEvent, PopupTarget, Viewport};

/// Tracks which location is under the pointer and which one was clicked.
///
/// Both slots hold a location code. They may point at the same location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: Option<String>,
    pub selected: Option<String>,
}

/// Everything the map page needs between frames: the locations, the camera
/// and the interaction state.
pub struct MapState {
    locations: Vec<LocationRecord>,
    viewport: Viewport,
    interaction: InteractionState,
    logger: Option<Logger>,
    echo: bool,
}

impl MapState {
    pub fn new(locations: Vec<LocationRecord>) -> Self {
        Self {
            locations,
            viewport: Viewport::default(),
            interaction: InteractionState::default(),
            logger: None,
            echo: false,
        }
    }

    /// Sends the diagnostic event trace to `logger`.
    pub fn with_logger(mut self, logger: Logger, echo: bool) -> Self {
        self.logger = Some(logger);
        self.echo = echo;
        self
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn hovered(&self) -> Option<&LocationRecord> {
        self.find(self.interaction.hovered.as_deref())
    }

    pub fn selected(&self) -> Option<&LocationRecord> {
        self.find(self.interaction.selected.as_deref())
    }

    fn find(&self, code: Option<&str>) -> Option<&LocationRecord> {
        let code = code?;
        self.locations.iter().find(|l| l.code == code)
    }

    /// Replaces the viewport with whatever the map controls report.
    pub fn on_viewport_change(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The pointer moved over a marker, or off every marker when `location`
    /// is `None`.
    pub fn on_marker_hover(&mut self, location: Option<&LocationRecord>, event: &PointerEvent) {
        if event.is_consumed() {
            return;
        }
        self.interaction.hovered = location.map(|l| l.code.clone());
    }

    /// The pointer moved over the map background. Clears the hover
    /// unconditionally.
    pub fn on_map_hover(&mut self) {
        self.interaction.hovered = None;
    }

    /// A marker was clicked.
    ///
    /// Always reports the click as handled and marks `event` consumed, so the
    /// map-level click handler leaves the selection alone.
    pub fn on_marker_click(&mut self, location: &LocationRecord, event: &mut PointerEvent) -> bool {
        self.trace(&format!("marker layer clicked: {}", location.code));
        if !event.is_consumed() {
            self.interaction.selected = Some(location.code.clone());
        }
        event.consume();
        true
    }

    /// The map was clicked. `location` is whatever sits under the pointer,
    /// `None` on empty map, which clears the selection.
    pub fn on_map_click(&mut self, location: Option<&LocationRecord>, event: &PointerEvent) {
        self.trace("map clicked");
        if event.is_consumed() {
            return;
        }
        self.interaction.selected = location.map(|l| l.code.clone());
    }

    /// Clicks on the popup only leave a trace.
    pub fn on_popup_click(&mut self, target: PopupTarget) {
        for reached in target.bubble() {
            self.trace(&format!("{} clicked", reached.as_str()));
        }
    }

    fn trace(&self, message: &str) {
        if let Some(logger) = &self.logger {
            // Diagnostics never affect the map.
            let _ = logger.debug(message, self.echo);
        }
    }
}
