use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use egui::{Rect, Response};
use walkers::{Plugin, Projector};

use crate::{state::MapState, widgets::LocationPopup};

/// Shows the popup of the selected location and remembers where it was drawn
/// so the next frame can keep pointer events over it away from the map.
pub struct Overlay {
    state: Rc<RefCell<MapState>>,
    popup_rect: Rc<Cell<Option<Rect>>>,
}

impl Overlay {
    pub fn new(state: Rc<RefCell<MapState>>, popup_rect: Rc<Cell<Option<Rect>>>) -> Self {
        Self { state, popup_rect }
    }
}

impl Plugin for Overlay {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let selected = self.state.borrow().selected().cloned();
        let Some(location) = selected else {
            self.popup_rect.set(None);
            return;
        };

        let anchor = projector.project(location.position()).to_pos2();
        let popup = LocationPopup::new(&location).show(ui.ctx(), anchor);
        self.popup_rect.set(Some(popup.rect));

        if let Some(target) = popup.clicked {
            self.state.borrow_mut().on_popup_click(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::seed_locations,
        plugins::{
            headless::{button, run_frame},
            Markers,
        },
        style::MarkerLayer,
        types::INITIAL_ZOOM,
    };
    use egui::{pos2, Context, Event, Pos2};
    use walkers::{Map, MapMemory};

    const MAP_CENTER: Pos2 = Pos2 { x: 400.0, y: 300.0 };
    const ON_MOSCOW: Pos2 = Pos2 { x: 400.0, y: 285.0 };

    struct Page {
        ctx: Context,
        state: Rc<RefCell<MapState>>,
        layer: MarkerLayer,
        memory: MapMemory,
        popup_rect: Rc<Cell<Option<Rect>>>,
    }

    impl Page {
        fn new() -> Self {
            let mut memory = MapMemory::default();
            memory.set_zoom(INITIAL_ZOOM).expect("Invalid zoom");
            Self {
                ctx: Context::default(),
                state: Rc::new(RefCell::new(MapState::new(seed_locations()))),
                layer: MarkerLayer::new(),
                memory,
                popup_rect: Rc::new(Cell::new(None)),
            }
        }

        fn frame(&mut self, events: Vec<Event>) {
            let Page {
                ctx,
                state,
                layer,
                memory,
                popup_rect,
            } = self;
            run_frame(ctx, events, |ui| {
                let home = state.borrow().viewport().center();
                let markers = Markers::new(state.clone(), &mut *layer, None, popup_rect.get());
                let overlay = Overlay::new(state.clone(), popup_rect.clone());
                ui.add(
                    Map::new(None, &mut *memory, home)
                        .with_plugin(markers)
                        .with_plugin(overlay),
                );
            });
        }

        fn click(&mut self, pos: Pos2) {
            self.frame(vec![Event::PointerMoved(pos)]);
            self.frame(vec![button(pos, true)]);
            self.frame(vec![button(pos, false)]);
        }

        fn selected(&self) -> Option<String> {
            self.state.borrow().interaction().selected.clone()
        }
    }

    #[test]
    fn test_no_selection_clears_popup_rect() {
        let mut page = Page::new();
        page.popup_rect
            .set(Some(Rect::from_min_max(pos2(0.0, 0.0), pos2(50.0, 50.0))));

        page.frame(vec![]);
        assert_eq!(page.popup_rect.get(), None);
    }

    #[test]
    fn test_popup_is_pinned_to_selected_location() {
        let mut page = Page::new();
        page.frame(vec![]);
        page.click(ON_MOSCOW);
        page.frame(vec![]);

        let rect = page.popup_rect.get().expect("popup should be shown");
        assert!((rect.min - MAP_CENTER).length() < 1.0);
    }

    #[test]
    fn test_popup_disappears_after_clicking_empty_map() {
        let mut page = Page::new();
        page.frame(vec![]);
        page.click(ON_MOSCOW);
        page.frame(vec![]);
        assert!(page.popup_rect.get().is_some());

        page.click(pos2(100.0, 100.0));
        page.frame(vec![]);
        assert_eq!(page.selected(), None);
        assert_eq!(page.popup_rect.get(), None);
    }

    #[test]
    fn test_click_on_popup_keeps_selection() {
        let mut page = Page::new();
        page.frame(vec![]);
        page.click(ON_MOSCOW);
        page.frame(vec![]);
        page.frame(vec![]);

        page.click(MAP_CENTER + egui::vec2(20.0, 15.0));
        assert_eq!(page.selected().as_deref(), Some("77"));
    }
}
