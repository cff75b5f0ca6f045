use std::{cell::RefCell, rc::Rc};

use egui::{Pos2, Rect, Response, TextureHandle};
use walkers::{Plugin, Projector};

use crate::{
    state::MapState,
    style::{MarkerLayer, MarkerStyle},
    types::{LocationRecord, PointerEvent, MARKER},
};

/// Draws one icon per location and turns pointer input over the map into
/// hover and click events.
pub struct Markers<'a> {
    state: Rc<RefCell<MapState>>,
    layer: &'a mut MarkerLayer,
    atlas: Option<&'a TextureHandle>,
    popup_rect: Option<Rect>,
}

impl<'a> Markers<'a> {
    pub fn new(
        state: Rc<RefCell<MapState>>,
        layer: &'a mut MarkerLayer,
        atlas: Option<&'a TextureHandle>,
        popup_rect: Option<Rect>,
    ) -> Self {
        Self {
            state,
            layer,
            atlas,
            popup_rect,
        }
    }
}

impl Plugin for Markers<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, response: &Response, projector: &Projector) {
        let Markers {
            state,
            layer,
            atlas,
            popup_rect,
        } = *self;
        let mut state = state.borrow_mut();

        let styles = layer.styles(state.locations(), state.interaction());
        let rects = marker_rects(state.locations(), styles, projector);

        let pointer = response.hover_pos();
        let mut event = match (pointer, popup_rect) {
            (Some(pointer), Some(popup)) if popup.contains(pointer) => PointerEvent::consumed(),
            _ => PointerEvent::new(),
        };
        let picked: Option<LocationRecord> = pointer
            .and_then(|p| pick(&rects, p))
            .map(|i| state.locations()[i].clone());

        if response.hovered() {
            match &picked {
                Some(location) => state.on_marker_hover(Some(location), &event),
                None => state.on_map_hover(),
            }
        } else if state.interaction().hovered.is_some() {
            state.on_marker_hover(None, &event);
        }

        if response.clicked() {
            let handled = match &picked {
                Some(location) => state.on_marker_click(location, &mut event),
                None => false,
            };
            if !handled {
                state.on_map_click(picked.as_ref(), &event);
            }
        }

        // Events above may have changed the selection or the hover.
        let styles = layer.styles(state.locations(), state.interaction());
        let rects = marker_rects(state.locations(), styles, projector);
        let painter = ui.painter();
        for (rect, style) in rects.iter().zip(styles) {
            match atlas {
                Some(texture) => {
                    painter.image(texture.id(), *rect, MARKER.uv(texture.size_vec2()), style.color);
                }
                None => {
                    painter.circle_filled(rect.center(), rect.width() / 4.0, style.color);
                }
            }
        }
    }
}

fn marker_rects(
    locations: &[LocationRecord],
    styles: &[MarkerStyle],
    projector: &Projector,
) -> Vec<Rect> {
    locations
        .iter()
        .zip(styles)
        .map(|(location, style)| {
            let anchor = projector.project(location.position()).to_pos2();
            MARKER.screen_rect(anchor, style.size)
        })
        .collect()
}

/// Index of the topmost marker under `pointer`. Later markers are drawn on
/// top of earlier ones.
pub fn pick(rects: &[Rect], pointer: Pos2) -> Option<usize> {
    rects.iter().rposition(|rect| rect.contains(pointer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::seed_locations,
        plugins::headless::{button, run_frame},
        types::INITIAL_ZOOM,
    };
    use egui::{pos2, Context, Event};
    use walkers::{Map, MapMemory};

    /// "77" sits at the map center, so its icon covers the area just above
    /// the middle of the screen. "01" is far outside the view.
    const ON_MOSCOW: Pos2 = Pos2 { x: 400.0, y: 285.0 };
    const EMPTY_MAP: Pos2 = Pos2 { x: 100.0, y: 100.0 };

    struct Page {
        ctx: Context,
        state: Rc<RefCell<MapState>>,
        layer: MarkerLayer,
        memory: MapMemory,
    }

    impl Page {
        fn new() -> Self {
            let mut memory = MapMemory::default();
            memory.set_zoom(INITIAL_ZOOM).expect("Invalid zoom");
            let mut page = Self {
                ctx: Context::default(),
                state: Rc::new(RefCell::new(MapState::new(seed_locations()))),
                layer: MarkerLayer::new(),
                memory,
            };
            // Lay the map out once so pointer events have a widget to hit.
            page.frame(None, vec![]);
            page
        }

        fn frame(&mut self, popup_rect: Option<Rect>, events: Vec<Event>) {
            let Page {
                ctx,
                state,
                layer,
                memory,
            } = self;
            run_frame(ctx, events, |ui| {
                let home = state.borrow().viewport().center();
                let markers = Markers::new(state.clone(), &mut *layer, None, popup_rect);
                ui.add(Map::new(None, &mut *memory, home).with_plugin(markers));
            });
        }

        fn move_to(&mut self, pos: Pos2, popup_rect: Option<Rect>) {
            self.frame(popup_rect, vec![Event::PointerMoved(pos)]);
        }

        fn click(&mut self, pos: Pos2, popup_rect: Option<Rect>) {
            self.move_to(pos, popup_rect);
            self.frame(popup_rect, vec![button(pos, true)]);
            self.frame(popup_rect, vec![button(pos, false)]);
        }

        fn selected(&self) -> Option<String> {
            self.state.borrow().interaction().selected.clone()
        }

        fn hovered(&self) -> Option<String> {
            self.state.borrow().interaction().hovered.clone()
        }
    }

    #[test]
    fn test_click_on_marker_selects_it() {
        let mut page = Page::new();
        page.click(ON_MOSCOW, None);
        assert_eq!(page.selected().as_deref(), Some("77"));
    }

    #[test]
    fn test_click_on_empty_map_clears_selection() {
        let mut page = Page::new();
        page.click(ON_MOSCOW, None);

        page.click(EMPTY_MAP, None);
        assert_eq!(page.selected(), None);
        assert_eq!(page.hovered(), None);
    }

    #[test]
    fn test_click_inside_popup_keeps_selection() {
        let mut page = Page::new();
        page.click(ON_MOSCOW, None);

        let popup = Rect::from_center_size(EMPTY_MAP, egui::vec2(120.0, 60.0));
        page.click(EMPTY_MAP, Some(popup));
        assert_eq!(page.selected().as_deref(), Some("77"));
    }

    #[test]
    fn test_hover_follows_the_pointer() {
        let mut page = Page::new();

        page.move_to(ON_MOSCOW, None);
        assert_eq!(page.hovered().as_deref(), Some("77"));

        page.move_to(EMPTY_MAP, None);
        assert_eq!(page.hovered(), None);
    }

    #[test]
    fn test_pointer_leaving_the_map_clears_hover() {
        let mut page = Page::new();
        page.move_to(ON_MOSCOW, None);

        page.frame(None, vec![Event::PointerGone]);
        page.frame(None, vec![]);
        assert_eq!(page.hovered(), None);
    }

    #[test]
    fn test_pick_misses_empty_area() {
        let rects = [MARKER.screen_rect(pos2(50.0, 50.0), 40.0)];
        assert_eq!(pick(&rects, pos2(200.0, 200.0)), None);
    }

    #[test]
    fn test_pick_hits_icon_above_anchor() {
        let rects = [MARKER.screen_rect(pos2(50.0, 50.0), 40.0)];
        assert_eq!(pick(&rects, pos2(50.0, 30.0)), Some(0));
        // Below the anchor is outside the icon.
        assert_eq!(pick(&rects, pos2(50.0, 60.0)), None);
    }

    #[test]
    fn test_pick_prefers_topmost() {
        let rects = [
            MARKER.screen_rect(pos2(50.0, 50.0), 40.0),
            MARKER.screen_rect(pos2(55.0, 50.0), 40.0),
        ];
        assert_eq!(pick(&rects, pos2(52.0, 40.0)), Some(1));
        assert_eq!(pick(&rects, pos2(32.0, 40.0)), Some(0));
    }
}
