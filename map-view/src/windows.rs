use egui::{Align2, RichText, Ui, Window};
use walkers::{sources::Attribution, MapMemory};

/// Zoom buttons in the bottom-left corner of the map. Clicks past the zoom
/// limits are ignored.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("zoom")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("+").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("-").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Tile attribution in the bottom-right corner.
pub fn acknowledge(ui: &Ui, attribution: Attribution) {
    Window::new("attribution")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                ui.label("©");
                if attribution.url.is_empty() {
                    ui.label(attribution.text);
                } else {
                    ui.hyperlink_to(attribution.text, attribution.url);
                }
            });
        });
}
