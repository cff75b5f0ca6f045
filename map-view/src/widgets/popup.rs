use egui::{Color32, Context, Frame, Id, Order, Pos2, Rect, RichText, Sense};

use crate::types::{LocationRecord, PopupTarget};

/// Small white card with the name and address of a location, pinned to a
/// screen position.
pub struct LocationPopup<'a> {
    location: &'a LocationRecord,
}

pub struct PopupResponse {
    pub rect: Rect,
    pub clicked: Option<PopupTarget>,
}

impl<'a> LocationPopup<'a> {
    pub fn new(location: &'a LocationRecord) -> Self {
        Self { location }
    }

    pub fn show(&self, ctx: &Context, anchor: Pos2) -> PopupResponse {
        let area = egui::Area::new(Id::new("location_popup"))
            .order(Order::Foreground)
            .fixed_pos(anchor)
            .show(ctx, |ui| {
                let card = Frame::none()
                    .fill(Color32::WHITE)
                    .inner_margin(8.0)
                    .rounding(4.0)
                    .show(ui, |ui| {
                        let name =
                            ui.label(RichText::new(&self.location.name).color(Color32::BLACK));
                        let address =
                            ui.label(RichText::new(&self.location.address).color(Color32::BLACK));
                        name.rect.union(address.rect)
                    });

                let click = card.response.interact(Sense::click());
                if !click.clicked() {
                    None
                } else if click
                    .interact_pointer_pos()
                    .is_some_and(|pointer| card.inner.contains(pointer))
                {
                    Some(PopupTarget::Content)
                } else {
                    Some(PopupTarget::Item)
                }
            });

        PopupResponse {
            rect: area.response.rect,
            clicked: area.inner,
        }
    }
}
