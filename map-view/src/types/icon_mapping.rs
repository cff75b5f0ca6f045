use egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const ICON_ATLAS: &str =
    "https://raw.githubusercontent.com/visgl/deck.gl-data/master/website/icon-atlas.png";

/// Where an icon lives inside the atlas and which of its pixels sits on the
/// marker's geographic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconMapping {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
    /// The icon is an alpha mask and takes the marker color.
    pub mask: bool,
}

/// The single "marker" icon: 128x128 at the atlas origin, anchored at its
/// bottom-center.
pub const MARKER: IconMapping = IconMapping {
    x: 0.0,
    y: 0.0,
    width: 128.0,
    height: 128.0,
    anchor_x: 64.0,
    anchor_y: 128.0,
    mask: true,
};

impl IconMapping {
    /// Screen rectangle of the icon drawn `size` pixels tall with its anchor
    /// at `anchor`.
    pub fn screen_rect(&self, anchor: Pos2, size: f32) -> Rect {
        let scale = size / self.height;
        let min = anchor - vec2(self.anchor_x * scale, self.anchor_y * scale);
        Rect::from_min_size(min, vec2(self.width * scale, size))
    }

    /// Normalized texture coordinates of the icon in an atlas of `atlas_size`.
    pub fn uv(&self, atlas_size: Vec2) -> Rect {
        if atlas_size.x <= 0.0 || atlas_size.y <= 0.0 {
            return Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        }
        Rect::from_min_max(
            pos2(self.x / atlas_size.x, self.y / atlas_size.y),
            pos2(
                (self.x + self.width) / atlas_size.x,
                (self.y + self.height) / atlas_size.y,
            ),
        )
    }
}
