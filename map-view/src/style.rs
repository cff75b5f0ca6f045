use egui::Color32;

use crate::{state::InteractionState, types::LocationRecord};

pub const ICON_SIZE: f32 = 40.0;
pub const SELECTED_SCALE: f32 = 1.5;
pub const ICON_COLOR: Color32 = Color32::from_rgb(80, 140, 0);
pub const ICON_COLOR_SELECTED: Color32 = Color32::from_rgb(140, 0, 0);
pub const ICON_COLOR_HOVERED: Color32 = Color32::from_rgb(255, 204, 0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Color32,
    pub size: f32,
}

pub fn marker_color(location: &LocationRecord, interaction: &InteractionState) -> Color32 {
    if location.is(interaction.selected.as_deref()) {
        ICON_COLOR_SELECTED
    } else if location.is(interaction.hovered.as_deref()) {
        ICON_COLOR_HOVERED
    } else {
        ICON_COLOR
    }
}

pub fn marker_size(location: &LocationRecord, interaction: &InteractionState) -> f32 {
    if location.is(interaction.selected.as_deref()) {
        SELECTED_SCALE * ICON_SIZE
    } else {
        ICON_SIZE
    }
}

/// Last seen values of the state each derived property depends on.
///
/// `color` follows both the selection and the hover, `size` only the
/// selection.
#[derive(Debug, Clone, Default, PartialEq)]
struct UpdateTriggers {
    color: Option<(Option<String>, Option<String>)>,
    size: Option<Option<String>>,
}

/// Per-marker colors and sizes, recomputed only when their triggers change.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    styles: Vec<MarkerStyle>,
    triggers: UpdateTriggers,
    #[cfg(test)]
    recomputed: usize,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Styles for `locations`, in the same order.
    pub fn styles(
        &mut self,
        locations: &[LocationRecord],
        interaction: &InteractionState,
    ) -> &[MarkerStyle] {
        let resized = self.styles.len() != locations.len();
        if resized {
            self.styles = vec![
                MarkerStyle {
                    color: ICON_COLOR,
                    size: ICON_SIZE,
                };
                locations.len()
            ];
        }

        let color_trigger = (interaction.selected.clone(), interaction.hovered.clone());
        if resized || self.triggers.color.as_ref() != Some(&color_trigger) {
            for (style, location) in self.styles.iter_mut().zip(locations) {
                style.color = marker_color(location, interaction);
            }
            self.triggers.color = Some(color_trigger);
            #[cfg(test)]
            {
                self.recomputed += 1;
            }
        }

        let size_trigger = interaction.selected.clone();
        if resized || self.triggers.size.as_ref() != Some(&size_trigger) {
            for (style, location) in self.styles.iter_mut().zip(locations) {
                style.size = marker_size(location, interaction);
            }
            self.triggers.size = Some(size_trigger);
            #[cfg(test)]
            {
                self.recomputed += 1;
            }
        }

        &self.styles
    }

    /// How many property passes ran so far.
    #[cfg(test)]
    fn recomputations(&self) -> usize {
        self.recomputed
    }
}
