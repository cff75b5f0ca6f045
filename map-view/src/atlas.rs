use egui::{load::BytesPoll, ColorImage, Context, TextureHandle, TextureOptions};

/// The marker icon atlas, fetched through the egui loaders and turned into a
/// white alpha mask so markers can be tinted with any color.
pub struct IconAtlas {
    uri: String,
    state: AtlasState,
}

enum AtlasState {
    Loading,
    Ready(TextureHandle),
    Failed,
}

impl IconAtlas {
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            state: AtlasState::Loading,
        }
    }

    /// Advances loading. Returns an error message in the frame where loading fails;
    /// after that markers are drawn without the atlas.
    pub fn poll(&mut self, ctx: &Context) -> Option<String> {
        if !matches!(self.state, AtlasState::Loading) {
            return None;
        }

        let bytes = match ctx.try_load_bytes(&self.uri) {
            Ok(BytesPoll::Ready { bytes, .. }) => bytes,
            Ok(BytesPoll::Pending { .. }) => return None,
            Err(e) => {
                self.state = AtlasState::Failed;
                return Some(format!("icon atlas {} unavailable: {}", self.uri, e));
            }
        };

        match mask_from_png(&bytes) {
            Ok(image) => {
                let texture = ctx.load_texture("marker-atlas", image, TextureOptions::LINEAR);
                self.state = AtlasState::Ready(texture);
                None
            }
            Err(e) => {
                self.state = AtlasState::Failed;
                Some(format!("icon atlas {} is not a valid image: {}", self.uri, e))
            }
        }
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        match &self.state {
            AtlasState::Ready(texture) => Some(texture),
            _ => None,
        }
    }
}

/// Decodes an image and keeps only its alpha channel, painting every pixel
/// white.
pub fn mask_from_png(bytes: &[u8]) -> Result<ColorImage, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];

    let mut pixels = rgba.into_raw();
    for pixel in pixels.chunks_exact_mut(4) {
        pixel[0] = 255;
        pixel[1] = 255;
        pixel[2] = 255;
    }

    Ok(ColorImage::from_rgba_unmultiplied(size, &pixels))
}
