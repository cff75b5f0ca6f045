mod markers;
pub use markers::Markers;

mod overlay;
pub use overlay::Overlay;
