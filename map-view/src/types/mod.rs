mod location;
pub use location::{Coordinates, LocationRecord};

mod viewport;
pub use viewport::{Viewport, INITIAL_LAT, INITIAL_LON, INITIAL_ZOOM};

mod pointer_event;
pub use pointer_event::{PointerEvent, PopupTarget};

mod icon_mapping;
pub use icon_mapping::{IconMapping, ICON_ATLAS, MARKER};
