mod popup;
pub use popup::LocationPopup;
