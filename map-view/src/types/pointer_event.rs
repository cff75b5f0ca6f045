/// A pointer event dispatched to the map handlers.
///
/// `consumed` is set once something upstream (the popup, or the marker layer
/// on a click) has handled the event. Handlers that honor the guard leave the
/// state untouched when it is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerEvent {
    consumed: bool,
}

impl PointerEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self { consumed: true }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

/// Part of the popup overlay that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTarget {
    Overlay,
    Item,
    Content,
}

impl PopupTarget {
    /// The targets a click on `self` reaches, innermost first.
    pub fn bubble(self) -> &'static [PopupTarget] {
        match self {
            PopupTarget::Content => &[PopupTarget::Content, PopupTarget::Item, PopupTarget::Overlay],
            PopupTarget::Item => &[PopupTarget::Item, PopupTarget::Overlay],
            PopupTarget::Overlay => &[PopupTarget::Overlay],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PopupTarget::Overlay => "popup overlay",
            PopupTarget::Item => "popup item",
            PopupTarget::Content => "popup content",
        }
    }
}
