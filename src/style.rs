//! Discrete style toggles and the card classes they map to.
//!
//! Pure lookup tables; the DOM side lives in `events::controls`.

pub const ITEM_CLASS: &str = "toggle-group-item";
pub const ACTIVE_CLASS: &str = "active";
pub const FLIPPED_CLASS: &str = "flipped";
pub const HOLO_DISABLED_CLASS: &str = "holo-disabled";

/// A button group whose single active item selects one look for the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Pattern,
    Style,
    BlendMode,
    HoloType,
}

impl Toggle {
    pub const ALL: [Toggle; 4] = [
        Toggle::Pattern,
        Toggle::Style,
        Toggle::BlendMode,
        Toggle::HoloType,
    ];

    pub fn group_selector(self) -> &'static str {
        match self {
            Toggle::Pattern => ".pattern-toggle-group",
            Toggle::Style => ".style-toggle-group",
            Toggle::BlendMode => ".blend-mode-toggle-group",
            Toggle::HoloType => ".holo-type-toggle-group",
        }
    }

    /// Attribute on each group item carrying its value.
    pub fn value_attribute(self) -> &'static str {
        match self {
            Toggle::Pattern => "data-pattern",
            Toggle::Style => "data-style",
            Toggle::BlendMode => "data-blend-mode",
            Toggle::HoloType => "data-holo-type",
        }
    }

    /// Element whose class list the toggle rewrites.
    pub fn target_selector(self) -> &'static str {
        match self {
            Toggle::Pattern => ".holo-pattern",
            Toggle::Style => "#eventCard",
            Toggle::BlendMode | Toggle::HoloType => ".card",
        }
    }

    /// Every class this toggle owns; all are cleared before one is applied.
    pub fn managed_classes(self) -> &'static [&'static str] {
        match self {
            Toggle::Pattern => &["pattern-outlined", "pattern-filled"],
            Toggle::Style => &["floating"],
            Toggle::BlendMode => &["luminosity", "normal", "overlay"],
            Toggle::HoloType => &["white-holo"],
        }
    }

    /// Class for a selected value. `None` means "plain": only clear.
    pub fn class_for(self, value: &str) -> Option<&'static str> {
        match (self, value) {
            (Toggle::Pattern, "outlined") => Some("pattern-outlined"),
            (Toggle::Pattern, "filled") => Some("pattern-filled"),
            (Toggle::Style, "floating") => Some("floating"),
            (Toggle::BlendMode, "luminosity") => Some("luminosity"),
            (Toggle::BlendMode, "normal") => Some("normal"),
            (Toggle::BlendMode, "overlay") => Some("overlay"),
            (Toggle::HoloType, "white") => Some("white-holo"),
            _ => None,
        }
    }
}

#[inline]
pub fn holo_switch_class(checked: bool) -> Option<&'static str> {
    (!checked).then_some(HOLO_DISABLED_CLASS)
}
