//! The visual parameter set written to the sink every frame.

use crate::constants::HIGHLIGHT_CENTER_PCT;

/// Unit attached to each parameter when it reaches the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Degrees,
    Pixels,
    Percent,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Degrees => "deg",
            Unit::Pixels => "px",
            Unit::Percent => "%",
        }
    }
}

/// Rotation, parallax translation and highlight position of the surface.
///
/// This is the only externally observable output of the engine. Values carry
/// no identity between frames; each frame produces a fresh set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub highlight_x: f32,
    pub highlight_y: f32,
}

impl VisualParams {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
        highlight_x: HIGHLIGHT_CENTER_PCT,
        highlight_y: HIGHLIGHT_CENTER_PCT,
    };

    #[inline]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Named values in sink order, paired with their CSS custom property.
    pub fn entries(&self) -> [(&'static str, f32, Unit); 6] {
        [
            ("--rx", self.rotate_x, Unit::Degrees),
            ("--ry", self.rotate_y, Unit::Degrees),
            ("--tx", self.translate_x, Unit::Pixels),
            ("--ty", self.translate_y, Unit::Pixels),
            ("--posx", self.highlight_x, Unit::Percent),
            ("--posy", self.highlight_y, Unit::Percent),
        ]
    }
}

impl Default for VisualParams {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Render a value for a CSS custom property, two decimals plus unit.
pub fn css_value(value: f32, unit: Unit) -> String {
    // avoid "-0.00"
    let v = if value.abs() < 0.005 { 0.0 } else { value };
    format!("{:.2}{}", v, unit.suffix())
}
