// Tuning constants for the gesture-to-transform engine.

// Hover mapping (pointer normalized to [-1, 1] around the surface center)
pub const HOVER_ROTATE_DEG: f32 = 10.0; // max tilt at the surface edge
pub const HOVER_TRANSLATE_PX: f32 = 15.0; // parallax shift, opposes tilt

// Drag mapping
pub const DRAG_ROTATE_PER_SURFACE: f32 = 20.0; // degrees per full surface width/height of travel
pub const DRAG_ROTATE_LIMIT_DEG: f32 = 30.0; // accumulator clamp per axis
pub const DRAG_TRANSLATE_RATIO: f32 = 0.5; // px of parallax per degree of rotation

// Device tilt mapping
pub const TILT_SCALE: f32 = 0.5; // beta/gamma degrees -> rotation degrees
pub const TILT_ROTATE_LIMIT_DEG: f32 = 20.0;
pub const TILT_HIGHLIGHT_GAIN: f32 = 2.0; // percent of sweep per degree of rotation

// Neutral highlight sits in the middle of the 0..100% sweep
pub const HIGHLIGHT_CENTER_PCT: f32 = 50.0;
pub const HIGHLIGHT_MAX_PCT: f32 = 100.0;

// Deferred tasks
pub const DRAG_RELEASE_GRACE_MS: u32 = 100; // hold output after an in-bounds release
pub const ORIENTATION_RESUME_MS: u32 = 500; // keep tilt suppressed after a touch ends

// Drag movement below this many degrees still counts as a click
pub const CLICK_SLOP_DEG: f32 = 0.5;
