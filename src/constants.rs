// Element ids the front-end binds to.

pub const CARD_ID: &str = "eventCard"; // the tilting surface
pub const HOLO_SWITCH_ID: &str = "holo-enabled-switch"; // checkbox toggling the holo layer
pub const TILT_BUTTON_ID: &str = "tilt-permission"; // shown only when orientation needs consent

// Class that hides an element until it is needed
pub const HIDDEN_CLASS: &str = "hidden";
