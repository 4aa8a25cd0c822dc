//! Platform-free core of the holo card: turns hover, drag and device-tilt
//! input into one coalesced stream of visual parameters.

pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod machine;
pub mod orientation;
pub mod params;
pub mod platform;
pub mod scheduler;
pub mod transform;

pub use constants::*;
pub use engine::TiltEngine;
pub use error::TiltError;
pub use geometry::{GeometryCache, SurfaceGeometry};
pub use machine::{Action, DragSession, InputSource, InteractionMachine, Mode, Sample};
pub use orientation::{ActivationState, OrientationAdapter, Permission, Support};
pub use params::{css_value, Unit, VisualParams};
pub use platform::{Deferred, DeferredHandle, ParamSink, Platform, TimerKind};
pub use scheduler::FrameScheduler;
pub use transform::{DragRotation, Tilt, TiltConfig};
