//! Cosmetic 3D tilt driven by a pointer drag.
//!
//! Purely visual: nothing here reads or writes calculator state. The host
//! feeds raw pointer events in and applies the resulting transform when
//! painting. Registering and releasing move/up listeners around a drag is
//! the host's job; the gesture state itself tolerates stray events.

mod gesture;
mod transform;

pub use gesture::{PointerButton, RotationState};
pub use transform::Transform;
