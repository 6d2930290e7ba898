//! Keyboard input adapter.
//!
//! Translates the DOM-style key identifiers delivered by the host into
//! calculator actions. The host decides how to obtain key events; this
//! module only decides what they mean.

mod keymap;

pub use keymap::action_for_key;
