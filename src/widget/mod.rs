//! The presentation shell.
//!
//! [`CalculatorWidget`] ties the pieces together for a host UI: it owns the
//! calculator state, the tilt gesture, and the theme preference, and hands
//! back ready-to-paint display strings and a transform descriptor. The host
//! stays in charge of actual rendering and raw event delivery.

use tracing::debug;

use crate::calculator::{self, CalculatorAction, CalculatorState, Operator};
use crate::input;
use crate::rotation::{PointerButton, RotationState, Transform};
use crate::theme::{PreferenceStore, Theme, ThemeManager};

/// A complete calculator widget, minus the painting.
pub struct CalculatorWidget {
    state: CalculatorState,
    rotation: RotationState,
    theme: ThemeManager,
}

impl CalculatorWidget {
    /// Create a widget persisting its theme preference through `store`.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            state: CalculatorState::default(),
            rotation: RotationState::new(),
            theme: ThemeManager::new(store),
        }
    }

    // --- calculator ---

    /// Apply one user action, replacing the calculator state.
    pub fn dispatch(&mut self, action: CalculatorAction) {
        debug!(?action, "dispatch");
        self.state = calculator::reduce(&self.state, action);
    }

    /// The raw calculator state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The main display line, formatted.
    pub fn display_value(&self) -> String {
        calculator::format_display_value(&self.state.current_value)
    }

    /// The pending-operand line, formatted; empty while no operation is
    /// pending.
    pub fn previous_display(&self) -> String {
        if self.state.previous_value.is_empty() {
            String::new()
        } else {
            calculator::format_display_value(&self.state.previous_value)
        }
    }

    /// The operator indicator shown next to the pending operand.
    pub fn pending_operation(&self) -> Option<Operator> {
        self.state.operation
    }

    /// Feed a keyboard event. Returns `true` when the key was consumed and
    /// the host should suppress its default behavior.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match input::action_for_key(key) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    // --- tilt gesture (never touches the calculator state) ---

    /// Forward a pointer-down event; returns whether it started a drag.
    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) -> bool {
        self.rotation.pointer_down(button, x, y)
    }

    /// Forward pointer movement.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.rotation.pointer_move(x, y);
    }

    /// Forward a pointer-up event, ending any drag.
    pub fn pointer_up(&mut self) {
        self.rotation.pointer_up();
    }

    /// Double-click: snap the tilt back to its initial pose.
    pub fn reset_rotation(&mut self) {
        self.rotation.reset();
    }

    /// The transform the host should paint the widget with.
    pub fn transform(&self) -> Transform {
        self.rotation.transform()
    }

    // --- theme ---

    /// The currently selected theme.
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Select a theme; the preference is persisted immediately.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set_theme(theme);
    }

    /// Flip between light and dark themes.
    pub fn toggle_theme(&mut self, system_prefers_dark: bool) {
        self.theme.toggle(system_prefers_dark);
    }
}
