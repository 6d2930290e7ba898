//! Drag-gesture state for the tilt effect.

use super::transform::Transform;

/// Tilt shown before any drag, and after a reset.
const INITIAL_TILT_X: f64 = 15.0;
const INITIAL_TILT_Y: f64 = -15.0;

/// Degrees of tilt per unit of pointer travel.
const DRAG_SENSITIVITY: f64 = 0.5;

/// Which button a pointer-down event carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Current tilt angles and drag progress.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationState {
    rotate_x: f64,
    rotate_y: f64,
    dragging: bool,
    last_x: f64,
    last_y: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            rotate_x: INITIAL_TILT_X,
            rotate_y: INITIAL_TILT_Y,
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
        }
    }
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag at the given pointer position. Only the middle button
    /// grabs the widget; returns whether the event was consumed.
    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) -> bool {
        if button != PointerButton::Middle {
            return false;
        }
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
        true
    }

    /// Track pointer movement. Outside a drag this is a no-op, so the host
    /// may leave its move listener attached.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }
        // Vertical travel tilts around the X axis, horizontal around Y; the
        // anchor follows the pointer so deltas stay incremental.
        self.rotate_x += (y - self.last_y) * DRAG_SENSITIVITY;
        self.rotate_y += (x - self.last_x) * DRAG_SENSITIVITY;
        self.last_x = x;
        self.last_y = y;
    }

    /// End the drag, keeping the tilt reached so far.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Snap back to the initial tilt (double-click).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The transform the host should paint with.
    pub fn transform(&self) -> Transform {
        Transform {
            rotate_x_deg: self.rotate_x,
            rotate_y_deg: self.rotate_y,
            animated: !self.dragging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tilt() {
        let rotation = RotationState::new();
        let transform = rotation.transform();
        assert_eq!(transform.rotate_x_deg, 15.0);
        assert_eq!(transform.rotate_y_deg, -15.0);
        assert!(transform.animated);
        assert!(!rotation.is_dragging());
    }

    #[test]
    fn test_only_middle_button_starts_drag() {
        let mut rotation = RotationState::new();
        assert!(!rotation.pointer_down(PointerButton::Primary, 10.0, 10.0));
        assert!(!rotation.is_dragging());
        assert!(!rotation.pointer_down(PointerButton::Secondary, 10.0, 10.0));
        assert!(!rotation.is_dragging());
        assert!(rotation.pointer_down(PointerButton::Middle, 10.0, 10.0));
        assert!(rotation.is_dragging());
    }

    #[test]
    fn test_drag_accumulates_half_degree_per_unit() {
        let mut rotation = RotationState::new();
        rotation.pointer_down(PointerButton::Middle, 100.0, 100.0);
        rotation.pointer_move(110.0, 120.0);
        let transform = rotation.transform();
        // dy 20 → +10° around X, dx 10 → +5° around Y.
        assert_eq!(transform.rotate_x_deg, 25.0);
        assert_eq!(transform.rotate_y_deg, -10.0);
    }

    #[test]
    fn test_anchor_follows_pointer() {
        let mut rotation = RotationState::new();
        rotation.pointer_down(PointerButton::Middle, 0.0, 0.0);
        rotation.pointer_move(10.0, 0.0);
        rotation.pointer_move(10.0, 0.0);
        // Second move has no delta, so no further tilt.
        assert_eq!(rotation.transform().rotate_y_deg, -10.0);
    }

    #[test]
    fn test_move_outside_drag_is_ignored() {
        let mut rotation = RotationState::new();
        rotation.pointer_move(500.0, 500.0);
        assert_eq!(rotation, RotationState::new());
    }

    #[test]
    fn test_pointer_up_ends_drag_and_keeps_tilt() {
        let mut rotation = RotationState::new();
        rotation.pointer_down(PointerButton::Middle, 0.0, 0.0);
        rotation.pointer_move(10.0, 0.0);
        rotation.pointer_up();
        assert!(!rotation.is_dragging());
        assert_eq!(rotation.transform().rotate_y_deg, -10.0);
        // A stray up is harmless.
        rotation.pointer_up();
        assert!(!rotation.is_dragging());
    }

    #[test]
    fn test_transform_not_animated_while_dragging() {
        let mut rotation = RotationState::new();
        rotation.pointer_down(PointerButton::Middle, 0.0, 0.0);
        assert!(!rotation.transform().animated);
        rotation.pointer_up();
        assert!(rotation.transform().animated);
    }

    #[test]
    fn test_reset_restores_initial_tilt() {
        let mut rotation = RotationState::new();
        rotation.pointer_down(PointerButton::Middle, 0.0, 0.0);
        rotation.pointer_move(40.0, -20.0);
        rotation.reset();
        assert_eq!(rotation, RotationState::new());
    }
}
