//! Transform descriptor handed to the host for painting.

/// Perspective distance baked into the tilt effect.
const PERSPECTIVE_PX: f64 = 1000.0;

/// A 3D tilt the host applies to the widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Rotation around the horizontal axis, in degrees.
    pub rotate_x_deg: f64,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y_deg: f64,
    /// False while a drag is live, so the host disables its transition and
    /// the widget follows the pointer without easing.
    pub animated: bool,
}

impl Transform {
    /// Render as a CSS transform value.
    pub fn css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            PERSPECTIVE_PX, self.rotate_x_deg, self.rotate_y_deg
        )
    }

    /// The transition the host should pair with [`css`](Self::css).
    pub fn transition(&self) -> &'static str {
        if self.animated {
            "transform 0.5s ease-out"
        } else {
            "none"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_transform_string() {
        let transform = Transform {
            rotate_x_deg: 15.0,
            rotate_y_deg: -15.0,
            animated: true,
        };
        assert_eq!(
            transform.css(),
            "perspective(1000px) rotateX(15deg) rotateY(-15deg)"
        );
    }

    #[test]
    fn test_fractional_angles_keep_their_precision() {
        let transform = Transform {
            rotate_x_deg: 15.5,
            rotate_y_deg: -0.25,
            animated: true,
        };
        assert_eq!(
            transform.css(),
            "perspective(1000px) rotateX(15.5deg) rotateY(-0.25deg)"
        );
    }

    #[test]
    fn test_transition_follows_animated_flag() {
        let mut transform = Transform {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            animated: true,
        };
        assert_eq!(transform.transition(), "transform 0.5s ease-out");
        transform.animated = false;
        assert_eq!(transform.transition(), "none");
    }
}
