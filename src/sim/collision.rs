//! Pairwise overlap detection between disks

use glam::Vec2;

use super::body::Body;
use super::vector::{COINCIDENT_FALLBACK, VectorExt};

/// Contact between two disks, measured from `b` toward `a`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit line of centers pointing from `b` to `a`
    pub normal: Vec2,
    /// `radius_a + radius_b - distance` (0 at tangency)
    pub depth: f32,
}

/// True when the disks overlap or touch
///
/// Tangency counts as a collision.
#[inline]
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) <= a.radius + b.radius
}

/// Contact normal from `b` to `a`
///
/// Coincident centers have no line of centers; they fall back to +X.
#[inline]
pub fn contact_normal(a: &Body, b: &Body) -> Vec2 {
    (a.position - b.position).unit_or(COINCIDENT_FALLBACK)
}

/// Contact data if the bodies collide
pub fn contact(a: &Body, b: &Body) -> Option<Contact> {
    if !is_colliding(a, b) {
        return None;
    }
    Some(Contact {
        normal: contact_normal(a, b),
        depth: a.radius + b.radius - a.position.distance(b.position),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn disk(x: f32, y: f32, r: f32) -> Body {
        Body::new(0, Vec2::new(x, y), r, 1.0)
    }

    #[test]
    fn test_tangency_counts() {
        let a = disk(0.0, 0.0, 3.0);
        let b = disk(5.0, 0.0, 2.0);
        assert!(is_colliding(&a, &b));

        let c = disk(5.01, 0.0, 2.0);
        assert!(!is_colliding(&a, &c));
    }

    #[test]
    fn test_contact_normal_points_toward_a() {
        let a = disk(10.0, 0.0, 6.0);
        let b = disk(0.0, 0.0, 6.0);
        let c = contact(&a, &b).unwrap();
        assert_eq!(c.normal, Vec2::X);
        assert!((c.depth - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_centers_fallback() {
        let a = disk(4.0, 4.0, 1.0);
        let b = disk(4.0, 4.0, 1.0);
        let c = contact(&a, &b).unwrap();
        assert_eq!(c.normal, COINCIDENT_FALLBACK);
        assert!((c.depth - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_separated_no_contact() {
        assert!(contact(&disk(0.0, 0.0, 1.0), &disk(0.0, 10.0, 1.0)).is_none());
    }

    proptest! {
        #[test]
        fn prop_detection_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, ar in 0.1f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, br in 0.1f32..100.0,
        ) {
            let a = disk(ax, ay, ar);
            let b = disk(bx, by, br);
            prop_assert_eq!(is_colliding(&a, &b), is_colliding(&b, &a));
        }
    }
}
