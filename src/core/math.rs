// Math utilities and helper functions

use glam::Vec2;

/// Check if a vector is exactly the zero vector
///
/// Velocities in the tile game are built from unit lookups, so an exact
/// comparison is what we want here.
pub fn is_zero(v: Vec2) -> bool {
    v.x == 0.0 && v.y == 0.0
}

/// Floor-divide a pixel offset into a grid index
pub fn floor_div(value: f32, size: f32) -> i32 {
    (value / size).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(Vec2::ZERO));
        assert!(is_zero(Vec2::new(-0.0, 0.0)));
        assert!(!is_zero(Vec2::new(0.0, 1.0)));
        assert!(!is_zero(Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_floor_div_positive() {
        assert_eq!(floor_div(0.0, 16.0), 0);
        assert_eq!(floor_div(15.9, 16.0), 0);
        assert_eq!(floor_div(16.0, 16.0), 1);
        assert_eq!(floor_div(47.5, 16.0), 2);
    }

    #[test]
    fn test_floor_div_negative_rounds_down() {
        assert_eq!(floor_div(-0.5, 16.0), -1);
        assert_eq!(floor_div(-16.0, 16.0), -1);
        assert_eq!(floor_div(-16.5, 16.0), -2);
    }
}
