//! Scene layout math
//!
//! Pure mapping from simulation values to canvas geometry, kept free of
//! any drawing API so it can be unit tested. The painter applies these
//! numbers inside a coordinate frame centered on the pivot.

use crate::consts::*;
use crate::sim::Weight;

/// Plank rotation for a given net torque (radians, positive tips right)
#[inline]
pub fn tilt_angle(net_torque: f32) -> f32 {
    net_torque * TILT_PER_TORQUE
}

/// Horizontal pixel offset of a plank position from the pivot.
///
/// `MAX_DISTANCE` units map onto the plank half length; positions beyond
/// the cap are clamped to the plank ends for display.
pub fn plank_x(distance: f32) -> f32 {
    let clamped = distance.clamp(-MAX_DISTANCE, MAX_DISTANCE);
    clamped * (PLANK_HALF_LENGTH / MAX_DISTANCE)
}

/// Marker diameter for a force (pixels). Grows gently with force and is
/// floored so a 0 N weight is still visible.
pub fn marker_size(force: f32) -> f32 {
    let scale = (force / 20.0).sqrt().min(2.0);
    (WEIGHT_MARKER_SIZE * 0.4).max(WEIGHT_MARKER_SIZE * 0.5 * scale)
}

/// A weight marker, positioned in the plank's rotated frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f32,
    pub size: f32,
}

/// Markers for every placed weight, in placement order
pub fn markers(weights: &[Weight]) -> Vec<Marker> {
    weights
        .iter()
        .map(|w| Marker {
            x: plank_x(w.distance),
            size: marker_size(w.force),
        })
        .collect()
}

/// X positions of the unit tick marks along one arm (1..=MAX_DISTANCE)
pub fn tick_positions() -> Vec<f32> {
    let units = MAX_DISTANCE as usize;
    (1..=units).map(|i| plank_x(i as f32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_sign_follows_net_torque() {
        assert_eq!(tilt_angle(0.0), 0.0);
        assert!(tilt_angle(110.0) > 0.0);
        assert!(tilt_angle(-110.0) < 0.0);
        assert!((tilt_angle(100.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_plank_x_maps_units_to_pixels() {
        // 5 units span the 300 px half plank, so 1 unit is 60 px
        assert_eq!(plank_x(0.0), 0.0);
        assert_eq!(plank_x(1.0), 60.0);
        assert_eq!(plank_x(-4.0), -240.0);
        assert_eq!(plank_x(5.0), 300.0);
    }

    #[test]
    fn test_plank_x_clamps_to_plank_ends() {
        assert_eq!(plank_x(9.0), 300.0);
        assert_eq!(plank_x(-7.5), -300.0);
    }

    #[test]
    fn test_tick_positions() {
        assert_eq!(tick_positions(), vec![60.0, 120.0, 180.0, 240.0, 300.0]);
    }

    #[test]
    fn test_marker_size_monotone_and_floored() {
        assert!(marker_size(0.0) > 0.0);
        assert!(marker_size(40.0) > marker_size(10.0));
        // Huge forces stay within the plank's visual scale
        assert!(marker_size(10_000.0) <= WEIGHT_MARKER_SIZE);
    }

    #[test]
    fn test_markers_preserve_order() {
        let weights = [
            Weight {
                force: 15.0,
                distance: 2.0,
            },
            Weight {
                force: 20.0,
                distance: 4.0,
            },
        ];
        let markers = markers(&weights);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].x, 120.0);
        assert_eq!(markers[1].x, 240.0);
    }
}
