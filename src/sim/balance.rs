//! Torque arithmetic for the plank
//!
//! A weight is a force applied at a signed distance from the pivot:
//! negative distances sit on the left arm, positive on the right.
//! Everything here is a pure function of the weight list.

use serde::{Deserialize, Serialize};

use crate::consts::BALANCE_EPSILON;

/// A force applied at a signed distance from the pivot.
///
/// Immutable once placed; the list is rebuilt on level reset/advance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Magnitude of the force (N), never negative
    pub force: f32,
    /// Signed distance from the pivot (plank units); sign encodes the side
    pub distance: f32,
}

impl Weight {
    /// Signed torque contribution of this weight (Nm)
    #[inline]
    pub fn torque(&self) -> f32 {
        self.force * self.distance
    }
}

/// The list of placed weights and the torque sums derived from it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceModel {
    weights: Vec<Weight>,
}

impl BalanceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a weight. Negative and non-finite forces coerce to 0,
    /// non-finite distances coerce to 0; nothing is rejected. There is no
    /// upper bound on force.
    pub fn add_weight(&mut self, force: f32, distance: f32) {
        let force = if force.is_finite() { force.max(0.0) } else { 0.0 };
        let distance = if distance.is_finite() { distance } else { 0.0 };
        self.weights.push(Weight { force, distance });
    }

    /// Placed weights, in placement order
    #[inline]
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Signed sum of `force x distance` over all weights (Nm).
    ///
    /// Drives the visual tilt only; the balance judgment compares the
    /// per-side sums instead.
    pub fn net_torque(&self) -> f32 {
        self.weights.iter().map(Weight::torque).sum()
    }

    /// Sum of `force x |distance|` over weights left of the pivot (Nm)
    pub fn left_torque(&self) -> f32 {
        self.weights
            .iter()
            .filter(|w| w.distance < 0.0)
            .map(|w| w.force * -w.distance)
            .sum()
    }

    /// Sum of `force x distance` over weights right of the pivot (Nm)
    pub fn right_torque(&self) -> f32 {
        self.weights
            .iter()
            .filter(|w| w.distance > 0.0)
            .map(|w| w.force * w.distance)
            .sum()
    }

    /// True when the side torques differ by less than `eps`.
    ///
    /// Weights at distance 0 contribute to neither side: a weight resting
    /// on the pivot is physically inert. That also means they never tip an
    /// otherwise balanced plank.
    pub fn is_balanced_eps(&self, eps: f32) -> bool {
        (self.left_torque() - self.right_torque()).abs() < eps
    }

    /// [`is_balanced_eps`](Self::is_balanced_eps) with the game's margin
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.is_balanced_eps(BALANCE_EPSILON)
    }

    /// Remove every weight
    pub fn reset(&mut self) {
        self.weights.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_model_is_balanced() {
        let model = BalanceModel::new();
        assert_eq!(model.net_torque(), 0.0);
        assert_eq!(model.left_torque(), 0.0);
        assert_eq!(model.right_torque(), 0.0);
        assert!(model.is_balanced());
    }

    #[test]
    fn test_side_sums() {
        // Original level 1 seeds: both on the right arm
        let mut model = BalanceModel::new();
        model.add_weight(15.0, 2.0);
        model.add_weight(20.0, 4.0);
        assert_eq!(model.right_torque(), 110.0);
        assert_eq!(model.left_torque(), 0.0);
        assert!(!model.is_balanced());

        model.add_weight(27.5, -4.0);
        assert_eq!(model.left_torque(), 110.0);
        assert!(model.is_balanced());
    }

    #[test]
    fn test_force_coercion() {
        let mut model = BalanceModel::new();
        model.add_weight(-10.0, 3.0);
        model.add_weight(f32::NAN, -2.0);
        model.add_weight(5.0, f32::INFINITY);
        assert_eq!(model.weights()[0].force, 0.0);
        assert_eq!(model.weights()[1].force, 0.0);
        assert_eq!(model.weights()[2].distance, 0.0);
        assert_eq!(model.net_torque(), 0.0);
    }

    #[test]
    fn test_pivot_weight_is_inert() {
        let mut model = BalanceModel::new();
        model.add_weight(18.0, -5.0);
        model.add_weight(30.0, 3.0);
        assert!(model.is_balanced());

        // A weight on the pivot joins neither side sum
        model.add_weight(1000.0, 0.0);
        assert_eq!(model.left_torque(), 90.0);
        assert_eq!(model.right_torque(), 90.0);
        assert!(model.is_balanced());
    }

    #[test]
    fn test_reset_empties() {
        let mut model = BalanceModel::new();
        model.add_weight(10.0, 1.0);
        model.reset();
        assert!(model.weights().is_empty());
        assert!(model.is_balanced());
    }

    fn arb_weights() -> impl Strategy<Value = Vec<(f32, f32)>> {
        prop::collection::vec((0.0f32..100.0, -5.0f32..5.0), 0..8)
    }

    proptest! {
        #[test]
        fn prop_net_torque_is_signed_sum(pairs in arb_weights()) {
            let mut model = BalanceModel::new();
            let mut expected = 0.0f32;
            for &(f, d) in &pairs {
                model.add_weight(f, d);
                expected += f * d;
            }
            prop_assert!((model.net_torque() - expected).abs() < 1e-3);
        }

        #[test]
        fn prop_side_sums_non_negative(pairs in arb_weights()) {
            let mut model = BalanceModel::new();
            for &(f, d) in &pairs {
                model.add_weight(f, d);
            }
            prop_assert!(model.left_torque() >= 0.0);
            prop_assert!(model.right_torque() >= 0.0);
        }

        #[test]
        fn prop_pivot_weights_change_nothing(pairs in arb_weights(), extra in 0.0f32..1000.0) {
            let mut model = BalanceModel::new();
            for &(f, d) in &pairs {
                model.add_weight(f, d);
            }
            let (left, right) = (model.left_torque(), model.right_torque());
            model.add_weight(extra, 0.0);
            prop_assert_eq!(model.left_torque(), left);
            prop_assert_eq!(model.right_torque(), right);
        }

        #[test]
        fn prop_balance_symmetric_under_mirroring(pairs in arb_weights()) {
            // Relabeling which side is "left" must not change the verdict
            let mut model = BalanceModel::new();
            let mut mirrored = BalanceModel::new();
            for &(f, d) in &pairs {
                model.add_weight(f, d);
                mirrored.add_weight(f, -d);
            }
            prop_assert_eq!(model.is_balanced(), mirrored.is_balanced());
            prop_assert!((model.left_torque() - mirrored.right_torque()).abs() < 1e-3);
        }
    }
}
