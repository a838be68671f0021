//! Built-in level roster
//!
//! A level is an immutable template: the weights pre-placed on the plank
//! and the constraints on the two input fields. Variant behaviors (a
//! disabled slider, a pinned distance) are data here, not code branches.

use crate::sim::balance::Weight;

/// Constraints and defaults for one input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputField {
    /// Whether the player may edit the field
    pub editable: bool,
    /// Value the field is reset to when the level seeds
    pub default: f32,
}

impl InputField {
    pub const fn editable(default: f32) -> Self {
        Self {
            editable: true,
            default,
        }
    }

    /// A field the player cannot change; its default is the value used
    /// for every submission on the level.
    pub const fn pinned(value: f32) -> Self {
        Self {
            editable: false,
            default: value,
        }
    }
}

/// Immutable template for one level
#[derive(Debug, Clone, Copy)]
pub struct Level {
    /// Short title shown by the driver
    pub title: &'static str,
    /// Weights placed on the plank when the level seeds
    pub seeds: &'static [Weight],
    /// Force input constraints
    pub force_input: InputField,
    /// Distance input constraints
    pub distance_input: InputField,
}

const fn seed(force: f32, distance: f32) -> Weight {
    Weight { force, distance }
}

/// The teaching sequence. Torques are chosen so every level has at least
/// one reachable solution within the plank's five display units.
pub static LEVELS: &[Level] = &[
    // Right arm carries 110 Nm; counter it from the left.
    Level {
        title: "Two fruits",
        seeds: &[seed(15.0, 2.0), seed(20.0, 4.0)],
        force_input: InputField::editable(0.0),
        distance_input: InputField::editable(0.0),
    },
    // The lever arm is pinned at -5; only the force is the player's.
    // Left is short 50 Nm, so 10 N does it.
    Level {
        title: "Fixed lever arm",
        seeds: &[seed(25.0, -4.0), seed(30.0, 5.0)],
        force_input: InputField::editable(0.0),
        distance_input: InputField::pinned(-5.0),
    },
    // Three seeds, both arms loaded: left 140 Nm, right 60 Nm.
    Level {
        title: "Three weights",
        seeds: &[seed(40.0, -3.0), seed(20.0, 3.0), seed(10.0, -2.0)],
        force_input: InputField::editable(0.0),
        distance_input: InputField::editable(0.0),
    },
    // Already balanced. The only winning move adds no torque: zero force,
    // or any force resting on the pivot itself.
    Level {
        title: "The pivot lesson",
        seeds: &[seed(18.0, -5.0), seed(30.0, 3.0)],
        force_input: InputField::editable(0.0),
        distance_input: InputField::editable(0.0),
    },
];
