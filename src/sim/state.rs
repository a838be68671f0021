//! Game state and the records exchanged with the view layer

use serde::{Deserialize, Serialize};

use crate::sim::balance::{BalanceModel, Weight};

/// Where the controller is in the level lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A level's seed weights are being placed
    Seeding,
    /// Waiting for the player's next submission
    AwaitingInput,
    /// A submission is being judged
    Evaluating,
    /// Every level cleared; terminal
    Completed,
}

/// Complete game state. Torque sums and the balance verdict are pure
/// functions of `balance`; nothing else feeds the judgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Index into the level roster
    pub level_index: usize,
    /// Whether the current level has already produced one failed
    /// evaluation; governs retry-message verbosity
    pub attempted: bool,
    /// The placed weights
    pub balance: BalanceModel,
    pub phase: Phase,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            level_index: 0,
            attempted: false,
            balance: BalanceModel::new(),
            phase: Phase::Seeding,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Defaults and enabled state for the two input fields, per the active
/// level's metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    pub force_editable: bool,
    pub default_force: f32,
    pub distance_editable: bool,
    pub default_distance: f32,
}

/// Everything the view needs to draw the current level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub level_index: usize,
    pub weights: Vec<Weight>,
    pub inputs: InputDefaults,
    pub completed: bool,
}

/// Outcome of one weight submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub balanced: bool,
    pub left_torque: f32,
    pub right_torque: f32,
    /// True when a further playable level was seeded. False on failure
    /// and on the final success (which sets `completed` instead).
    pub level_advanced: bool,
    pub completed: bool,
    /// Status line for the player
    pub message: String,
}
