//! Level progression state machine
//!
//! Drives a [`BalanceModel`] through the level roster. Each submission is
//! judged synchronously and the caller gets back an [`EvaluationResult`];
//! there is no deferred callback, the `level_advanced` flag tells the view
//! when to transition.
//!
//! Feedback policy: the first failed evaluation on a level re-seeds the
//! level (discarding the player's weights) with a gentle retry message;
//! later failures keep the plank as-is and reveal the numeric left/right
//! breakdown. This scaffolding is intentional and load-bearing for the
//! teaching sequence.

use log::{debug, info};

use crate::sim::balance::BalanceModel;
use crate::sim::levels::{Level, LEVELS};
use crate::sim::state::{EvaluationResult, GameState, InputDefaults, LevelSnapshot, Phase};

/// Status line on a successful balance
pub const MSG_BALANCED: &str = "Balanced! 🎉";
/// Status line on the first failure of a level
pub const MSG_RETRY: &str = "Not balanced yet. The level has been reset, try again!";
/// Status line when the final level is cleared
pub const MSG_ALL_COMPLETE: &str = "Balanced! 🎉 All levels complete!";
/// Status line for submissions after completion
pub const MSG_ALREADY_COMPLETE: &str = "All levels complete.";

fn torque_breakdown(left: f32, right: f32) -> String {
    format!("Left: {left:.1} Nm, Right: {right:.1} Nm")
}

/// Owns the game state and the level roster
#[derive(Debug)]
pub struct LevelController {
    levels: &'static [Level],
    state: GameState,
}

impl LevelController {
    /// Controller over the built-in teaching sequence, seeded at level 0
    pub fn new() -> Self {
        Self::with_levels(LEVELS)
    }

    /// Controller over a custom roster. The roster must be non-empty.
    pub fn with_levels(levels: &'static [Level]) -> Self {
        assert!(!levels.is_empty(), "level roster is empty");
        let mut controller = Self {
            levels,
            state: GameState::new(),
        };
        controller.seed_level();
        controller
    }

    fn current_level(&self) -> &Level {
        &self.levels[self.state.level_index]
    }

    /// Seeding -> AwaitingInput: rebuild the model from the level's seeds
    /// and clear the attempted flag.
    fn seed_level(&mut self) {
        self.state.phase = Phase::Seeding;
        self.state.balance.reset();
        for w in self.current_level().seeds {
            self.state.balance.add_weight(w.force, w.distance);
        }
        self.state.attempted = false;
        self.state.phase = Phase::AwaitingInput;
        info!(
            "level {} seeded ({})",
            self.state.level_index,
            self.current_level().title
        );
    }

    /// Place one weight and judge the plank.
    ///
    /// Invalid numbers have already degraded to 0 by the time they reach
    /// the model; nothing here can fail. After completion this is a no-op
    /// that keeps returning the identical completed result.
    pub fn submit_weight(&mut self, force: f32, distance: f32) -> EvaluationResult {
        if self.state.phase == Phase::Completed {
            return self.completed_result();
        }

        self.state.phase = Phase::Evaluating;
        self.state.balance.add_weight(force, distance);

        let left = self.state.balance.left_torque();
        let right = self.state.balance.right_torque();
        let balanced = self.state.balance.is_balanced();
        debug!("evaluated submission {force} N @ {distance}: left {left} Nm, right {right} Nm");

        if balanced {
            let next = self.state.level_index + 1;
            if next >= self.levels.len() {
                self.state.phase = Phase::Completed;
                info!("all {} levels complete", self.levels.len());
                EvaluationResult {
                    balanced: true,
                    left_torque: left,
                    right_torque: right,
                    level_advanced: false,
                    completed: true,
                    message: MSG_ALL_COMPLETE.to_string(),
                }
            } else {
                self.state.level_index = next;
                self.seed_level();
                EvaluationResult {
                    balanced: true,
                    left_torque: left,
                    right_torque: right,
                    level_advanced: true,
                    completed: false,
                    message: MSG_BALANCED.to_string(),
                }
            }
        } else if !self.state.attempted {
            // First miss: full re-seed, only the level's own weights remain
            self.seed_level();
            self.state.attempted = true;
            EvaluationResult {
                balanced: false,
                left_torque: left,
                right_torque: right,
                level_advanced: false,
                completed: false,
                message: MSG_RETRY.to_string(),
            }
        } else {
            // Second miss onward: keep the plank, reveal the numbers
            self.state.phase = Phase::AwaitingInput;
            EvaluationResult {
                balanced: false,
                left_torque: left,
                right_torque: right,
                level_advanced: false,
                completed: false,
                message: torque_breakdown(left, right),
            }
        }
    }

    fn completed_result(&self) -> EvaluationResult {
        EvaluationResult {
            balanced: self.state.balance.is_balanced(),
            left_torque: self.state.balance.left_torque(),
            right_torque: self.state.balance.right_torque(),
            level_advanced: false,
            completed: true,
            message: MSG_ALREADY_COMPLETE.to_string(),
        }
    }

    /// Restart the current level from its seed.
    ///
    /// After completion there is no current level to restart; the call
    /// leaves the terminal state untouched.
    pub fn reset(&mut self) -> LevelSnapshot {
        if self.state.phase != Phase::Completed {
            self.seed_level();
        }
        self.snapshot()
    }

    /// Current weights, level index, and input metadata for rendering.
    /// Pure read; calling it twice without intervening mutation yields
    /// identical results.
    pub fn snapshot(&self) -> LevelSnapshot {
        let level = self.current_level();
        LevelSnapshot {
            level_index: self.state.level_index,
            weights: self.state.balance.weights().to_vec(),
            inputs: InputDefaults {
                force_editable: level.force_input.editable,
                default_force: level.force_input.default,
                distance_editable: level.distance_input.editable,
                default_distance: level.distance_input.default,
            },
            completed: self.state.phase == Phase::Completed,
        }
    }

    /// The live balance model, for torque readouts and the tilt angle
    #[inline]
    pub fn balance(&self) -> &BalanceModel {
        &self.state.balance
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl Default for LevelController {
    fn default() -> Self {
        Self::new()
    }
}
