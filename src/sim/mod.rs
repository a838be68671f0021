//! Deterministic game logic
//!
//! Everything here is pure and platform-free:
//! - Torque sums and the balance verdict are functions of the weight list
//! - Level templates are immutable static data
//! - No rendering or DOM dependencies

pub mod balance;
pub mod controller;
pub mod levels;
pub mod state;

pub use balance::{BalanceModel, Weight};
pub use controller::LevelController;
pub use levels::{InputField, Level, LEVELS};
pub use state::{EvaluationResult, GameState, InputDefaults, LevelSnapshot, Phase};
