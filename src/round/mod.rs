// Public API - what other modules can use
pub use engine::{DiceRoller, RoundEngine, SeededRoller, ThreadRngRoller};
pub use models::{DieFace, DieFaceError, Outcome, RoundResult, Stats};

// Internal modules
mod engine;
mod models;
