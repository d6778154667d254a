//! Prompt compilation: settings in, system prompt out.
//!
//! The compiled prompt is the single source of truth for how the simulated
//! prospect behaves. It is assembled from static tables (scenario mindsets,
//! personality profiles, the behavior ruleset) plus the per-call settings
//! record, with no I/O and no randomness.

pub mod behavior;
pub mod compiler;
pub mod personality;
pub mod scenario;
pub mod settings;

pub use behavior::{with_behavior_layer, PROSPECT_BEHAVIOR_LAYER};
pub use compiler::compile;
pub use settings::{PackedGoals, SimulationSettings};
