// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod clock;
pub mod forces;
pub mod simulation;
pub mod store;

pub use clock::{ClockState, SimulationClock};
pub use simulation::*;
pub use store::{ClearReport, ParticleStore};
