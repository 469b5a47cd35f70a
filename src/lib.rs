pub mod config;
pub mod error;
pub mod grid;
pub mod instruction;
pub mod orientation;
pub mod robot;
pub mod robot_state;
pub mod run_log;
pub mod simulation;

pub use error::{Result, SimulationError};
pub use grid::{Grid, SharedGrid};
pub use orientation::Orientation;
pub use robot::{Robot, StepOutcome};
pub use robot_state::{RobotState, Signature};
pub use simulation::{run, Simulation};
