use crate::orientation::Orientation;
use crate::robot::StepOutcome;
use crate::robot_state::Signature;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Phase of an instruction line - whether it is starting or finishing
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Finish,
}

/// Things that happen during a simulation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    /// Grid built from the dimension line
    GridCreated { width: i32, height: i32 },
    /// Fresh robot placed at the origin
    RobotDeployed,
    /// Start position applied to the current robot
    PositionSet { x: i32, y: i32, orientation: Orientation },
    /// Instruction line; Finish carries the formatted result
    Execute { instructions: String, result: Option<String> },
    Turned { orientation: Orientation },
    Moved { x: i32, y: i32 },
    /// Forward move refused by a forbidden signature
    HeldBySignature { signature: Signature },
    /// Robot fell off; the signature was added to the forbidden set
    RobotLost { signature: Signature },
    /// Character left uninterpreted because the robot was already lost
    SkippedWhileLost { symbol: char },
}

/// Logged event with its sequence number, robot index and phase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Position of the event in the run
    pub step: usize,
    /// Index of the robot the event belongs to (None for grid events)
    pub robot: Option<usize>,
    pub event: RunEvent,
    pub phase: Option<Phase>,
}

/// Ordered record of one simulation run
#[derive(Debug, Default)]
pub struct RunLog {
    events: Vec<LoggedEvent>,
}

impl RunLog {
    pub fn new() -> Self {
        RunLog { events: Vec::new() }
    }

    /// Record an event
    pub fn log(&mut self, robot: Option<usize>, event: RunEvent, phase: Option<Phase>) {
        let step = self.events.len();
        self.events.push(LoggedEvent {
            step,
            robot,
            event,
            phase,
        });
    }

    pub fn log_start(&mut self, robot: usize, event: RunEvent) {
        self.log(Some(robot), event, Some(Phase::Start));
    }

    pub fn log_finish(&mut self, robot: usize, event: RunEvent) {
        self.log(Some(robot), event, Some(Phase::Finish));
    }

    /// Record what a single instruction character did
    pub fn log_outcome(&mut self, robot: usize, outcome: &StepOutcome) {
        let event = match outcome {
            StepOutcome::Turned(orientation) => RunEvent::Turned {
                orientation: *orientation,
            },
            StepOutcome::Moved { x, y } => RunEvent::Moved { x: *x, y: *y },
            StepOutcome::Held(signature) => RunEvent::HeldBySignature {
                signature: signature.clone(),
            },
            StepOutcome::Lost(signature) => RunEvent::RobotLost {
                signature: signature.clone(),
            },
            StepOutcome::Skipped(instruction) => RunEvent::SkippedWhileLost {
                symbol: instruction.symbol(),
            },
            // Ignored characters leave no trace
            StepOutcome::Ignored(_) => return,
        };
        self.log(Some(robot), event, None);
    }

    /// Get all logged events
    pub fn events(&self) -> &[LoggedEvent] {
        &self.events
    }

    /// Signatures added to the forbidden set, in the order robots were lost
    pub fn lost_signatures(&self) -> Vec<&Signature> {
        self.events
            .iter()
            .filter_map(|logged| match &logged.event {
                RunEvent::RobotLost { signature } => Some(signature),
                _ => None,
            })
            .collect()
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut robots = 0;
        let mut instruction_lines = 0;
        let mut moves = 0;
        let mut turns = 0;
        let mut held = 0;
        let mut lost = 0;
        let mut skipped = 0;

        for logged in &self.events {
            match &logged.event {
                RunEvent::RobotDeployed => robots += 1,
                RunEvent::Execute { .. } if logged.phase == Some(Phase::Finish) => {
                    instruction_lines += 1
                }
                RunEvent::Moved { .. } => moves += 1,
                RunEvent::Turned { .. } => turns += 1,
                RunEvent::HeldBySignature { .. } => held += 1,
                RunEvent::RobotLost { .. } => lost += 1,
                RunEvent::SkippedWhileLost { .. } => skipped += 1,
                _ => {}
            }
        }

        format!(
            "Total Events: {}\n\
             Robots: {} deployed, {} lost\n\
             Instruction Lines: {}\n\
             Steps: {} moves, {} turns, {} held by forbidden signatures, {} skipped after loss",
            self.events.len(),
            robots,
            lost,
            instruction_lines,
            moves,
            turns,
            held,
            skipped
        )
    }
}
