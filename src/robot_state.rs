use crate::error::{Result, SimulationError};
use crate::orientation::Orientation;
use crate::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Printable "x y orientation" key used for the forbidden set
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Signature {
    fn from(s: &str) -> Self {
        Signature(s.trim().to_string())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position, heading and lost flag of a single robot
#[derive(Clone, Debug)]
pub struct RobotState {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub is_lost: bool,
}

impl RobotState {
    /// New state at (x, y) facing north
    pub fn new(x: i32, y: i32) -> Self {
        RobotState {
            x,
            y,
            orientation: Orientation::N,
            is_lost: false,
        }
    }

    pub fn with_orientation(x: i32, y: i32, orientation: Orientation) -> Self {
        RobotState {
            orientation,
            ..RobotState::new(x, y)
        }
    }

    /// Parse a start-position line of the form "<x> <y> <orientation>"
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = || SimulationError::MalformedPositionLine(line.to_string());

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [x, y, orientation] = fields.as_slice() else {
            return Err(malformed());
        };

        let x: i32 = x.parse().map_err(|_| malformed())?;
        let y: i32 = y.parse().map_err(|_| malformed())?;
        let orientation: Orientation = orientation.parse()?;

        Ok(RobotState::with_orientation(x, y, orientation))
    }

    /// Check whether the robot has left the grid.
    ///
    /// When it has, only the coordinate along the current heading is pulled
    /// back onto the boundary; the other axis is left untouched. The robot is
    /// then marked lost.
    pub fn check_out_of_bounds(&mut self, grid: &Grid) -> bool {
        if grid.contains(self.x, self.y) {
            return false;
        }
        self.fall_off(grid);
        true
    }

    /// Pull the coordinate along the heading onto the edge and mark the robot lost
    pub fn fall_off(&mut self, grid: &Grid) {
        match self.orientation {
            Orientation::N => self.y = grid.height,
            Orientation::E => self.x = grid.width,
            Orientation::S => self.y = 0,
            Orientation::W => self.x = 0,
        }
        self.is_lost = true;
    }

    /// "x y O " when on the grid, "x y O LOST" once lost
    pub fn format(&self) -> String {
        let marker = if self.is_lost { "LOST" } else { "" };
        format!("{} {} {} {}", self.x, self.y, self.orientation, marker)
    }

    pub fn signature(&self) -> Signature {
        Signature::from(self.format().as_str())
    }
}

impl Default for RobotState {
    fn default() -> Self {
        RobotState::new(0, 0)
    }
}

// Two states are the same position regardless of the lost flag
impl PartialEq for RobotState {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.orientation == other.orientation
    }
}

impl Eq for RobotState {}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
