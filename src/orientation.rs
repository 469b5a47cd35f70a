use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass heading of a robot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    N,
    E,
    S,
    W,
}

impl Orientation {
    /// Counter-clockwise quarter turn: N -> W -> S -> E -> N
    pub fn left(self) -> Self {
        match self {
            Orientation::N => Orientation::W,
            Orientation::W => Orientation::S,
            Orientation::S => Orientation::E,
            Orientation::E => Orientation::N,
        }
    }

    /// Clockwise quarter turn: N -> E -> S -> W -> N
    pub fn right(self) -> Self {
        match self {
            Orientation::N => Orientation::E,
            Orientation::E => Orientation::S,
            Orientation::S => Orientation::W,
            Orientation::W => Orientation::N,
        }
    }

    /// Unit step (dx, dy) taken when moving forward with this heading
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::N => (0, 1),
            Orientation::E => (1, 0),
            Orientation::S => (0, -1),
            Orientation::W => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Orientation::N => 'N',
            Orientation::E => 'E',
            Orientation::S => 'S',
            Orientation::W => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Orientation {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Orientation::N),
            "E" => Ok(Orientation::E),
            "S" => Ok(Orientation::S),
            "W" => Ok(Orientation::W),
            other => Err(SimulationError::UnknownOrientation(other.to_string())),
        }
    }
}
