use crate::error::{Result, SimulationError};
use crate::robot_state::Signature;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Handle to the grid shared by every robot of one run
pub type SharedGrid = Rc<RefCell<Grid>>;

/// Rectangular surface with inclusive bounds [0, width] x [0, height]
/// and the set of signatures known to send a robot over the edge
#[derive(Clone, Debug)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    forbidden: HashSet<Signature>,
}

impl Grid {
    /// Create an empty grid; fails if either dimension is negative
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(SimulationError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            forbidden: HashSet::new(),
        })
    }

    /// Wrap the grid in a shared handle
    pub fn into_shared(self) -> SharedGrid {
        Rc::new(RefCell::new(self))
    }

    /// Record a signature as forbidden. Returns false if it was already known.
    pub fn mark_forbidden(&mut self, signature: Signature) -> bool {
        self.forbidden.insert(signature)
    }

    pub fn is_forbidden(&self, signature: &Signature) -> bool {
        self.forbidden.contains(signature)
    }

    /// Number of distinct forbidden signatures
    pub fn forbidden_count(&self) -> usize {
        self.forbidden.len()
    }

    /// Check if (x, y) lies on the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x <= self.width && y >= 0 && y <= self.height
    }
}
