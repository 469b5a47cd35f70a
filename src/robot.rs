use crate::error::Result;
use crate::grid::SharedGrid;
use crate::instruction::{self, Instruction};
use crate::orientation::Orientation;
use crate::robot_state::{RobotState, Signature};
use std::rc::Rc;
use tracing::debug;

/// What a single instruction character did to the robot
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Heading changed
    Turned(Orientation),
    /// Advanced one cell and is still on the grid
    Moved { x: i32, y: i32 },
    /// Forward refused because the current signature is forbidden
    Held(Signature),
    /// Stepped off the grid; carries the pre-move signature now forbidden
    Lost(Signature),
    /// Unrecognised character
    Ignored(char),
    /// Not interpreted because the robot is already lost
    Skipped(Instruction),
}

/// A robot walking the shared grid
#[derive(Debug)]
pub struct Robot {
    state: RobotState,
    grid: SharedGrid,
}

impl Robot {
    /// Create a robot at (0, 0) facing north on the given grid
    pub fn new(grid: &SharedGrid) -> Self {
        Robot {
            state: RobotState::default(),
            grid: Rc::clone(grid),
        }
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// Replace the whole state from a "<x> <y> <orientation>" line
    pub fn set_position(&mut self, line: &str) -> Result<()> {
        self.state = RobotState::parse(line)?;
        Ok(())
    }

    /// Run an instruction line and return the formatted final state
    pub fn execute(&mut self, instructions: &str) -> String {
        self.execute_with(instructions, |_| {})
    }

    /// Same as [`Robot::execute`], reporting an outcome for every character.
    ///
    /// Once the robot is lost the rest of the line has no effect and each
    /// remaining character is reported as [`StepOutcome::Skipped`].
    pub fn execute_with<F>(&mut self, instructions: &str, mut observe: F) -> String
    where
        F: FnMut(&StepOutcome),
    {
        for instruction in instruction::decode(instructions) {
            let outcome = if self.state.is_lost {
                StepOutcome::Skipped(instruction)
            } else {
                self.step(instruction)
            };
            observe(&outcome);
        }
        self.state.format()
    }

    /// Apply one instruction to the robot
    pub fn step(&mut self, instruction: Instruction) -> StepOutcome {
        match instruction {
            Instruction::Left => {
                self.state.orientation = self.state.orientation.left();
                StepOutcome::Turned(self.state.orientation)
            }
            Instruction::Right => {
                self.state.orientation = self.state.orientation.right();
                StepOutcome::Turned(self.state.orientation)
            }
            Instruction::Forward => self.move_forward(),
            Instruction::Ignore(c) => StepOutcome::Ignored(c),
        }
    }

    fn move_forward(&mut self) -> StepOutcome {
        let before = self.state.signature();

        if self.state.is_lost {
            debug!(signature = %before, "forward move ignored, robot already lost");
            return StepOutcome::Held(before);
        }
        if self.grid.borrow().is_forbidden(&before) {
            debug!(signature = %before, "forward move held by forbidden signature");
            return StepOutcome::Held(before);
        }

        let (dx, dy) = self.state.orientation.step();
        let next = self.state.x.checked_add(dx).zip(self.state.y.checked_add(dy));

        let mut grid = self.grid.borrow_mut();
        let fell = match next {
            Some((x, y)) => {
                self.state.x = x;
                self.state.y = y;
                self.state.check_out_of_bounds(&grid)
            }
            // Stepping past the integer range is stepping past every edge
            None => {
                self.state.fall_off(&grid);
                true
            }
        };

        if fell {
            debug!(signature = %before, "robot fell off the grid");
            grid.mark_forbidden(before.clone());
            return StepOutcome::Lost(before);
        }

        StepOutcome::Moved {
            x: self.state.x,
            y: self.state.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    fn grid(width: i32, height: i32) -> SharedGrid {
        Grid::new(width, height).unwrap().into_shared()
    }

    #[test]
    fn test_new_robot_at_origin() {
        let robot = Robot::new(&grid(5, 3));
        assert_eq!(robot.state(), &RobotState::new(0, 0));
        assert_eq!(robot.state().orientation, Orientation::N);
    }

    #[test]
    fn test_loop_returns_to_start() {
        let mut robot = Robot::new(&grid(5, 3));
        robot.set_position("1 1 E").unwrap();
        assert_eq!(robot.execute("RFRFRFRF"), "1 1 E ");
    }

    #[test]
    fn test_empty_instructions_leave_state() {
        let mut robot = Robot::new(&grid(5, 3));
        robot.set_position("2 2 S").unwrap();
        assert_eq!(robot.execute(""), "2 2 S ");
        assert_eq!(robot.execute(""), "2 2 S ");
    }

    #[test]
    fn test_unknown_characters_are_ignored() {
        let mut robot = Robot::new(&grid(5, 3));
        robot.set_position("1 1 N").unwrap();
        assert_eq!(robot.execute("MxF?"), "1 2 N ");
    }

    #[test]
    fn test_falls_off_top_edge() {
        let shared = grid(5, 3);
        let mut robot = Robot::new(&shared);
        robot.set_position("4 3 N").unwrap();

        assert_eq!(robot.execute("F"), "4 3 N LOST");
        assert_eq!(robot.state().y, 3);
        assert!(robot.state().is_lost);
        assert!(shared.borrow().is_forbidden(&Signature::from("4 3 N")));
    }

    #[test]
    fn test_instructions_after_loss_are_skipped() {
        let mut robot = Robot::new(&grid(5, 3));
        robot.set_position("0 0 S").unwrap();

        let mut outcomes = Vec::new();
        let result = robot.execute_with("FRxF", |o| outcomes.push(o.clone()));

        assert_eq!(result, "0 0 S LOST");
        assert_eq!(
            outcomes,
            vec![
                StepOutcome::Lost(Signature::from("0 0 S")),
                StepOutcome::Skipped(Instruction::Right),
                StepOutcome::Skipped(Instruction::Ignore('x')),
                StepOutcome::Skipped(Instruction::Forward),
            ]
        );
        assert_eq!(robot.state().orientation, Orientation::S);
    }

    #[test]
    fn test_step_past_integer_range_is_lost() {
        let shared = grid(5, 5);
        let mut robot = Robot::new(&shared);
        robot.set_position("2147483647 0 E").unwrap();

        assert_eq!(robot.execute("F"), "5 0 E LOST");
        assert!(shared.borrow().is_forbidden(&Signature::from("2147483647 0 E")));
    }

    #[test]
    fn test_step_past_integer_range_from_grid_edge() {
        let shared = grid(i32::MAX, 5);
        let mut robot = Robot::new(&shared);
        robot.set_position("2147483647 0 E").unwrap();
        assert_eq!(robot.execute("F"), "2147483647 0 E LOST");

        let mut robot = Robot::new(&shared);
        robot.set_position("-2147483648 3 W").unwrap();
        assert_eq!(robot.execute("F"), "0 3 W LOST");

        let mut robot = Robot::new(&shared);
        robot.set_position("1 -2147483648 S").unwrap();
        assert_eq!(robot.execute("F"), "1 0 S LOST");
    }

    #[test]
    fn test_forbidden_signature_holds_later_robot() {
        let shared = grid(5, 3);

        let mut first = Robot::new(&shared);
        first.set_position("3 3 N").unwrap();
        assert_eq!(first.execute("F"), "3 3 N LOST");

        let mut second = Robot::new(&shared);
        second.set_position("3 2 N").unwrap();
        let mut outcomes = Vec::new();
        let result = second.execute_with("FFR", |o| outcomes.push(o.clone()));

        assert_eq!(result, "3 3 E ");
        assert_eq!(
            outcomes,
            vec![
                StepOutcome::Moved { x: 3, y: 3 },
                StepOutcome::Held(Signature::from("3 3 N")),
                StepOutcome::Turned(Orientation::E),
            ]
        );
        assert_eq!(shared.borrow().forbidden_count(), 1);
    }

    #[test]
    fn test_forbidden_signature_is_heading_specific() {
        let shared = grid(5, 3);
        shared.borrow_mut().mark_forbidden(Signature::from("5 3 N"));

        let mut robot = Robot::new(&shared);
        robot.set_position("5 3 E").unwrap();
        assert_eq!(robot.execute("F"), "5 3 E LOST");
    }

    #[test]
    fn test_set_position_failure_keeps_state() {
        let mut robot = Robot::new(&grid(5, 3));
        robot.set_position("2 1 W").unwrap();
        assert!(robot.set_position("2 x W").is_err());
        assert_eq!(robot.state(), &RobotState::with_orientation(2, 1, Orientation::W));
    }
}
