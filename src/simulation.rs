//! Drives a whole run: grid line, then blank-line separated robot blocks.

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::grid::{Grid, SharedGrid};
use crate::robot::Robot;
use crate::run_log::{RunEvent, RunLog};
use tracing::{debug, info};

/// Role of an input line after the grid line
#[derive(Debug, PartialEq)]
enum LineKind<'a> {
    /// Starts a new robot
    Blank,
    /// "<x> <y> <orientation>" for the current robot
    Position(&'a str),
    /// Movement instructions for the current robot
    Instructions(&'a str),
}

impl<'a> LineKind<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            LineKind::Blank
        } else if line.contains(' ') {
            LineKind::Position(line)
        } else {
            LineKind::Instructions(line)
        }
    }
}

/// Parse "<width> <height>" into a grid
pub fn parse_grid(line: &str) -> Result<Grid> {
    let malformed = || SimulationError::MalformedDimensionLine(line.to_string());

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [width, height] = fields.as_slice() else {
        return Err(malformed());
    };
    let width: i32 = width.parse().map_err(|_| malformed())?;
    let height: i32 = height.parse().map_err(|_| malformed())?;

    Grid::new(width, height)
}

/// Sequencing controller for one batch of robots
#[derive(Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Simulation { config }
    }

    /// Run the full input and return one output line per instruction line
    pub fn run(&self, input: &str) -> Result<String> {
        self.run_inner(input, None)
    }

    /// Same as [`Simulation::run`], recording every step into `log`
    pub fn run_logged(&self, input: &str, log: &mut RunLog) -> Result<String> {
        self.run_inner(input, Some(log))
    }

    fn run_inner(&self, input: &str, mut log: Option<&mut RunLog>) -> Result<String> {
        let mut lines = input.lines();
        let grid_line = lines.next().unwrap_or_default();
        let grid: SharedGrid = parse_grid(grid_line)?.into_shared();

        {
            let g = grid.borrow();
            info!(width = g.width, height = g.height, "starting simulation");
            if let Some(log) = log.as_deref_mut() {
                log.log(
                    None,
                    RunEvent::GridCreated {
                        width: g.width,
                        height: g.height,
                    },
                    None,
                );
            }
        }

        let mut results: Vec<String> = Vec::new();
        let mut current: Option<Robot> = None;
        let mut deployed = 0usize;

        for line in lines {
            match LineKind::classify(line) {
                LineKind::Blank => current = None,
                LineKind::Position(line) => {
                    let (robot_index, robot) =
                        current_robot(&mut current, &grid, &mut deployed, log.as_deref_mut());
                    robot.set_position(line)?;
                    let state = robot.state();
                    debug!(robot = robot_index, position = %state.signature(), "position set");
                    if let Some(log) = log.as_deref_mut() {
                        log.log(
                            Some(robot_index),
                            RunEvent::PositionSet {
                                x: state.x,
                                y: state.y,
                                orientation: state.orientation,
                            },
                            None,
                        );
                    }
                }
                LineKind::Instructions(instructions) => {
                    let (robot_index, robot) =
                        current_robot(&mut current, &grid, &mut deployed, log.as_deref_mut());
                    let result = match log.as_deref_mut() {
                        Some(log) => {
                            log.log_start(
                                robot_index,
                                RunEvent::Execute {
                                    instructions: instructions.to_string(),
                                    result: None,
                                },
                            );
                            let result = robot.execute_with(instructions, |outcome| {
                                log.log_outcome(robot_index, outcome)
                            });
                            log.log_finish(
                                robot_index,
                                RunEvent::Execute {
                                    instructions: instructions.to_string(),
                                    result: Some(result.clone()),
                                },
                            );
                            result
                        }
                        None => robot.execute(instructions),
                    };
                    debug!(robot = robot_index, result = %result.trim_end(), "instructions executed");
                    results.push(result);
                }
            }
        }

        info!(
            robots = deployed,
            lines = results.len(),
            forbidden = grid.borrow().forbidden_count(),
            "simulation finished"
        );

        let output = results.join("\n");
        if self.config.trim_output {
            Ok(output.trim().to_string())
        } else {
            Ok(output)
        }
    }
}

/// Robot for the current block, deployed at the origin on first use
fn current_robot<'r>(
    current: &'r mut Option<Robot>,
    grid: &SharedGrid,
    deployed: &mut usize,
    log: Option<&mut RunLog>,
) -> (usize, &'r mut Robot) {
    if current.is_none() {
        debug!(robot = *deployed, "deploying robot");
        if let Some(log) = log {
            log.log(Some(*deployed), RunEvent::RobotDeployed, None);
        }
        *deployed += 1;
    }
    let robot = current.get_or_insert_with(|| Robot::new(grid));
    (*deployed - 1, robot)
}

/// Run `input` with the default configuration
pub fn run(input: &str) -> Result<String> {
    Simulation::default().run(input)
}
