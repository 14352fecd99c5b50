/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! Line-oriented mission text and the sequential runner.
//!
//! A mission is a bounds line followed by robot records, each a position line
//! and an instruction line. Robots run strictly in input order against the
//! one shared grid, so every robot observes the scents left by all earlier
//! robots.

use std::str::Lines;

use crate::grid::Grid;
use crate::robot::Robot;
use crate::MartianRobotsError;

/// A parsed mission: the grid built from the bounds line, plus the robot
/// records still to be run.
///
/// Iterating yields each robot's final state in input order. Each record is
/// run to completion (or loss) before the next record's lines are read.
#[derive(Debug, Clone)]
pub struct Mission<'input> {
    grid: Grid,
    lines: Lines<'input>,
}

impl<'input> Mission<'input> {
    /// Parse the bounds line and prepare to run the records that follow.
    /// Trailing blank lines in the input are ignored.
    pub fn parse(input: &'input str) -> Result<Self, MartianRobotsError> {
        let mut lines = input.trim_end().lines();
        let bounds = lines.next().ok_or(MartianRobotsError::MissingBounds)?;
        let grid = parse_bounds(bounds)?;
        Ok(Self { grid, lines })
    }

    /// The shared grid, including every scent recorded so far.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Iterator for Mission<'_> {
    type Item = Result<Robot, MartianRobotsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.lines.next()?;
        // A record cut off by end of input after its position line carries
        // the empty instruction string.
        let instructions = self.lines.next().unwrap_or("");

        let mut robot = match position.parse::<Robot>() {
            Ok(robot) => robot,
            Err(e) => return Some(Err(e)),
        };
        if let Err(e) = robot.follow(instructions, &mut self.grid) {
            return Some(Err(e));
        }
        Some(Ok(robot))
    }
}

/// Run a whole mission and collect one report line per robot, in input order.
pub fn run(input: &str) -> Result<Vec<String>, MartianRobotsError> {
    let mission = Mission::parse(input)?;
    mission
        .map(|result| result.map(|robot| robot.to_string()))
        .collect()
}

// Parses the "<maxX> <maxY>" bounds line, e.g. "5 3".
fn parse_bounds(line: &str) -> Result<Grid, MartianRobotsError> {
    let malformed = || MartianRobotsError::MalformedBounds(line.to_string());

    let mut fields = line.split_whitespace();
    let (max_x, max_y) = match (fields.next(), fields.next(), fields.next()) {
        (Some(max_x), Some(max_y), None) => (max_x, max_y),
        _ => return Err(malformed()),
    };
    let max_x = max_x.parse::<i32>().map_err(|_| malformed())?;
    let max_y = max_y.parse::<i32>().map_err(|_| malformed())?;

    Grid::new(max_x, max_y)
}
