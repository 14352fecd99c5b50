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

//! Robot state and the per-character instruction interpreter.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};
use crate::MartianRobotsError;

/// One of the four cardinal directions a robot can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Facing north (+y).
    North,

    /// Facing east (+x).
    East,

    /// Facing south (-y).
    South,

    /// Facing west (-x).
    West,
}

// Fixed turning order. Right advances the cycle by 1, left by 3 (-1 mod 4).
const CYCLE: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

impl Facing {
    fn index(self) -> usize {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    /// The facing one right turn away.
    pub fn right(self) -> Self {
        CYCLE[(self.index() + 1) % 4]
    }

    /// The facing one left turn away.
    pub fn left(self) -> Self {
        CYCLE[(self.index() + 3) % 4]
    }

    /// Unit step of a forward move in this facing.
    fn step(self) -> (i32, i32) {
        match self {
            Facing::North => (0, 1),
            Facing::East => (1, 0),
            Facing::South => (0, -1),
            Facing::West => (-1, 0),
        }
    }
}

impl TryFrom<char> for Facing {
    type Error = MartianRobotsError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'N' => Ok(Facing::North),
            'E' => Ok(Facing::East),
            'S' => Ok(Facing::South),
            'W' => Ok(Facing::West),
            other => Err(MartianRobotsError::UnknownFacing(other)),
        }
    }
}

impl Display for Facing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Facing::North => 'N',
            Facing::East => 'E',
            Facing::South => 'S',
            Facing::West => 'W',
        };
        write!(f, "{}", letter)
    }
}

/// A single movement instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Rotate 90 degrees left in place.
    Left,

    /// Rotate 90 degrees right in place.
    Right,

    /// Step one cell in the current facing.
    Forward,
}

impl TryFrom<char> for Instruction {
    type Error = MartianRobotsError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'L' => Ok(Instruction::Left),
            'R' => Ok(Instruction::Right),
            'F' => Ok(Instruction::Forward),
            other => Err(MartianRobotsError::UnknownInstruction(other)),
        }
    }
}

/// A robot on the grid: where it is, where it points, and whether it has been
/// lost off the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Robot {
    /// Current position, or the last valid position once lost.
    pub position: Position,

    /// Where the robot is pointing.
    pub facing: Facing,

    /// Whether the robot fell off the grid. Never cleared once set.
    pub lost: bool,
}

impl Robot {
    /// Create an active robot at a position and facing.
    pub fn new(position: Position, facing: Facing) -> Self {
        Self {
            position,
            facing,
            lost: false,
        }
    }

    /// Execute a single instruction against the grid. Does nothing once the
    /// robot is lost.
    pub fn execute(&mut self, instruction: Instruction, grid: &mut Grid) {
        if self.lost {
            return;
        }
        match instruction {
            Instruction::Left => self.facing = self.facing.left(),
            Instruction::Right => self.facing = self.facing.right(),
            Instruction::Forward => self.forward(grid),
        }
    }

    /// Execute an instruction string character by character, strictly in
    /// order. Processing stops the instant the robot is lost; characters
    /// after the losing step are never inspected, so they cannot raise an
    /// invalid-instruction error.
    pub fn follow(
        &mut self,
        instructions: &str,
        grid: &mut Grid,
    ) -> Result<(), MartianRobotsError> {
        for letter in instructions.chars() {
            if self.lost {
                break;
            }
            self.execute(Instruction::try_from(letter)?, grid);
        }
        Ok(())
    }

    // A forward move first defers to any scent on the candidate cell, then
    // either advances or falls off the grid and leaves a scent of its own.
    fn forward(&mut self, grid: &mut Grid) {
        let (dx, dy) = self.facing.step();
        let candidate = Position::new(self.position.x + dx, self.position.y + dy);
        if grid.is_lost(candidate) {
            return;
        }
        if grid.contains(candidate) {
            self.position = candidate;
        } else {
            self.lost = true;
            grid.mark_lost(candidate);
        }
    }
}

// Renders the final-state report line: "<x> <y> <facing>", plus " LOST" for
// a robot that fell off the grid.
impl Display for Robot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.facing)?;
        if self.lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}

impl FromStr for Robot {
    type Err = MartianRobotsError;

    // Parses the "<x> <y> <facing-letter>" position line, e.g. "1 1 E".
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || MartianRobotsError::MalformedRobotPosition(line.to_string());

        let mut fields = line.split_whitespace();
        let (x, y, facing) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), Some(facing), None) => (x, y, facing),
            _ => return Err(malformed()),
        };
        let x = x.parse::<i32>().map_err(|_| malformed())?;
        let y = y.parse::<i32>().map_err(|_| malformed())?;

        let mut letters = facing.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(letter), None) => letter,
            _ => return Err(malformed()),
        };

        Ok(Robot::new(Position::new(x, y), Facing::try_from(letter)?))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid() -> Grid {
        Grid::new(5, 3).expect("grid")
    }

    #[test]
    fn test_right_cycles_north_east_south_west() {
        assert_eq!(Facing::North.right(), Facing::East);
        assert_eq!(Facing::East.right(), Facing::South);
        assert_eq!(Facing::South.right(), Facing::West);
        assert_eq!(Facing::West.right(), Facing::North);
    }

    #[test]
    fn test_left_reverses_the_cycle() {
        assert_eq!(Facing::North.left(), Facing::West);
        assert_eq!(Facing::West.left(), Facing::South);
        assert_eq!(Facing::South.left(), Facing::East);
        assert_eq!(Facing::East.left(), Facing::North);
    }

    #[test]
    fn test_forward_moves_one_cell_in_each_facing() {
        for (facing, expected) in [
            (Facing::North, Position::new(2, 3)),
            (Facing::East, Position::new(3, 2)),
            (Facing::South, Position::new(2, 1)),
            (Facing::West, Position::new(1, 2)),
        ] {
            let mut grid = grid();
            let mut robot = Robot::new(Position::new(2, 2), facing);
            robot.execute(Instruction::Forward, &mut grid);
            assert_eq!(robot.position, expected, "facing: {:?}", facing);
            assert!(!robot.lost);
        }
    }

    #[test]
    fn test_turns_never_change_position() {
        let mut grid = grid();
        let mut robot = Robot::new(Position::new(0, 0), Facing::North);
        robot.execute(Instruction::Left, &mut grid);
        robot.execute(Instruction::Right, &mut grid);
        assert_eq!(robot.position, Position::new(0, 0));
        assert!(!robot.lost);
    }

    #[test]
    fn test_forward_off_the_edge_loses_the_robot_and_leaves_a_scent() {
        let mut grid = grid();
        let mut robot = Robot::new(Position::new(0, 0), Facing::South);
        robot.execute(Instruction::Forward, &mut grid);
        assert!(robot.lost);
        assert_eq!(robot.position, Position::new(0, 0));
        assert_eq!(robot.facing, Facing::South);
        assert!(grid.is_lost(Position::new(0, -1)));
    }

    #[test]
    fn test_scent_blocks_a_later_robot_from_the_same_fatal_move() {
        let mut grid = grid();
        let mut first = Robot::new(Position::new(5, 3), Facing::North);
        first.follow("F", &mut grid).expect("follow failed");
        assert!(first.lost);

        // The second robot ignores the forward step onto the scented cell
        // and carries on with the rest of its instructions.
        let mut second = Robot::new(Position::new(5, 3), Facing::North);
        second.follow("FLF", &mut grid).expect("follow failed");
        assert!(!second.lost);
        assert_eq!(second.position, Position::new(4, 3));
        assert_eq!(second.facing, Facing::West);
    }

    #[test]
    fn test_processing_stops_the_instant_the_robot_is_lost() {
        let mut grid = grid();
        let mut robot = Robot::new(Position::new(3, 3), Facing::North);
        robot.follow("FRRF", &mut grid).expect("follow failed");
        assert!(robot.lost);
        assert_eq!(robot.position, Position::new(3, 3));
        // The turns after the losing step were never applied.
        assert_eq!(robot.facing, Facing::North);
    }

    #[test]
    fn test_characters_after_the_losing_step_are_not_inspected() {
        let mut grid = grid();
        let mut robot = Robot::new(Position::new(3, 3), Facing::North);
        assert!(robot.follow("FX", &mut grid).is_ok());
        assert!(robot.lost);
    }

    #[test]
    fn test_unknown_instruction_is_an_error() {
        let mut grid = grid();
        let mut robot = Robot::new(Position::new(1, 1), Facing::East);
        assert_eq!(
            robot.follow("FXF", &mut grid),
            Err(MartianRobotsError::UnknownInstruction('X'))
        );
        // The instructions before the bad character were applied.
        assert_eq!(robot.position, Position::new(2, 1));
    }

    #[test]
    fn test_empty_instruction_string_changes_nothing() {
        let mut grid = grid();
        let mut robot = Robot::new(Position::new(1, 1), Facing::East);
        robot.follow("", &mut grid).expect("follow failed");
        assert_eq!(robot, Robot::new(Position::new(1, 1), Facing::East));
    }

    #[test]
    fn test_execute_does_nothing_once_lost() {
        let mut grid = grid();
        let mut robot = Robot::new(Position::new(0, 0), Facing::South);
        robot.execute(Instruction::Forward, &mut grid);
        assert!(robot.lost);
        robot.execute(Instruction::Right, &mut grid);
        assert_eq!(robot.facing, Facing::South);
    }

    #[test]
    fn test_parse_robot_position_line() {
        let robot = "1 1 E".parse::<Robot>().expect("parse failed");
        assert_eq!(robot, Robot::new(Position::new(1, 1), Facing::East));
    }

    #[test]
    fn test_parse_supports_multi_digit_coordinates() {
        let robot = "10 42 W".parse::<Robot>().expect("parse failed");
        assert_eq!(robot, Robot::new(Position::new(10, 42), Facing::West));
    }

    #[test]
    fn test_parse_rejects_wrong_field_counts() {
        for line in ["", "1 1", "1 1 E E", "1 1 EE"] {
            assert_eq!(
                line.parse::<Robot>(),
                Err(MartianRobotsError::MalformedRobotPosition(line.to_string())),
                "line: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_coordinates() {
        assert_eq!(
            "a 1 E".parse::<Robot>(),
            Err(MartianRobotsError::MalformedRobotPosition("a 1 E".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_facing_letter() {
        assert_eq!(
            "1 1 Q".parse::<Robot>(),
            Err(MartianRobotsError::UnknownFacing('Q'))
        );
    }

    #[test]
    fn test_display_renders_the_report_line() {
        let robot = Robot::new(Position::new(1, 1), Facing::East);
        assert_eq!(robot.to_string(), "1 1 E");

        let mut grid = grid();
        let mut lost = Robot::new(Position::new(3, 3), Facing::North);
        lost.follow("F", &mut grid).expect("follow failed");
        assert_eq!(lost.to_string(), "3 3 N LOST");
    }

    fn any_facing() -> impl Strategy<Value = Facing> {
        prop_oneof![
            Just(Facing::North),
            Just(Facing::East),
            Just(Facing::South),
            Just(Facing::West),
        ]
    }

    fn vec_of_turns() -> impl Strategy<Value = Vec<Instruction>> {
        prop::collection::vec(
            prop_oneof![Just(Instruction::Left), Just(Instruction::Right)],
            0..32,
        )
    }

    proptest! {
        #[test]
        fn test_turn_only_instructions_never_move_the_robot(
            start in any_facing(),
            turns in vec_of_turns(),
        ) {
            let mut grid = grid();
            let mut robot = Robot::new(Position::new(1, 1), start);
            for turn in &turns {
                robot.execute(*turn, &mut grid);
            }
            assert_eq!(robot.position, Position::new(1, 1));
            assert!(!robot.lost);

            // Net rotation is (rights - lefts) mod 4, so the final facing is
            // the start advanced by that many right turns.
            let rights = turns
                .iter()
                .filter(|turn| **turn == Instruction::Right)
                .count();
            let lefts = turns.len() - rights;
            let mut expected = start;
            for _ in 0..((rights + 3 * lefts) % 4) {
                expected = expected.right();
            }
            assert_eq!(robot.facing, expected);
        }

        #[test]
        fn test_four_turns_in_one_direction_restore_the_facing(
            start in any_facing(),
            turn in prop_oneof![Just(Instruction::Left), Just(Instruction::Right)],
        ) {
            let mut grid = grid();
            let mut robot = Robot::new(Position::new(1, 1), start);
            for _ in 0..4 {
                robot.execute(turn, &mut grid);
            }
            assert_eq!(robot.facing, start);
            assert_eq!(robot.position, Position::new(1, 1));
        }
    }
}
