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

#![warn(missing_docs)]

//! Martian robots mission logic.
//!
//! This is a library for simulating robots that follow instruction strings
//! across a bounded rectangular grid, remembering the positions robots were
//! lost from so that later robots refuse the same fatal move. It is intended
//! to be driven by a program that feeds it the line-oriented mission text and
//! prints each robot's final state.

pub mod grid;
pub mod mission;
pub mod robot;

/// Martian robots error. Every variant is fatal to the run that raises it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MartianRobotsError {
    /// Input ended before the grid bounds line.
    #[error("missing grid bounds line")]
    MissingBounds,

    /// Bounds line is not two integers.
    #[error("malformed grid bounds: {0:?}")]
    MalformedBounds(String),

    /// A grid bound is outside the accepted range.
    #[error("grid bounds out of range: {0} {1}")]
    BoundsOutOfRange(i32, i32),

    /// Robot position line is not "<x> <y> <facing>".
    #[error("malformed robot position: {0:?}")]
    MalformedRobotPosition(String),

    /// Facing letter is not one of N, E, S, W.
    #[error("unknown facing: {0}")]
    UnknownFacing(char),

    /// Instruction character is not one of L, R, F.
    #[error("unknown instruction: {0}")]
    UnknownInstruction(char),
}
