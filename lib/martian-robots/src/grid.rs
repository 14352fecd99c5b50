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

//! The bounded grid and the scents left behind by lost robots.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::MartianRobotsError;

/// Largest value accepted for either grid bound.
pub const MAX_BOUND: i32 = 50;

/// A grid coordinate. Signed so that the off-grid cells robots are lost from
/// are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: i32,

    /// Y coordinate.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The rectangular grid with inclusive upper bounds, plus the set of off-grid
/// positions robots have been lost to.
///
/// The scent set is keyed on the whole coordinate pair rather than stored as
/// a dense matrix; only a handful of cells ever carry a scent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    max_x: i32,
    max_y: i32,
    scents: FxHashSet<Position>,
}

impl Grid {
    /// Create a grid spanning `[0, max_x]` by `[0, max_y]`. Bounds outside
    /// `[0, MAX_BOUND]` are rejected.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self, MartianRobotsError> {
        if !(0..=MAX_BOUND).contains(&max_x) || !(0..=MAX_BOUND).contains(&max_y) {
            return Err(MartianRobotsError::BoundsOutOfRange(max_x, max_y));
        }
        Ok(Self {
            max_x,
            max_y,
            scents: FxHashSet::default(),
        })
    }

    /// Whether the position is on the grid.
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x).contains(&position.x) && (0..=self.max_y).contains(&position.y)
    }

    /// Whether a robot was previously lost moving to this position.
    pub fn is_lost(&self, position: Position) -> bool {
        self.scents.contains(&position)
    }

    /// Record the position a robot was lost to. Recording the same position
    /// again is a no-op.
    pub fn mark_lost(&mut self, position: Position) {
        self.scents.insert(position);
    }
}
