//! Grid placement of solar panel and battery instances.
//!
//! The scene is re-derived from the counts on every change; there is no
//! incremental diffing.

use serde::Serialize;

use crate::input::SimulationInput;

/// Regular grid that fills rows left to right, then front to back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLayout {
    /// Instances per row (must be > 0).
    pub per_row: u32,
    /// Distance between neighbours within a row (scene units).
    pub spacing_x: f32,
    /// Distance between rows (scene units).
    pub spacing_z: f32,
    /// Position of the first instance.
    pub origin_x: f32,
    /// Position of the first row.
    pub origin_z: f32,
}

/// Roof panels: rows of 12.
pub const PANEL_GRID: GridLayout = GridLayout {
    per_row: 12,
    spacing_x: 1.1,
    spacing_z: 1.8,
    origin_x: -6.05,
    origin_z: -2.0,
};

/// Battery bank: rows of 5.
pub const BATTERY_GRID: GridLayout = GridLayout {
    per_row: 5,
    spacing_x: 0.6,
    spacing_z: 0.8,
    origin_x: 4.0,
    origin_z: 3.0,
};

/// Position of one instance on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Instance number, starting at 0.
    pub index: u32,
    /// Row number, starting at 0.
    pub row: u32,
    /// Column within the row, starting at 0.
    pub column: u32,
    pub x: f32,
    pub z: f32,
}

impl GridLayout {
    /// Number of rows needed for `count` instances.
    pub fn rows(&self, count: u32) -> u32 {
        count.div_ceil(self.per_row.max(1))
    }

    /// Places `count` instances on the grid.
    pub fn place(&self, count: u32) -> Vec<Placement> {
        let per_row = self.per_row.max(1);
        (0..count)
            .map(|index| {
                let row = index / per_row;
                let column = index % per_row;
                Placement {
                    index,
                    row,
                    column,
                    x: self.origin_x + column as f32 * self.spacing_x,
                    z: self.origin_z + row as f32 * self.spacing_z,
                }
            })
            .collect()
    }
}

/// Panel and battery placements for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub panels: Vec<Placement>,
    pub batteries: Vec<Placement>,
}

impl SceneLayout {
    /// Lays out the counts of `input` on [`PANEL_GRID`] and [`BATTERY_GRID`].
    pub fn for_input(input: &SimulationInput) -> Self {
        Self::for_counts(input.solar_panel_count, input.battery_count)
    }

    /// Lays out explicit counts.
    pub fn for_counts(solar_panels: u32, batteries: u32) -> Self {
        Self {
            panels: PANEL_GRID.place(solar_panels),
            batteries: BATTERY_GRID.place(batteries),
        }
    }
}
