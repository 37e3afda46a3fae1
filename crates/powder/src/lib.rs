//! Falling sand, water and oil simulation engine.

pub mod api;
pub mod brush;
pub mod cell;
pub mod config;
pub mod dice;
pub mod elements;
pub mod simulation;
pub mod universe;

use cell::{Cell, Material};

pub use config::Rules;
pub use simulation::Simulation;
pub use universe::Universe;

/// 2D grid of cells, row-major. Out-of-bounds reads return Wall, writes are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize]
        } else {
            Cell::wall()
        }
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize] = cell;
        }
    }

    #[must_use]
    pub fn material(&self, x: i32, y: i32) -> Material {
        self.get(x, y).material
    }

    /// Reset every cell to Empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::empty());
    }

    /// Reset one row to Empty. Rows outside the grid are ignored.
    pub fn clear_row(&mut self, y: usize) {
        if y < self.height {
            let start = y * self.width;
            self.cells[start..start + self.width].fill(Cell::empty());
        }
    }

    /// Drop every "settled this tick" marker.
    pub fn clear_settled(&mut self) {
        for cell in &mut self.cells {
            cell.settled = false;
        }
    }

    #[must_use]
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|c| c.material == material).count()
    }

    /// Number of Sand, Water and Oil cells.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.material.is_mobile()).count()
    }
}
