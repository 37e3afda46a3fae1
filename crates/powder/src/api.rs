//! Relative-offset view of the grid around the cell being updated.

use crate::cell::{Cell, Material};
use crate::Grid;

/// Out-of-bounds reads return Wall, writes are no-ops.
/// Anything that lands through `move_to`/`sink_into` is marked settled.
#[derive(Debug)]
pub struct CellApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> CellApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.grid.get(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn material(&self, dx: i32, dy: i32) -> Material {
        self.get(dx, dy).material
    }

    #[must_use]
    pub fn is_empty(&self, dx: i32, dy: i32) -> bool {
        self.get(dx, dy).is_empty()
    }

    /// Occupied by anything, Wall and out-of-bounds included.
    #[must_use]
    pub fn is_filled(&self, dx: i32, dy: i32) -> bool {
        !self.is_empty(dx, dy)
    }

    pub fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        self.grid.set(self.x + dx, self.y + dy, cell);
    }

    /// Move this cell's material to the offset, leaving Empty behind.
    pub fn move_to(&mut self, dx: i32, dy: i32) {
        let me = self.get(0, 0);
        self.set(0, 0, Cell::empty());
        self.set(dx, dy, Cell { material: me.material, settled: true });
    }

    /// Trade places with the material at the offset. The displaced material
    /// is left unsettled in this cell.
    pub fn sink_into(&mut self, dx: i32, dy: i32) {
        let me = self.get(0, 0);
        let displaced = self.get(dx, dy);
        self.set(0, 0, Cell::new(displaced.material));
        self.set(dx, dy, Cell { material: me.material, settled: true });
    }

    /// Distance from this cell to the far side edges as `(left, right)`.
    #[must_use]
    pub fn columns_to_edges(&self) -> (i32, i32) {
        (self.x, self.grid.width as i32 - self.x)
    }
}
