//! The simulation object: one grid, one rule set, one random stream.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::api::CellApi;
use crate::brush;
use crate::cell::Material;
use crate::config::Rules;
use crate::dice::Dice;
use crate::elements;
use crate::Grid;

#[derive(Debug)]
pub struct Simulation<R = SmallRng> {
    grid: Grid,
    rules: Rules,
    rng: R,
    ticks: u64,
}

impl Simulation {
    /// Seeded simulation; the same seed replays the same run.
    #[must_use]
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Simulation<R> {
    /// Simulation driven by any generator, e.g. a scripted one in tests.
    #[must_use]
    pub fn with_rng(width: usize, height: usize, rng: R) -> Self {
        Self {
            grid: Grid::new(width, height),
            rules: Rules::default(),
            rng,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    /// Number of completed ticks since creation.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn set_density_interaction(&mut self, enabled: bool) {
        self.rules.density_interaction = enabled;
    }

    /// Flip density interaction and return the new setting.
    pub fn toggle_density_interaction(&mut self) -> bool {
        self.rules.density_interaction = !self.rules.density_interaction;
        self.rules.density_interaction
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Advance the simulation by one tick.
    ///
    /// Empties the bottom row first, then scans rows `H-2` up to `1`. Each
    /// row picks its horizontal direction at random to avoid a lateral bias.
    /// Empty, Wall and already settled cells are skipped.
    pub fn tick(&mut self) {
        self.ticks += 1;
        self.grid.clear_settled();
        if self.grid.height == 0 {
            return;
        }
        self.grid.clear_row(self.grid.height - 1);

        let w = self.grid.width as i32;
        let h = self.grid.height as i32;
        for y in (1..h - 1).rev() {
            if self.rng.coin() {
                for x in (0..w).rev() {
                    self.update_at(x, y);
                }
            } else {
                for x in 0..w {
                    self.update_at(x, y);
                }
            }
        }
    }

    fn update_at(&mut self, x: i32, y: i32) {
        let cell = self.grid.get(x, y);
        if !cell.material.is_mobile() || cell.settled {
            return;
        }
        let mut api = CellApi::new(&mut self.grid, x, y);
        elements::update_cell(cell.material, &mut api, &self.rules, &mut self.rng);
    }

    pub fn place_disk(&mut self, cx: i32, cy: i32, radius: i32, material: Material) {
        brush::place_disk(&mut self.grid, cx, cy, radius, material);
    }

    pub fn place_segment(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        radius: i32,
        material: Material,
    ) {
        brush::place_segment(&mut self.grid, from, to, radius, material);
    }

    pub fn emit(&mut self, center_x: i32, width: i32, material: Material, density: f64) {
        brush::emit(&mut self.grid, &mut self.rng, center_x, width, material, density);
    }

    pub fn scatter_lines(&mut self, count: usize, radius: i32, material: Material) {
        brush::scatter_lines(&mut self.grid, &mut self.rng, count, radius, material);
    }
}
