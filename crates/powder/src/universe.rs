//! Host-facing wrapper: brush, pointer strokes, emitters and a render buffer
//! of one material byte per cell.

use wasm_bindgen::prelude::*;

use crate::cell::{Cell, Material};
use crate::Simulation;

pub const DEFAULT_BRUSH_RADIUS: i32 = 5;
pub const EMITTER_WIDTH: i32 = 20;
pub const DEFAULT_EMITTER_DENSITY: f64 = 0.3;
pub const EMITTER_DENSITY_STEP: f64 = 0.05;
pub const MIN_EMITTER_DENSITY: f64 = 0.05;
pub const MAX_EMITTER_DENSITY: f64 = 1.0;
/// Strokes per direction drawn by the random wall tools.
pub const RANDOM_LINE_COUNT: usize = 20;
/// Ticks between particle-count log lines.
pub const STATS_INTERVAL: u64 = 50;

/// A fixed band along the top that drips material in every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emitter {
    pub material: Material,
    pub center_x: i32,
    pub enabled: bool,
    pub density: f64,
}

impl Emitter {
    fn new(material: Material, center_x: i32) -> Self {
        Self {
            material,
            center_x,
            enabled: true,
            density: DEFAULT_EMITTER_DENSITY,
        }
    }

    fn adjust(&mut self, delta: f64) {
        self.density = (self.density + delta).clamp(MIN_EMITTER_DENSITY, MAX_EMITTER_DENSITY);
    }
}

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    material: Material,
    radius: i32,
    /// Last pointer position and whether the button is held.
    pointer: (i32, i32),
    pressed: bool,
    emitters: [Emitter; 3],
    render: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: u32, height: u32, seed: u32) -> Self {
        let w = width as i32;
        let mut universe = Self {
            sim: Simulation::new(width as usize, height as usize, u64::from(seed)),
            material: Material::Wall,
            radius: DEFAULT_BRUSH_RADIUS,
            pointer: (0, 0),
            pressed: false,
            emitters: [
                Emitter::new(Material::Sand, w / 4),
                Emitter::new(Material::Water, w / 4 * 2),
                Emitter::new(Material::Oil, w / 4 * 3),
            ],
            render: vec![0; width as usize * height as usize],
        };
        universe.refresh();
        universe
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.sim.grid().width as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.sim.grid().height as u32
    }

    /// One frame: emitters, held brush, then the simulation step.
    pub fn tick(&mut self) {
        for emitter in self.emitters {
            if emitter.enabled {
                self.sim.emit(emitter.center_x, EMITTER_WIDTH, emitter.material, emitter.density);
            }
        }
        if self.pressed {
            self.stroke(self.pointer, self.pointer);
        }
        self.sim.tick();
        self.refresh();

        let ticks = self.sim.ticks();
        if ticks % STATS_INTERVAL == 0 {
            log::debug!(
                "tick {ticks}: {} particles",
                self.sim.grid().particle_count()
            );
        }
    }

    pub fn clear(&mut self) {
        self.sim.clear();
        self.refresh();
        log::info!("cleared grid");
    }

    /// Flip sink/float swaps between materials; returns the new setting.
    pub fn toggle_density_interaction(&mut self) -> bool {
        let enabled = self.sim.toggle_density_interaction();
        log::info!("density interaction {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Choose the brush material by code; unknown codes are ignored.
    pub fn select_material(&mut self, code: u8) -> bool {
        match Material::try_from(code) {
            Ok(material) => {
                self.material = material;
                log::info!("brush material {material}");
                true
            }
            Err(err) => {
                log::warn!("ignoring brush selection: {err}");
                false
            }
        }
    }

    #[must_use]
    pub fn brush_material(&self) -> u8 {
        self.material as u8
    }

    #[must_use]
    pub fn brush_radius(&self) -> i32 {
        self.radius
    }

    pub fn grow_brush(&mut self) {
        let limit = self.width().max(self.height()).max(1) as i32;
        self.radius = (self.radius * 2).min(limit);
        log::info!("brush radius {}", self.radius);
    }

    pub fn shrink_brush(&mut self) {
        self.radius = (self.radius / 2).max(1);
        log::info!("brush radius {}", self.radius);
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
        self.pressed = true;
        self.stroke((x, y), (x, y));
        self.refresh();
    }

    /// Drags paint from the previous position; hovering just tracks it.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        if self.pressed {
            self.stroke(self.pointer, (x, y));
            self.refresh();
        }
        self.pointer = (x, y);
    }

    pub fn pointer_up(&mut self, x: i32, y: i32) {
        if self.pressed {
            self.stroke(self.pointer, (x, y));
            self.refresh();
        }
        self.pointer = (x, y);
        self.pressed = false;
    }

    /// Enable/disable the emitter for `code`; returns the new state.
    pub fn toggle_emitter(&mut self, code: u8) -> bool {
        match self.emitter_mut(code) {
            Some(emitter) => {
                emitter.enabled = !emitter.enabled;
                log::info!(
                    "{} emitter {}",
                    emitter.material,
                    if emitter.enabled { "on" } else { "off" }
                );
                emitter.enabled
            }
            None => false,
        }
    }

    pub fn raise_emitter(&mut self, code: u8) {
        if let Some(emitter) = self.emitter_mut(code) {
            emitter.adjust(EMITTER_DENSITY_STEP);
            log::info!("{} emitter density {:.2}", emitter.material, emitter.density);
        }
    }

    pub fn lower_emitter(&mut self, code: u8) {
        if let Some(emitter) = self.emitter_mut(code) {
            emitter.adjust(-EMITTER_DENSITY_STEP);
            log::info!("{} emitter density {:.2}", emitter.material, emitter.density);
        }
    }

    /// Density of the emitter for `code`, or 0 when there is none.
    #[must_use]
    pub fn emitter_density(&self, code: u8) -> f64 {
        self.emitter(code).map_or(0.0, |e| e.density)
    }

    #[must_use]
    pub fn emitter_enabled(&self, code: u8) -> bool {
        self.emitter(code).is_some_and(|e| e.enabled)
    }

    pub fn draw_random_walls(&mut self) {
        self.sim.scatter_lines(RANDOM_LINE_COUNT, self.radius, Material::Wall);
        self.refresh();
    }

    pub fn erase_random_walls(&mut self) {
        self.sim.scatter_lines(RANDOM_LINE_COUNT, self.radius, Material::Empty);
        self.refresh();
    }

    /// Overwrite one cell; unknown codes are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, code: u8) {
        match Material::try_from(code) {
            Ok(material) => {
                self.sim.grid_mut().set(x, y, Cell::new(material));
                self.refresh();
            }
            Err(err) => log::warn!("ignoring set_cell({x}, {y}): {err}"),
        }
    }

    #[must_use]
    pub fn material_at(&self, x: i32, y: i32) -> u8 {
        self.sim.grid().material(x, y) as u8
    }

    /// Pointer to `width * height` material bytes, row-major.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.render.as_ptr()
    }

    #[must_use]
    pub fn particle_count(&self) -> u32 {
        self.sim.grid().particle_count() as u32
    }
}

impl Universe {
    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    #[must_use]
    pub fn render_buffer(&self) -> &[u8] {
        &self.render
    }

    fn stroke(&mut self, from: (i32, i32), to: (i32, i32)) {
        self.sim.place_segment(from, to, self.radius, self.material);
    }

    fn refresh(&mut self) {
        for (byte, cell) in self.render.iter_mut().zip(&self.sim.grid().cells) {
            *byte = cell.material as u8;
        }
    }

    fn emitter(&self, code: u8) -> Option<&Emitter> {
        let material = Material::try_from(code).ok()?;
        self.emitters.iter().find(|e| e.material == material)
    }

    fn emitter_mut(&mut self, code: u8) -> Option<&mut Emitter> {
        let material = Material::try_from(code).ok()?;
        self.emitters.iter_mut().find(|e| e.material == material)
    }
}
