//! Placement primitives: disks, strokes, emitters and random wall lines.
//!
//! Everything here clips to the grid, so callers may pass extents that hang
//! over the edges.

use crate::cell::{Cell, Material};
use crate::dice::Dice;
use crate::Grid;

/// Row that emitters drop new material into. Row 0 is never scanned by the
/// tick loop, so material placed there would hang forever.
pub const EMIT_ROW: i32 = 1;

/// Set every cell with `dx² + dy² <= radius²` to `material`.
pub fn place_disk(grid: &mut Grid, cx: i32, cy: i32, radius: i32, material: Material) {
    let r = radius.max(0);
    let x_min = (cx - r).max(0);
    let x_max = (cx + r).min(grid.width as i32 - 1);
    let y_min = (cy - r).max(0);
    let y_max = (cy + r).min(grid.height as i32 - 1);
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r * r {
                grid.set(x, y, Cell::new(material));
            }
        }
    }
}

/// Stamp a disk at `max(|dx|, |dy|) + 1` evenly spaced points from `from` to
/// `to`, endpoints included, so no slope leaves gaps.
pub fn place_segment(
    grid: &mut Grid,
    from: (i32, i32),
    to: (i32, i32),
    radius: i32,
    material: Material,
) {
    let (x0, y0) = from;
    let (dx, dy) = (to.0 - x0, to.1 - y0);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        place_disk(grid, x0, y0, radius, material);
        return;
    }
    for i in 0..=steps {
        place_disk(grid, x0 + dx * i / steps, y0 + dy * i / steps, radius, material);
    }
}

/// Drop `material` into each column of `[center_x - width/2, center_x + width/2)`
/// with probability `density`. One draw per in-bounds column.
pub fn emit<D: Dice + ?Sized>(
    grid: &mut Grid,
    dice: &mut D,
    center_x: i32,
    width: i32,
    material: Material,
    density: f64,
) {
    let half = width / 2;
    let start = (center_x - half).max(0);
    let end = (center_x + half).min(grid.width as i32);
    for x in start..end {
        if dice.chance(density) {
            grid.set(x, EMIT_ROW, Cell::new(material));
        }
    }
}

/// `count` strokes between random top and bottom columns, then `count`
/// strokes between random left and right rows.
pub fn scatter_lines<D: Dice + ?Sized>(
    grid: &mut Grid,
    dice: &mut D,
    count: usize,
    radius: i32,
    material: Material,
) {
    let w = grid.width as u32;
    let h = grid.height as u32;
    if w == 0 || h == 0 {
        return;
    }
    let (right, bottom) = (w as i32, h as i32);
    for _ in 0..count {
        let top = dice.below(w) as i32;
        let base = dice.below(w) as i32;
        place_segment(grid, (base, bottom), (top, 0), radius, material);
    }
    for _ in 0..count {
        let left = dice.below(h) as i32;
        let far = dice.below(h) as i32;
        place_segment(grid, (right, far), (0, left), radius, material);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::testing::{Scripted, EAGER, LAZY};
    use proptest::prelude::*;

    fn cells_of(grid: &Grid, material: Material) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..grid.height as i32 {
            for x in 0..grid.width as i32 {
                if grid.material(x, y) == material {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn disk_radius_three_is_exact() {
        let mut grid = Grid::new(100, 100);
        place_disk(&mut grid, 50, 50, 3, Material::Sand);
        let placed = cells_of(&grid, Material::Sand);
        assert_eq!(placed.len(), 29);
        for y in 0..100 {
            for x in 0..100 {
                let (dx, dy) = (x - 50, y - 50);
                let inside = dx * dx + dy * dy <= 9;
                assert_eq!(placed.contains(&(x, y)), inside, "({x}, {y})");
            }
        }
    }

    #[test]
    fn disk_radius_zero_is_one_cell() {
        let mut grid = Grid::new(8, 8);
        place_disk(&mut grid, 3, 4, 0, Material::Oil);
        assert_eq!(cells_of(&grid, Material::Oil), vec![(3, 4)]);

        place_disk(&mut grid, 5, 5, -4, Material::Wall);
        assert_eq!(cells_of(&grid, Material::Wall), vec![(5, 5)]);
    }

    #[test]
    fn disk_clips_at_corner() {
        let mut grid = Grid::new(10, 10);
        place_disk(&mut grid, 0, 0, 2, Material::Wall);
        assert_eq!(
            cells_of(&grid, Material::Wall),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)]
        );
    }

    #[test]
    fn disk_fully_outside_does_nothing() {
        let mut grid = Grid::new(10, 10);
        place_disk(&mut grid, -20, 40, 3, Material::Sand);
        assert!(cells_of(&grid, Material::Sand).is_empty());
    }

    #[test]
    fn segment_with_equal_endpoints_is_one_disk() {
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        place_segment(&mut a, (7, 9), (7, 9), 2, Material::Water);
        place_disk(&mut b, 7, 9, 2, Material::Water);
        assert_eq!(a, b);
    }

    #[test]
    fn segment_covers_both_endpoints() {
        let mut grid = Grid::new(20, 20);
        place_segment(&mut grid, (2, 3), (17, 11), 0, Material::Wall);
        assert_eq!(grid.material(2, 3), Material::Wall);
        assert_eq!(grid.material(17, 11), Material::Wall);
        // One stamp per step along the major axis.
        assert_eq!(cells_of(&grid, Material::Wall).len(), 16);
    }

    #[test]
    fn emit_zero_density_places_nothing() {
        let mut grid = Grid::new(40, 10);
        emit(&mut grid, &mut Scripted::constant(LAZY), 20, 10, Material::Sand, 0.0);
        assert_eq!(grid.particle_count(), 0);
    }

    #[test]
    fn emit_full_density_fills_every_column() {
        let mut grid = Grid::new(40, 10);
        let mut dice = Scripted::constant(EAGER);
        emit(&mut grid, &mut dice, 20, 10, Material::Water, 1.0);
        let placed = cells_of(&grid, Material::Water);
        let expected: Vec<_> = (15..25).map(|x| (x, EMIT_ROW)).collect();
        assert_eq!(placed, expected);
        assert_eq!(dice.consumed(), 10);
    }

    #[test]
    fn emit_clips_columns_to_grid() {
        let mut grid = Grid::new(8, 4);
        let mut dice = Scripted::constant(EAGER);
        emit(&mut grid, &mut dice, 1, 10, Material::Oil, 1.0);
        assert_eq!(cells_of(&grid, Material::Oil).len(), 6);
        assert_eq!(dice.consumed(), 6);
    }

    #[test]
    fn scatter_lines_draw_and_erase() {
        let mut grid = Grid::new(30, 20);
        let mut dice = Scripted::new(&[3, 27, 5, 11, 8, 8, 2, 14]);
        scatter_lines(&mut grid, &mut dice, 2, 1, Material::Wall);
        assert!(grid.count(Material::Wall) > 0);
        assert_eq!(dice.consumed(), 8);

        let mut eraser = Scripted::new(&[3, 27, 5, 11, 8, 8, 2, 14]);
        scatter_lines(&mut grid, &mut eraser, 2, 1, Material::Empty);
        assert_eq!(grid.count(Material::Wall), 0);
    }

    proptest! {
        #[test]
        fn prop_disk_matches_predicate(
            cx in -10i32..42,
            cy in -10i32..42,
            r in 0i32..12,
        ) {
            let mut grid = Grid::new(32, 32);
            place_disk(&mut grid, cx, cy, r, Material::Sand);
            for y in 0..32 {
                for x in 0..32 {
                    let (dx, dy) = (x - cx, y - cy);
                    let inside = dx * dx + dy * dy <= r * r;
                    prop_assert_eq!(grid.material(x, y) == Material::Sand, inside);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_segment_has_no_gaps(
            x0 in 0i32..32, y0 in 0i32..32,
            x1 in 0i32..32, y1 in 0i32..32,
        ) {
            let mut grid = Grid::new(32, 32);
            place_segment(&mut grid, (x0, y0), (x1, y1), 0, Material::Wall);
            let (dx, dy) = (x1 - x0, y1 - y0);
            let steps = dx.abs().max(dy.abs());
            for i in 0..=steps {
                let (x, y) = if steps == 0 {
                    (x0, y0)
                } else {
                    (x0 + dx * i / steps, y0 + dy * i / steps)
                };
                prop_assert_eq!(grid.material(x, y), Material::Wall, "sample {} missing", i);
                // Consecutive samples are 8-neighbours, so the stroke is one piece.
                if i > 0 {
                    let (px, py) = (x0 + dx * (i - 1) / steps, y0 + dy * (i - 1) / steps);
                    prop_assert!((x - px).abs() <= 1 && (y - py).abs() <= 1);
                }
            }
            // Zero radius stamps nothing beyond the samples.
            prop_assert_eq!(cells_of(&grid, Material::Wall).len(), steps as usize + 1);
            prop_assert!(grid.material(x0, y0) == Material::Wall);
            prop_assert!(grid.material(x1, y1) == Material::Wall);
        }
    }
}
