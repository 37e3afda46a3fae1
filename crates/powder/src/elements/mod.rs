//! Per-material update rules dispatched from the tick loop.

mod flow;
mod sand;
mod water;

use crate::api::CellApi;
use crate::cell::Material;
use crate::config::Rules;
use crate::dice::Dice;

/// Dispatch to the movement rule for `material`.
///
/// Wall and Empty are no-ops and should be skipped before calling this.
pub fn update_cell<D: Dice + ?Sized>(
    material: Material,
    api: &mut CellApi,
    rules: &Rules,
    dice: &mut D,
) {
    match material {
        Material::Sand | Material::Water | Material::Oil => flow::update_particle(api, rules, dice),
        Material::Empty | Material::Wall => {}
    }
}
