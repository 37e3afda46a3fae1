//! Movement shared by every mobile material: fall, optional density swap,
//! then a sideways slide that can stretch into a short jump when the cell is
//! hemmed in.

use crate::api::CellApi;
use crate::cell::Material;
use crate::config::Rules;
use crate::dice::Dice;

use super::{sand, water};

pub fn update_particle<D: Dice + ?Sized>(api: &mut CellApi, rules: &Rules, dice: &mut D) {
    // One roll decides both the skip and the straight fall.
    let roll = dice.roll();
    if roll < rules.skip_threshold() {
        return;
    }

    if api.is_empty(0, 1) && rules.falls(roll) {
        api.move_to(0, 1);
        return;
    }

    if rules.density_interaction && try_sink(api, rules, dice) {
        return;
    }

    let dir = lateral_direction(api, rules, dice);
    for (dx, dy) in [(dir, 1), (-dir, 1), (dir, 0), (-dir, 0)] {
        if api.is_empty(dx, dy) {
            api.move_to(dx, dy);
            return;
        }
    }
}

/// Swap with a lighter, not yet settled material directly below.
fn try_sink<D: Dice + ?Sized>(api: &mut CellApi, rules: &Rules, dice: &mut D) -> bool {
    let below = api.get(0, 1);
    if below.settled {
        return false;
    }
    let sinks = match api.material(0, 0) {
        Material::Sand => sand::sinks_into(below.material, rules, dice),
        Material::Water => water::sinks_into(below.material),
        _ => false,
    };
    if sinks {
        api.sink_into(0, 1);
    }
    sinks
}

/// Signed column offset to try first. A zero offset pins the cell unless the
/// cell below happens to be open.
fn lateral_direction<D: Dice + ?Sized>(api: &CellApi, rules: &Rules, dice: &mut D) -> i32 {
    let sign = if dice.coin() { 1 } else { -1 };

    let hemmed = (api.is_filled(1, -1) && api.is_filled(1, 0))
        || (api.is_filled(-1, -1) && api.is_filled(-1, 0));
    let (left, right) = api.columns_to_edges();
    if hemmed && left > rules.jump_margin && right > rules.jump_margin {
        sign * dice.below(rules.jump_factor_bound) as i32
    } else {
        sign
    }
}
