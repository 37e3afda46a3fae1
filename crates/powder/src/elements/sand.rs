//! Sand: sinks through water outright and through oil only sometimes.

use crate::cell::Material;
use crate::config::Rules;
use crate::dice::Dice;

/// Whether sand resting on `below` trades places with it this tick.
pub fn sinks_into<D: Dice + ?Sized>(below: Material, rules: &Rules, dice: &mut D) -> bool {
    match below {
        Material::Water => true,
        // Oil is thick enough to slow the grain down.
        Material::Oil => dice.one_in(rules.sand_through_oil_one_in),
        _ => false,
    }
}
