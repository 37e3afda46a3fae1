//! Water: sinks under oil, so oil ends up floating on top.

use crate::cell::Material;

pub fn sinks_into(below: Material) -> bool {
    below == Material::Oil
}
