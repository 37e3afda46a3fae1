//! Tuning constants for the update rule.

/// One-in-N chance that a mobile cell sits out a tick.
pub const SKIP_ONE_IN: u32 = 13;

/// A free fall happens unless the cell's roll is a multiple of this.
pub const FALL_MODULUS: u32 = 8;

/// One-in-N chance that sand sinks into oil when density interaction is on.
pub const SAND_THROUGH_OIL_ONE_IN: u32 = 5;

/// Minimum distance from either side edge before a lateral jump is allowed.
/// Must stay larger than `JUMP_FACTOR_BOUND - 1` so jumps land in bounds.
pub const JUMP_MARGIN: i32 = 5;

/// Lateral jump factor is drawn from `0..JUMP_FACTOR_BOUND`.
pub const JUMP_FACTOR_BOUND: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub skip_one_in: u32,
    pub fall_modulus: u32,
    pub sand_through_oil_one_in: u32,
    pub jump_margin: i32,
    pub jump_factor_bound: u32,
    /// Sand sinks through water/oil and oil floats on water.
    pub density_interaction: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            skip_one_in: SKIP_ONE_IN,
            fall_modulus: FALL_MODULUS,
            sand_through_oil_one_in: SAND_THROUGH_OIL_ONE_IN,
            jump_margin: JUMP_MARGIN,
            jump_factor_bound: JUMP_FACTOR_BOUND,
            density_interaction: false,
        }
    }
}

impl Rules {
    /// Rolls below this threshold skip the cell for the tick.
    #[must_use]
    pub fn skip_threshold(&self) -> u32 {
        u32::MAX / self.skip_one_in.max(1)
    }

    #[must_use]
    pub fn falls(&self, roll: u32) -> bool {
        roll % self.fall_modulus.max(1) != 0
    }
}
