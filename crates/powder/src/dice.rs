//! Random draws used by the update rule and the placement primitives.
//!
//! Every draw is a single `next_u32` reduced with plain arithmetic, so a
//! scripted generator fully determines which branch each rule takes.

use rand::RngCore;

pub trait Dice {
    fn roll(&mut self) -> u32;

    /// `true` for odd rolls.
    fn coin(&mut self) -> bool {
        self.roll() & 1 == 1
    }

    /// Uniform-ish value in `0..n`.
    fn below(&mut self, n: u32) -> u32 {
        self.roll() % n.max(1)
    }

    fn one_in(&mut self, n: u32) -> bool {
        self.below(n) == 0
    }

    /// `p <= 0` never passes, `p >= 1` always passes.
    fn chance(&mut self, p: f64) -> bool {
        f64::from(self.roll()) < p * (f64::from(u32::MAX) + 1.0)
    }
}

impl<R: RngCore + ?Sized> Dice for R {
    fn roll(&mut self) -> u32 {
        self.next_u32()
    }
}
