/// Source of uniform randomness for combat and policies.
pub trait Dice {
    /// A uniform sample in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// A uniform index in `0..len`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize {
        let index = (self.roll() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

impl<R: rand::Rng> Dice for R {
    fn roll(&mut self) -> f64 {
        self.gen()
    }
}

/// Replays a fixed list of rolls, wrapping around at the end.
#[derive(Clone, Debug, Default)]
pub struct FixedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl FixedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of rolls drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl Dice for FixedRolls {
    fn roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }

        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}
