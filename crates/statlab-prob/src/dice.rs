//! A seedable dice simulator with a rolling history window.

use std::{collections::VecDeque, fmt::Write as _};

use rand::{
    Rng,
    SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of faces on a die.
pub const FACES: usize = 6;

/// Default number of rolls retained in the history window.
pub const DEFAULT_HISTORY_CAP: usize = 100;

/// Seed for deterministic dice rolls.
///
/// A 128-bit seed, serialized as a 32-character hex string. The same seed
/// reproduces the same roll sequence, which is what the tests and the
/// `--seed` CLI flag rely on.
///
/// # Examples
///
/// ```
/// use statlab_prob::dice::{DiceRoller, RollSeed};
/// use rand::Rng as _;
///
/// let seed: RollSeed = rand::rng().random();
/// let mut first = DiceRoller::with_seed(2, seed);
/// let mut second = DiceRoller::with_seed(2, seed);
/// assert_eq!(first.roll(), second.roll());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RollSeed([u8; 16]);

impl Serialize for RollSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex = String::with_capacity(32);
        write!(&mut hex, "{num:032x}").expect("writing to a String cannot fail");
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for RollSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl RollSeed {
    /// Parses a 32-character hex string into a seed.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        if hex.len() != 32 {
            return Err(format!(
                "seed must be 32 hex characters, got {}",
                hex.len()
            ));
        }
        let num = u128::from_str_radix(hex, 16)
            .map_err(|e| format!("seed is not valid hex: {hex} ({e})"))?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Generates random seeds with `rng.random()`.
impl Distribution<RollSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RollSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        RollSeed(seed)
    }
}

/// Rolls a fixed number of dice and remembers recent results.
///
/// Each roll draws one uniform integer in 1..=6 per die, independent across
/// dice and rolls. A capped window of recent rolls backs the empirical
/// face-frequency display; once the window is full, the oldest roll drops
/// out as a new one lands.
///
/// # Examples
///
/// ```
/// use statlab_prob::dice::DiceRoller;
///
/// let mut roller = DiceRoller::new(3);
/// let faces = roller.roll();
/// assert_eq!(faces.len(), 3);
/// assert!(faces.iter().all(|&f| (1..=6).contains(&f)));
/// ```
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: Pcg32,
    num_dice: usize,
    history: VecDeque<Vec<u8>>,
    history_cap: usize,
}

impl DiceRoller {
    /// Creates a roller for `num_dice` dice with a random seed.
    #[must_use]
    pub fn new(num_dice: usize) -> Self {
        Self::with_seed(num_dice, rand::rng().random())
    }

    /// Like [`Self::new`], but deterministic for the given seed.
    #[must_use]
    pub fn with_seed(num_dice: usize, seed: RollSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            num_dice,
            history: VecDeque::with_capacity(DEFAULT_HISTORY_CAP),
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }

    /// Replaces the history cap, evicting old rolls if needed.
    ///
    /// A cap of 0 keeps no history (every roll is still returned).
    pub fn set_history_cap(&mut self, cap: usize) {
        self.history_cap = cap;
        while self.history.len() > cap {
            self.history.pop_front();
        }
    }

    /// Rolls all dice once and returns the faces.
    #[expect(clippy::cast_possible_truncation)]
    pub fn roll(&mut self) -> Vec<u8> {
        let faces = (0..self.num_dice)
            .map(|_| self.rng.random_range(1..=FACES as u8))
            .collect::<Vec<_>>();
        if self.history_cap > 0 {
            if self.history.len() == self.history_cap {
                self.history.pop_front();
            }
            self.history.push_back(faces.clone());
        }
        faces
    }

    /// Number of dice rolled together.
    #[must_use]
    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    /// The retained rolls, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &[u8]> {
        self.history.iter().map(Vec::as_slice)
    }

    /// How many face observations the window currently holds.
    #[must_use]
    pub fn observations(&self) -> usize {
        self.history.iter().map(Vec::len).sum()
    }

    /// Counts of each face 1..=6 across the history window.
    #[must_use]
    pub fn face_counts(&self) -> [u64; FACES] {
        let mut counts = [0_u64; FACES];
        for roll in &self.history {
            for &face in roll {
                counts[usize::from(face) - 1] += 1;
            }
        }
        counts
    }

    /// Relative frequency of each face; all zeros with no history.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn face_frequencies(&self) -> [f64; FACES] {
        let total = self.observations();
        if total == 0 {
            return [0.0; FACES];
        }
        self.face_counts()
            .map(|count| count as f64 / total as f64)
    }
}
