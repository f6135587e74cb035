use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (category plus defining ranks) with [`Kickers`]
/// (tie-breaking ranks). Ordering is lexicographic: ranking first, then
/// kickers. This is the same order as comparing the flat integer
/// sequences returned by [`Strength::key`].
///
/// Constructed from a [`Hand`] by running the [`Evaluator`].
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

/// Evaluates a hand into its comparable strength.
pub fn hand_rank(hand: &Hand) -> Strength {
    Strength::from(hand)
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kicks
    }
    pub fn category(&self) -> u8 {
        self.value.category()
    }
    /// Category, then defining ranks, then kickers.
    ///
    /// e.g. `[7, 2, 6]` for four deuces with a six kicker,
    /// `[4, 5]` for a wheel.
    pub fn key(&self) -> Vec<u8> {
        std::iter::once(self.value.category())
            .chain(self.value.values())
            .chain(Vec::from(self.kicks.clone()))
            .collect()
    }
}

impl From<&Hand> for Strength {
    fn from(hand: &Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        e.find_strength()
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        debug_assert!(kicks.is_empty() || kicks.len() == value.n_kickers());
        Self { value, kicks }
    }
}

impl From<Strength> for Vec<u8> {
    fn from(s: Strength) -> Self {
        s.key()
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.kicks)
    }
}
