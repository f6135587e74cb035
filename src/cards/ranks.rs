use super::card::Card;
use super::card::card_rank;
use super::hand::Hand;

const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];
const WHEEL_LOW: [u8; 5] = [5, 4, 3, 2, 1];

/// A hand's card values sorted high to low.
///
/// The one rewrite applied is the wheel: `A 5 4 3 2` becomes `5 4 3 2 1`,
/// so the ace plays low and straight detection stays a plain
/// "each value is one more than the next" check.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Ranks([u8; 5]);

impl Ranks {
    pub fn values(&self) -> [u8; 5] {
        self.0
    }
    pub fn high(&self) -> u8 {
        self.0[0]
    }
    /// Number of distinct values. Sorted, so only neighbors can repeat.
    pub fn distinct(&self) -> usize {
        1 + self.0.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

/// Normalized ranks of a hand.
pub fn card_ranks(hand: &Hand) -> Ranks {
    Ranks::from(hand)
}

impl From<&Hand> for Ranks {
    fn from(hand: &Hand) -> Self {
        let mut ranks = <[Card; 5]>::from(*hand).map(card_rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        match ranks {
            WHEEL => Self(WHEEL_LOW),
            ranks => Self(ranks),
        }
    }
}
impl From<Ranks> for [u8; 5] {
    fn from(r: Ranks) -> Self {
        r.0
    }
}
impl From<Ranks> for Vec<u8> {
    fn from(r: Ranks) -> Self {
        r.0.to_vec()
    }
}

impl std::fmt::Display for Ranks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = self.0.iter().map(|r| r.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", values.join(","))
    }
}
