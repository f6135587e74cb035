use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use super::ranks::Ranks;
use super::strength::Strength;

/// A lazy evaluator for a hand's strength.
///
/// Holds the normalized ranks alongside the hand (which is still needed
/// for suits) and tries one detector per category, strongest first. The
/// first detector to match decides the hand; weaker detectors would also
/// match some stronger shapes (a full house contains three of a kind), so
/// the order of the chain is part of the result.
pub struct Evaluator {
    hand: Hand,
    ranks: Ranks,
}

impl From<&Hand> for Evaluator {
    fn from(hand: &Hand) -> Self {
        Self {
            hand: *hand,
            ranks: Ranks::from(hand),
        }
    }
}

impl Evaluator {
    pub fn find_strength(&self) -> Strength {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    ///

    fn find_straight_flush(&self) -> Option<Strength> {
        self.find_rank_of_straight()
            .filter(|_| self.hand.suited())
            .map(|high| self.without_kickers(Ranking::StraightFlush(high)))
    }
    fn find_4_oak(&self) -> Option<Strength> {
        let quads = match self.ranks.values() {
            [hi, lo, _, _, x] if lo == x => Some((lo, hi)),
            [hi, _, _, x, lo] if hi == x => Some((hi, lo)),
            _ => None,
        };
        quads.map(|(quad, kick)| Strength::from((Ranking::FourOAK(quad), Kickers::from(vec![kick]))))
    }
    fn find_3_oak_2_oak(&self) -> Option<Strength> {
        let boat = match self.ranks.values() {
            [hi, _, x, lo, y] if hi == x && lo == y => Some((hi, lo)),
            [hi, x, lo, _, y] if hi == x && lo == y => Some((lo, hi)),
            _ => None,
        };
        boat.map(|(triple, pair)| self.without_kickers(Ranking::FullHouse(triple, pair)))
    }
    fn find_flush(&self) -> Option<Strength> {
        Some(Ranking::Flush)
            .filter(|_| self.hand.suited())
            .map(|ranking| self.with_kickers(ranking))
    }
    fn find_straight(&self) -> Option<Strength> {
        self.find_rank_of_straight()
            .map(|high| self.without_kickers(Ranking::Straight(high)))
    }
    fn find_3_oak(&self) -> Option<Strength> {
        self.ranks
            .values()
            .windows(3)
            .find(|w| w[0] == w[2])
            .map(|w| self.with_kickers(Ranking::ThreeOAK(w[0])))
    }
    fn find_2_oak_2_oak(&self) -> Option<Strength> {
        let pairs = match self.ranks.values() {
            [a, b, c, d, _] if a == b && c == d => Some((a, c)),
            [a, b, _, c, d] if a == b && c == d => Some((a, c)),
            [_, a, b, c, d] if a == b && c == d => Some((a, c)),
            _ => None,
        };
        pairs.map(|(hi, lo)| self.with_kickers(Ranking::TwoPair(hi, lo)))
    }
    fn find_2_oak(&self) -> Option<Strength> {
        Some(self.ranks)
            .filter(|ranks| ranks.distinct() == 4)
            .and_then(|ranks| ranks.values().windows(2).find(|w| w[0] == w[1]).map(|w| w[0]))
            .map(|pair| self.with_kickers(Ranking::OnePair(pair)))
    }
    fn find_1_oak(&self) -> Strength {
        self.with_kickers(Ranking::HighCard)
    }

    fn find_rank_of_straight(&self) -> Option<u8> {
        self.ranks
            .values()
            .windows(2)
            .all(|w| w[0] == w[1] + 1)
            .then(|| self.ranks.high())
    }

    fn with_kickers(&self, ranking: Ranking) -> Strength {
        Strength::from((ranking, Kickers::from(self.ranks)))
    }
    fn without_kickers(&self, ranking: Ranking) -> Strength {
        Strength::from((ranking, Kickers::default()))
    }
}
