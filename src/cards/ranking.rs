use super::rank::Rank;

/// A poker hand's category, along with the ranks that define it.
///
/// This does not include the hand's kicker cards. Variants are declared
/// weakest first so the derived `Ord` compares categories before anything
/// else, and the ranks carried by each variant break ties within it.
/// Rank values are scoring values: 2 through 14, with a wheel straight
/// reporting 5 as its high card.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard,          // 5 kickers
    OnePair(u8),       // 5 kickers
    TwoPair(u8, u8),   // 5 kickers
    ThreeOAK(u8),      // 5 kickers
    Straight(u8),      // 0 kickers
    Flush,             // 5 kickers
    FullHouse(u8, u8), // 0 kickers
    FourOAK(u8),       // 1 kickers
    StraightFlush(u8), // 0 kickers
}

impl Ranking {
    /// Category number, 0 for high card up to 8 for straight flush.
    pub fn category(&self) -> u8 {
        match self {
            Ranking::HighCard => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(..) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush => 5,
            Ranking::FullHouse(..) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }

    /// The ranks that define the category, most significant first.
    pub fn values(&self) -> Vec<u8> {
        match *self {
            Ranking::HighCard | Ranking::Flush => vec![],
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => vec![hi, lo],
            Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => vec![r],
        }
    }

    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => 0,
            Ranking::FourOAK(_) => 1,
            _ => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ranking::HighCard => "HighCard",
            Ranking::OnePair(_) => "OnePair",
            Ranking::TwoPair(..) => "TwoPair",
            Ranking::ThreeOAK(_) => "ThreeOfAKind",
            Ranking::Straight(_) => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse(..) => "FullHouse",
            Ranking::FourOAK(_) => "FourOfAKind",
            Ranking::StraightFlush(_) => "StraightFlush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let faces = self
            .values()
            .into_iter()
            .map(|v| Rank::try_from(v).map_or_else(|_| "?".to_string(), |r| r.to_string()))
            .collect::<String>();
        write!(f, "{:<14}{:<2}", self.name(), faces)
    }
}
