use super::rank::Rank;
use super::ranks::Ranks;

/// A hand's tie-breaking ranks, compared after the [`Ranking`].
///
/// Count depends on the category: none for straights and full houses,
/// one for four of a kind, and the full sorted rank list otherwise.
/// Kickers are only ever compared between equal rankings, so their
/// lengths always agree when it matters.
///
/// [`Ranking`]: super::ranking::Ranking
#[derive(Debug, Default, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Kickers(Vec<u8>);

impl Kickers {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Vec<u8> isomorphism
impl From<Vec<u8>> for Kickers {
    fn from(values: Vec<u8>) -> Self {
        Self(values)
    }
}
impl From<Kickers> for Vec<u8> {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

/// every card kicks
impl From<Ranks> for Kickers {
    fn from(ranks: Ranks) -> Self {
        Self(Vec::from(ranks))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for value in self.0.iter() {
            match Rank::try_from(*value) {
                Ok(rank) => write!(f, "{} ", rank)?,
                Err(_) => write!(f, "? ")?,
            }
        }
        Ok(())
    }
}
