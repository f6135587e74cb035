use super::error::HandError;
use super::hand::Hand;
use super::strength::Strength;

/// Hands ordered strongest first, each paired with its evaluated strength.
///
/// The sort is stable, so hands of equal strength keep their input order.
/// Each hand is evaluated exactly once.
#[derive(Debug, Clone, Default)]
pub struct Showdown(Vec<(Hand, Strength)>);

impl From<&[Hand]> for Showdown {
    fn from(hands: &[Hand]) -> Self {
        let mut ranked = hands
            .iter()
            .map(|hand| (*hand, Strength::from(hand)))
            .inspect(|(hand, strength)| log::trace!("{} => {}", hand, strength))
            .collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        log::debug!("ranked {} hands", ranked.len());
        Self(ranked)
    }
}

impl Showdown {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, (Hand, Strength)> {
        self.0.iter()
    }
    pub fn hands(&self) -> Vec<Hand> {
        self.0.iter().map(|(hand, _)| *hand).collect()
    }
    /// The single strongest hand; the earliest one in input order on a tie.
    pub fn winner(&self) -> Result<Hand, HandError> {
        self.0
            .first()
            .map(|(hand, _)| *hand)
            .ok_or(HandError::EmptyHandCollection)
    }
    /// Every hand tied with the strongest, in input order.
    pub fn winners(&self) -> Vec<Hand> {
        match self.0.first() {
            None => Vec::new(),
            Some((_, best)) => self
                .0
                .iter()
                .take_while(|(_, strength)| strength == best)
                .map(|(hand, _)| *hand)
                .collect(),
        }
    }
}

impl IntoIterator for Showdown {
    type Item = (Hand, Strength);
    type IntoIter = std::vec::IntoIter<(Hand, Strength)>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Hands sorted strongest first; equal hands keep their input order.
pub fn sort_hands(hands: &[Hand]) -> Vec<Hand> {
    Showdown::from(hands).hands()
}

/// The strongest hand, or `EmptyHandCollection` when there are none.
pub fn winner(hands: &[Hand]) -> Result<Hand, HandError> {
    let winner = Showdown::from(hands).winner()?;
    log::debug!("winner {}", winner);
    Ok(winner)
}

/// All hands that split the top spot.
pub fn winners(hands: &[Hand]) -> Vec<Hand> {
    Showdown::from(hands).winners()
}
