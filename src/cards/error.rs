use super::card::Card;

/// Errors raised while building or comparing hands.
///
/// Every variant is structural: the same input fails the same way on retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// A rank or suit symbol outside the 52-card deck.
    InvalidCard(String),
    /// A hand built from anything other than exactly five cards.
    InvalidHandSize(usize),
    /// The same card listed twice in one hand.
    DuplicateCard(Card),
    /// A winner was requested from no hands at all.
    EmptyHandCollection,
}

impl std::fmt::Display for HandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCard(s) => write!(f, "invalid card: {}", s),
            Self::InvalidHandSize(n) => write!(f, "invalid hand size: {} cards, expected 5", n),
            Self::DuplicateCard(c) => write!(f, "duplicate card: {}", c),
            Self::EmptyHandCollection => write!(f, "no hands to compare"),
        }
    }
}

impl std::error::Error for HandError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    #[test]
    fn messages() {
        assert_eq!(
            HandError::InvalidCard("1x".into()).to_string(),
            "invalid card: 1x"
        );
        assert_eq!(
            HandError::InvalidHandSize(4).to_string(),
            "invalid hand size: 4 cards, expected 5"
        );
        assert_eq!(
            HandError::DuplicateCard(Card::from((Rank::Ace, Suit::S))).to_string(),
            "duplicate card: As"
        );
        assert_eq!(HandError::EmptyHandCollection.to_string(), "no hands to compare");
    }
}
