use super::card::Card;
use super::error::HandError;

/// Exactly five cards, kept in the order they were given.
///
/// A Hand can only be built through `TryFrom`, which rejects any other
/// card count and repeated cards, so everything downstream may assume
/// five distinct cards. Evaluation never depends on the stored order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand([Card; 5]);

impl Hand {
    pub const SIZE: usize = 5;

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }
    /// True when every card shares the first card's suit.
    pub fn suited(&self) -> bool {
        let suit = self.0[0].suit();
        self.0.iter().all(|c| c.suit() == suit)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [Card; 5] isomorphism, checked for repeats
impl TryFrom<[Card; 5]> for Hand {
    type Error = HandError;
    fn try_from(cards: [Card; 5]) -> Result<Self, Self::Error> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }
        Ok(Self(cards))
    }
}
impl From<Hand> for [Card; 5] {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> conversion, checked for size
impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let n = cards.len();
        <[Card; 5]>::try_from(cards)
            .map_err(|_| HandError::InvalidHandSize(n))
            .and_then(Self::try_from)
    }
}
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.0.to_vec()
    }
}

/// str isomorphism
/// this follows from Vec<Card> conversion
impl TryFrom<&str> for Hand {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    #[test]
    fn keeps_input_order() {
        let hand = Hand::try_from("2H 4H 6H 3H 5H").unwrap();
        let ranks = hand.iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::Two, Rank::Four, Rank::Six, Rank::Three, Rank::Five]
        );
    }

    #[test]
    fn bijective_str() {
        let hand = Hand::try_from("As Kd Qh 2s 6c").unwrap();
        assert_eq!(hand.to_string(), "As Kd Qh 2s 6c");
        assert_eq!(hand, Hand::try_from(hand.to_string().as_str()).unwrap());
    }

    #[test]
    fn too_few_cards() {
        assert_eq!(
            Hand::try_from("As Kd Qh 2s"),
            Err(HandError::InvalidHandSize(4))
        );
    }

    #[test]
    fn too_many_cards() {
        assert_eq!(
            Hand::try_from("As Kd Qh 2s 6c 7c"),
            Err(HandError::InvalidHandSize(6))
        );
        assert_eq!(Hand::try_from(""), Err(HandError::InvalidHandSize(0)));
    }

    #[test]
    fn repeated_card() {
        assert_eq!(
            Hand::try_from("As Kd As 2s 6c"),
            Err(HandError::DuplicateCard(Card::from((Rank::Ace, Suit::S))))
        );
    }

    #[test]
    fn bad_card_wins_over_size() {
        assert!(matches!(
            Hand::try_from("As Kd Zz"),
            Err(HandError::InvalidCard(_))
        ));
    }

    #[test]
    fn suitedness() {
        assert!(Hand::try_from("3H 4H 5H AH 2H").unwrap().suited());
        assert!(!Hand::try_from("3H 4H 5D AD 2S").unwrap().suited());
    }
}
