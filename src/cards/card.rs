use super::error::HandError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card: an immutable `(Rank, Suit)` pair.
///
/// # Parsing
///
/// Cards parse from a rank symbol followed by a suit symbol, such as
/// `"As"` (ace of spades), `"TD"` or `"10d"` (ten of diamonds).
/// Use [`Card::parse`] for several whitespace-separated cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Parses whitespace-separated card notations, failing on the first bad token.
    pub fn parse(s: &str) -> Result<Vec<Self>, HandError> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// The scoring value of a card, 2 through 14.
pub fn card_rank(card: Card) -> u8 {
    u8::from(card.rank())
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// str isomorphism
/// the last character is the suit, everything before it the rank
impl TryFrom<&str> for Card {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(HandError::InvalidCard(format!("{:?} is not rank+suit", s))),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
