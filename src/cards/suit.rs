use super::error::HandError;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits never order hands. They only matter for flush detection, where
/// the sole question is whether all five match.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Suit {
    type Error = HandError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Suit::C),
            1 => Ok(Suit::D),
            2 => Ok(Suit::H),
            3 => Ok(Suit::S),
            _ => Err(HandError::InvalidCard(format!("suit value {}", n))),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(HandError::InvalidCard(format!("invalid suit str: {}", s))),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::try_from(u8::from(suit)).unwrap());
        }
    }

    #[test]
    fn parse_any_case() {
        assert_eq!(Suit::try_from("H"), Ok(Suit::H));
        assert_eq!(Suit::try_from("h"), Ok(Suit::H));
        assert_eq!(Suit::try_from("♠"), Ok(Suit::S));
    }

    #[test]
    fn display_letters() {
        let letters = Suit::all().map(|s| s.to_string());
        assert_eq!(letters, ["c", "d", "h", "s"].map(String::from));
        for suit in Suit::all() {
            assert_eq!(Suit::try_from(suit.to_string().as_str()), Ok(suit));
        }
        assert_eq!(Suit::try_from("♦").map(|s| s.to_string()), Ok("d".to_string()));
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(Suit::try_from("x"), Err(HandError::InvalidCard(_))));
        assert!(matches!(Suit::try_from(4u8), Err(HandError::InvalidCard(_))));
    }
}
