use std::fmt;

use super::board::Cell;

/// One of the two players' markers. Serialized as `1` / `2`, the encoding
/// used by persisted move logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Piece {
    PlayerOne,
    PlayerTwo,
}

impl Piece {
    pub const ALL: [Piece; 2] = [Piece::PlayerOne, Piece::PlayerTwo];

    /// Get the other player's piece
    pub fn opponent(self) -> Piece {
        match self {
            Piece::PlayerOne => Piece::PlayerTwo,
            Piece::PlayerTwo => Piece::PlayerOne,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::PlayerOne => Cell::PlayerOne,
            Piece::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// Player number (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Piece::PlayerOne => 1,
            Piece::PlayerTwo => 2,
        }
    }

    /// Board symbol for text rendering
    pub fn symbol(self) -> char {
        match self {
            Piece::PlayerOne => 'X',
            Piece::PlayerTwo => 'O',
        }
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> u8 {
        piece.number()
    }
}

impl TryFrom<u8> for Piece {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Piece::PlayerOne),
            2 => Ok(Piece::PlayerTwo),
            other => Err(format!("invalid piece {other} (expected 1 or 2)")),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        for piece in Piece::ALL {
            assert_ne!(piece.opponent(), piece);
            assert_eq!(piece.opponent().opponent(), piece);
        }
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::PlayerOne.to_string(), "Player 1");
        assert_eq!(Piece::PlayerTwo.to_string(), "Player 2");
    }

    #[test]
    fn test_piece_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Piece::PlayerTwo).unwrap(), "2");
        let piece: Piece = serde_json::from_str("1").unwrap();
        assert_eq!(piece, Piece::PlayerOne);
        assert!(serde_json::from_str::<Piece>("3").is_err());
    }
}
