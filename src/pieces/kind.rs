//! Piece kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// The closed set of piece kinds.
///
/// The discriminant doubles as the index into the rule dispatch table
/// (see [`crate::pieces::rules`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Jumper,
    Ogre,
}

impl PieceKind {
    /// Every kind, in dispatch-table order.
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Jumper,
        PieceKind::Ogre,
    ];

    /// Position in [`PieceKind::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in layouts and configs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Jumper => "jumper",
            PieceKind::Ogre => "ogre",
        }
    }
}

impl FromStr for PieceKind {
    type Err = EngineError;

    /// Case-insensitive parse. Unknown names are a caller bug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| EngineError::UnknownPieceKind(s.to_string()))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("pawn".parse::<PieceKind>(), Ok(PieceKind::Pawn));
        assert_eq!("Ogre".parse::<PieceKind>(), Ok(PieceKind::Ogre));
        assert_eq!("JUMPER".parse::<PieceKind>(), Ok(PieceKind::Jumper));
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert_eq!(
            "wizard".parse::<PieceKind>(),
            Err(EngineError::UnknownPieceKind("wizard".to_string()))
        );
    }

    #[test]
    fn test_index_matches_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PieceKind::Knight).unwrap();
        assert_eq!(json, "\"knight\"");
        assert!(serde_json::from_str::<PieceKind>("\"dragon\"").is_err());
    }
}
