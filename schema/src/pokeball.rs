use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Every kind of ball the player can own, in catalog order.
///
/// The discriminant doubles as the index into the ball catalog and as the
/// value compared when two preferences are merged, so variants must never be
/// reordered. The "no ball" sentinel is `Option::<Pokeball>::None`, which
/// orders below every real ball.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum Pokeball {
    Pokeball = 0,
    Greatball = 1,
    Ultraball = 2,
    Masterball = 3,
    Premierball = 4,
    Fastball = 5,
    GSball = 6,
    Loveball = 7,
    Luxuryball = 8,
    Rocketball = 9,
    Sportball = 10,
    Timerball = 11,
}

/// Raw integer used by save data for the "no ball" sentinel.
pub const NO_BALL_RAW: i64 = -1;

/// A raw ball index that does not name any `Pokeball`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBallIndex(pub i64);

impl fmt::Display for InvalidBallIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ball index {} is outside 0..{}",
            self.0,
            Pokeball::COUNT
        )
    }
}

impl std::error::Error for InvalidBallIndex {}

impl Pokeball {
    /// Position of this ball in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a ball by catalog position.
    pub fn from_index(index: usize) -> Option<Pokeball> {
        Pokeball::iter().nth(index)
    }

    pub fn name(self) -> &'static str {
        match self {
            Pokeball::Pokeball => "Poké Ball",
            Pokeball::Greatball => "Great Ball",
            Pokeball::Ultraball => "Ultra Ball",
            Pokeball::Masterball => "Master Ball",
            Pokeball::Premierball => "Premier Ball",
            Pokeball::Fastball => "Fast Ball",
            Pokeball::GSball => "GS Ball",
            Pokeball::Loveball => "Love Ball",
            Pokeball::Luxuryball => "Luxury Ball",
            Pokeball::Rocketball => "Rocket Ball",
            Pokeball::Sportball => "Sport Ball",
            Pokeball::Timerball => "Timer Ball",
        }
    }
}

impl fmt::Display for Pokeball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i64> for Pokeball {
    type Error = InvalidBallIndex;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .ok()
            .and_then(Pokeball::from_index)
            .ok_or(InvalidBallIndex(raw))
    }
}

/// Decode a raw ball value where `-1` means "no ball".
pub fn ball_from_raw(raw: i64) -> Result<Option<Pokeball>, InvalidBallIndex> {
    if raw == NO_BALL_RAW {
        Ok(None)
    } else {
        Pokeball::try_from(raw).map(Some)
    }
}

/// Encode a ball choice as the raw value stored in save data.
pub fn ball_to_raw(ball: Option<Pokeball>) -> i64 {
    ball.map_or(NO_BALL_RAW, |b| b.index() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_iteration_order() {
        for (position, ball) in Pokeball::iter().enumerate() {
            assert_eq!(ball.index(), position);
            assert_eq!(Pokeball::from_index(position), Some(ball));
        }
        assert_eq!(Pokeball::from_index(Pokeball::COUNT), None);
    }

    #[test]
    fn test_raw_conversion_rejects_out_of_range() {
        assert_eq!(Pokeball::try_from(3), Ok(Pokeball::Masterball));
        assert_eq!(Pokeball::try_from(12), Err(InvalidBallIndex(12)));
        assert_eq!(Pokeball::try_from(-1), Err(InvalidBallIndex(-1)));

        assert_eq!(ball_from_raw(-1), Ok(None));
        assert_eq!(ball_from_raw(11), Ok(Some(Pokeball::Timerball)));
        assert_eq!(ball_from_raw(-2), Err(InvalidBallIndex(-2)));
    }

    #[test]
    fn test_no_ball_orders_below_every_ball() {
        assert!(None < Some(Pokeball::Pokeball));
        assert_eq!(
            Some(Pokeball::Greatball).max(Some(Pokeball::Ultraball)),
            Some(Pokeball::Ultraball)
        );
        assert_eq!(ball_to_raw(None), -1);
        assert_eq!(ball_to_raw(Some(Pokeball::Loveball)), 7);
    }
}
