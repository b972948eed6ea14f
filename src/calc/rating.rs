use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of star slots shown for a rating.
pub const MAX_STARS: u8 = 5;

/// Star rating of a household configuration.
///
/// `Zero` is an explicit zero-star verdict (runtime under one hour);
/// `Unrated` means no rating applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StarRating {
    Five,
    Four,
    Three,
    Two,
    One,
    #[serde(rename = "NONE")]
    Zero,
    Unrated,
}

impl StarRating {
    /// Rates a battery runtime by threshold.
    ///
    /// `>= 48 h` five stars, `>= 24` four, `>= 12` three, `>= 8` two,
    /// `>= 4` one, anything shorter is unrated.
    pub fn from_runtime_hours(hours: f64) -> Self {
        if hours >= 48.0 {
            Self::Five
        } else if hours >= 24.0 {
            Self::Four
        } else if hours >= 12.0 {
            Self::Three
        } else if hours >= 8.0 {
            Self::Two
        } else if hours >= 4.0 {
            Self::One
        } else {
            Self::Unrated
        }
    }

    /// Filled star count, `None` when unrated.
    pub const fn stars(self) -> Option<u8> {
        match self {
            Self::Five => Some(5),
            Self::Four => Some(4),
            Self::Three => Some(3),
            Self::Two => Some(2),
            Self::One => Some(1),
            Self::Zero => Some(0),
            Self::Unrated => None,
        }
    }

    /// Wire name, as used in JSON and CSV output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Five => "FIVE",
            Self::Four => "FOUR",
            Self::Three => "THREE",
            Self::Two => "TWO",
            Self::One => "ONE",
            Self::Zero => "NONE",
            Self::Unrated => "UNRATED",
        }
    }

    /// Whether the display layer should use its highlight colour.
    pub const fn is_highlighted(self) -> bool {
        !matches!(self, Self::Zero | Self::Unrated)
    }

    /// Star glyphs, e.g. `★★★☆☆`; `n/a` when unrated.
    pub fn glyphs(self) -> String {
        match self.stars() {
            Some(filled) => {
                let mut s = "★".repeat(filled.into());
                s.push_str(&"☆".repeat((MAX_STARS - filled).into()));
                s
            }
            None => "n/a".to_string(),
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}
