//! Long/short directional flag.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flag indicating whether a position is long or short.
///
/// Long indicates that the owner benefits from exercising; short
/// indicates the obligation side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LongShort {
    /// The position is long.
    Long,
    /// The position is short.
    Short,
}

impl LongShort {
    /// Returns +1 for long, -1 for short.
    #[must_use]
    pub fn sign(&self) -> Decimal {
        match self {
            LongShort::Long => Decimal::ONE,
            LongShort::Short => Decimal::NEGATIVE_ONE,
        }
    }

    /// Checks whether the flag is long.
    #[must_use]
    pub fn is_long(&self) -> bool {
        matches!(self, LongShort::Long)
    }

    /// Checks whether the flag is short.
    #[must_use]
    pub fn is_short(&self) -> bool {
        matches!(self, LongShort::Short)
    }

    /// Returns the opposite flag.
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            LongShort::Long => LongShort::Short,
            LongShort::Short => LongShort::Long,
        }
    }
}

impl fmt::Display for LongShort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LongShort::Long => "Long",
            LongShort::Short => "Short",
        };
        write!(f, "{name}")
    }
}
