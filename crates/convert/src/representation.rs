//! The closed set of value representations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A textual or numeric encoding of a value.
///
/// Each representation has a stable one-character identifier (`'1'`..`'5'`)
/// used by menu-style front ends, and a lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Ascii,
    Decimal,
    Hex,
    Binary,
    Base64,
}

impl Representation {
    /// All representations, in identifier order.
    pub const ALL: [Representation; 5] = [
        Representation::Ascii,
        Representation::Decimal,
        Representation::Hex,
        Representation::Binary,
        Representation::Base64,
    ];

    /// Stable menu identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use para_convert::Representation;
    ///
    /// assert_eq!(Representation::Hex.id(), '3');
    /// assert_eq!(Representation::from_id('3'), Some(Representation::Hex));
    /// ```
    pub fn id(self) -> char {
        match self {
            Representation::Ascii => '1',
            Representation::Decimal => '2',
            Representation::Hex => '3',
            Representation::Binary => '4',
            Representation::Base64 => '5',
        }
    }

    pub fn from_id(id: char) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Representation::Ascii => "ascii",
            Representation::Decimal => "decimal",
            Representation::Hex => "hex",
            Representation::Binary => "binary",
            Representation::Base64 => "base64",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown representation: {0:?}")]
pub struct UnknownRepresentation(pub String);

impl FromStr for Representation {
    type Err = UnknownRepresentation;

    /// Accepts a name (any case) or a one-character identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(id), None) = (chars.next(), chars.next()) {
            if let Some(repr) = Self::from_id(id) {
                return Ok(repr);
            }
        }
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRepresentation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for repr in Representation::ALL {
            assert_eq!(Representation::from_id(repr.id()), Some(repr));
        }
        assert_eq!(Representation::from_id('0'), None);
        assert_eq!(Representation::from_id('6'), None);
    }

    #[test]
    fn test_ids_are_stable() {
        let ids: String = Representation::ALL.iter().map(|r| r.id()).collect();
        assert_eq!(ids, "12345");
    }

    #[test]
    fn test_parse_name_and_id() {
        assert_eq!("hex".parse::<Representation>(), Ok(Representation::Hex));
        assert_eq!("BASE64".parse::<Representation>(), Ok(Representation::Base64));
        assert_eq!(" Decimal ".parse::<Representation>(), Ok(Representation::Decimal));
        assert_eq!("4".parse::<Representation>(), Ok(Representation::Binary));
        assert_eq!(
            "octal".parse::<Representation>(),
            Err(UnknownRepresentation("octal".to_string()))
        );
        assert!("".parse::<Representation>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Representation::Ascii.to_string(), "ascii");
        assert_eq!(Representation::Base64.to_string(), "base64");
    }
}
