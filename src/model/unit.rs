//! Measurement units an ingredient amount can be given in.
use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// A measurement unit.
///
/// Units are labels only; amounts are never converted between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Unit {
    /// Teaspoon.
    #[default]
    Tsp,
    /// Tablespoon.
    Tbsp,
    /// Cup.
    Cup,
    /// Gram.
    G,
    /// Ounce.
    Oz,
    /// Pinch.
    Pinch,
    /// Dash.
    Dash,
}

impl Unit {
    /// Every unit, in the order a unit picker lists them.
    pub const ALL: [Unit; 7] = [
        Unit::Tsp,
        Unit::Tbsp,
        Unit::Cup,
        Unit::G,
        Unit::Oz,
        Unit::Pinch,
        Unit::Dash,
    ];

    /// The short label used for display and parsing, e.g. `tbsp`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Cup => "cup",
            Unit::G => "g",
            Unit::Oz => "oz",
            Unit::Pinch => "pinch",
            Unit::Dash => "dash",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| Error::UnknownUnit(label.to_string()))
    }
}

impl TryFrom<String> for Unit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
