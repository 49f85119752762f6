//! Recipe cards: a YAML description of a recipe to seed a [`Scaler`][`crate::Scaler`] with.
//!
//! ```yaml
//! original_portions: 4
//! desired_portions: 6
//! ingredients:
//!   - name: flour
//!     amount: 1 1/2
//!     unit: cup
//!   - name: salt
//!     amount: 1/4
//! ```
//!
//! Cards are only ever read. Amounts and portion counts may be written as YAML
//! numbers or as text; either way they end up as text and go through the same
//! parsing as typed input.
use crate::{Error, model::Unit};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::debug;

/// A recipe as read from a card.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeCard {
    /// Portion count the recipe is written for.
    #[serde(default, deserialize_with = "optional_text")]
    pub original_portions: Option<String>,

    /// Portion count to scale to.
    #[serde(default, deserialize_with = "optional_text")]
    pub desired_portions: Option<String>,

    /// Ingredient rows.
    #[serde(default)]
    pub ingredients: Vec<CardIngredient>,
}

/// One ingredient on a card.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardIngredient {
    /// Ingredient name.
    #[serde(default)]
    pub name: String,

    /// Amount, e.g. `1 1/2`.
    #[serde(default, deserialize_with = "text")]
    pub amount: String,

    /// Unit; the configured default when missing.
    #[serde(default)]
    pub unit: Option<Unit>,
}

impl RecipeCard {
    /// Parse a card from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CardParseError`][`Error::CardParseError`] if the YAML is malformed,
    /// has unknown keys, or names an unknown unit.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let card: Self = serde_yaml::from_str(yaml)?;
        debug!(ingredients = card.ingredients.len(), "parsed recipe card");
        Ok(card)
    }

    /// Read and parse a card file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`][`Error::Io`] if the file can't be read, otherwise as
    /// [`from_yaml`][`Self::from_yaml`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading recipe card");
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }
}

/// A scalar written either as text or as a bare YAML number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(u64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => text,
            Scalar::Integer(number) => number.to_string(),
            Scalar::Float(number) => number.to_string(),
        }
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer).map(|value| value.map(String::from))
}
