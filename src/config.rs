//! Configuration for scaling and rendering.
use crate::model::Unit;

/// Text shown in place of a scaled amount that can't be computed.
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// Struct for scaler and template configuration.
///
/// Construct via [`ConfigBuilder`] or [`default()`][`Self::default`].
///
/// # Examples
///
/// ```
/// use ingredient_upscaler::{config::Config, model::Unit};
/// let config = Config::builder().placeholder("n/a").default_unit(Unit::Cup).build();
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) placeholder: String,
    pub(crate) default_unit: Unit,
}

impl Default for Config {
    /// Return a default [`Config`] with a dash placeholder and teaspoons as the default unit.
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_unit: Unit::default(),
        }
    }
}

impl Config {
    /// Return a [`ConfigBuilder`] for building a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Text rendered where a scaled amount is not available.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Unit given to newly added ingredient rows.
    #[must_use]
    pub fn default_unit(&self) -> Unit {
        self.default_unit
    }
}

/// Builder for building a [`Config`].
#[derive(Default)]
pub struct ConfigBuilder {
    placeholder: Option<String>,
    default_unit: Option<Unit>,
}

impl ConfigBuilder {
    /// Set the text shown instead of an amount that can't be scaled.
    pub fn placeholder<S: Into<String>>(&mut self, placeholder: S) -> &mut Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the unit new ingredient rows start with.
    pub fn default_unit(&mut self, unit: Unit) -> &mut Self {
        self.default_unit = Some(unit);
        self
    }

    /// Return a new [`Config`] based on the builder's properties.
    pub fn build(&mut self) -> Config {
        let defaults = Config::default();
        Config {
            placeholder: self.placeholder.clone().unwrap_or(defaults.placeholder),
            default_unit: self.default_unit.unwrap_or(defaults.default_unit),
        }
    }
}
