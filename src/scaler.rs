//! The editable recipe: ingredient rows plus the two portion counts.
//!
//! A [`Scaler`] is the single owner of that state. Each field has one setter, and
//! [`Scaler::view`] turns the current state into a [`ScaledView`] for display.

use crate::{
    Error,
    card::RecipeCard,
    config::Config,
    format_amount,
    model::{Ingredient, IngredientField, IngredientId, ScaledIngredient, ScaledView, Unit},
    parse_quantity,
};
use tracing::debug;

const DEFAULT_ORIGINAL_PORTIONS: &str = "1";
const DEFAULT_DESIRED_PORTIONS: &str = "2";

/// Ingredient list and portion counts for one recipe being scaled.
///
/// There is always at least one ingredient row.
///
/// # Examples
///
/// ```
/// use ingredient_upscaler::{Scaler, model::IngredientField};
///
/// let mut scaler = Scaler::new();
/// let id = scaler.ingredients()[0].id();
/// scaler.update_ingredient(id, IngredientField::Amount("1/2".into())).unwrap();
///
/// // Scaling from 1 to 2 portions by default.
/// let view = scaler.view();
/// assert_eq!(view.ingredients[0].scaled_label.as_deref(), Some("1"));
/// ```
#[derive(Clone, Debug)]
pub struct Scaler {
    ingredients: Vec<Ingredient>,
    original_portions: String,
    desired_portions: String,
    default_unit: Unit,
}

impl Default for Scaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scaler {
    /// A scaler with one blank row, going from 1 to 2 portions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Like [`new`][`Self::new`], with new rows using the configured default unit.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self {
            ingredients: vec![Ingredient::empty(config.default_unit)],
            original_portions: DEFAULT_ORIGINAL_PORTIONS.to_string(),
            desired_portions: DEFAULT_DESIRED_PORTIONS.to_string(),
            default_unit: config.default_unit,
        }
    }

    /// Build a scaler holding the portions and rows of a recipe card.
    ///
    /// Rows without a unit get the configured default. A card without
    /// ingredients still yields one blank row.
    #[must_use]
    pub fn from_card(card: &RecipeCard, config: &Config) -> Self {
        let mut ingredients: Vec<Ingredient> = card
            .ingredients
            .iter()
            .map(|row| {
                Ingredient::new(
                    row.name.clone(),
                    row.amount.clone(),
                    row.unit.unwrap_or(config.default_unit),
                )
            })
            .collect();
        if ingredients.is_empty() {
            ingredients.push(Ingredient::empty(config.default_unit));
        }

        Self {
            ingredients,
            original_portions: card
                .original_portions
                .clone()
                .unwrap_or_else(|| DEFAULT_ORIGINAL_PORTIONS.to_string()),
            desired_portions: card
                .desired_portions
                .clone()
                .unwrap_or_else(|| DEFAULT_DESIRED_PORTIONS.to_string()),
            default_unit: config.default_unit,
        }
    }

    /// Ingredient rows in display order.
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Look up a row by id.
    #[must_use]
    pub fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id() == id)
    }

    /// Portion count the recipe was written for, as entered.
    #[must_use]
    pub fn original_portions(&self) -> &str {
        &self.original_portions
    }

    /// Portion count wanted, as entered.
    #[must_use]
    pub fn desired_portions(&self) -> &str {
        &self.desired_portions
    }

    /// Append a blank row and return its id.
    pub fn add_ingredient(&mut self) -> IngredientId {
        let ingredient = Ingredient::empty(self.default_unit);
        let id = ingredient.id();
        self.ingredients.push(ingredient);
        debug!(%id, rows = self.ingredients.len(), "added ingredient");
        id
    }

    /// Remove a row.
    ///
    /// Returns `false` without changing anything when `id` is unknown or names
    /// the only remaining row.
    pub fn remove_ingredient(&mut self, id: IngredientId) -> bool {
        if self.ingredients.len() <= 1 {
            debug!(%id, "not removing last ingredient");
            return false;
        }

        let before = self.ingredients.len();
        self.ingredients.retain(|ingredient| ingredient.id() != id);
        let removed = self.ingredients.len() < before;
        debug!(%id, removed, rows = self.ingredients.len(), "remove ingredient");
        removed
    }

    /// Change one field of a row.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownIngredient`][`Error::UnknownIngredient`] if no row has this id.
    pub fn update_ingredient(
        &mut self,
        id: IngredientId,
        field: IngredientField,
    ) -> Result<(), Error> {
        let ingredient = self
            .ingredients
            .iter_mut()
            .find(|ingredient| ingredient.id() == id)
            .ok_or(Error::UnknownIngredient(id))?;
        debug!(%id, ?field, "update ingredient");
        ingredient.apply(field);
        Ok(())
    }

    /// Set the portion count the recipe was written for.
    pub fn set_original_portions<S: Into<String>>(&mut self, portions: S) {
        self.original_portions = portions.into();
        debug!(portions = %self.original_portions, "set original portions");
    }

    /// Set the portion count wanted.
    pub fn set_desired_portions<S: Into<String>>(&mut self, portions: S) {
        self.desired_portions = portions.into();
        debug!(portions = %self.desired_portions, "set desired portions");
    }

    /// Desired portions divided by original portions.
    ///
    /// `None` when the result is not a finite number above zero, for example when
    /// either count is zero or can't be read.
    #[must_use]
    pub fn multiplier(&self) -> Option<f64> {
        let multiplier =
            parse_quantity(&self.desired_portions) / parse_quantity(&self.original_portions);
        (multiplier.is_finite() && multiplier > 0.0).then_some(multiplier)
    }

    /// The ingredient's amount multiplied by [`multiplier`][`Self::multiplier`].
    ///
    /// `None` when there is no multiplier, the entered amount isn't above zero, or
    /// the product isn't finite.
    #[must_use]
    pub fn scaled_amount(&self, ingredient: &Ingredient) -> Option<f64> {
        let multiplier = self.multiplier()?;
        let amount = ingredient.parsed_amount();
        if amount <= 0.0 {
            return None;
        }
        let scaled = amount * multiplier;
        scaled.is_finite().then_some(scaled)
    }

    /// Snapshot of the current state with every amount scaled and formatted.
    #[must_use]
    pub fn view(&self) -> ScaledView {
        let multiplier = self.multiplier();
        ScaledView {
            original_portions: self.original_portions.clone(),
            desired_portions: self.desired_portions.clone(),
            multiplier,
            multiplier_label: multiplier.map(format_amount),
            ingredients: self
                .ingredients
                .iter()
                .map(|ingredient| {
                    let scaled = self.scaled_amount(ingredient);
                    ScaledIngredient {
                        id: ingredient.id(),
                        name: ingredient.name().to_string(),
                        amount: ingredient.amount().to_string(),
                        unit: ingredient.unit(),
                        scaled,
                        scaled_label: scaled.map(format_amount),
                    }
                })
                .collect(),
        }
    }
}
