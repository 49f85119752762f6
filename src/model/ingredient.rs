//! Model for an editable ingredient row.
use super::Unit;
use crate::parse_quantity;
use serde::Serialize;
use std::fmt::Display;
use uuid::Uuid;

/// Opaque identity of an ingredient row, stable across edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IngredientId(Uuid);

impl IngredientId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An ingredient as the user typed it.
///
/// The amount is kept as text and only parsed when a scaled amount is needed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ingredient {
    id: IngredientId,
    name: String,
    amount: String,
    unit: Unit,
}

impl Ingredient {
    /// A blank row with a fresh id.
    pub(crate) fn empty(unit: Unit) -> Self {
        Self::new(String::new(), String::new(), unit)
    }

    pub(crate) fn new(name: String, amount: String, unit: Unit) -> Self {
        Self {
            id: IngredientId::generate(),
            name,
            amount,
            unit,
        }
    }

    /// Identity of this row.
    #[must_use]
    pub fn id(&self) -> IngredientId {
        self.id
    }

    /// Ingredient name, free text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount exactly as entered, e.g. `1 1/2`.
    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Unit of the amount.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The entered amount as a number, `0.0` when it can't be read.
    #[must_use]
    pub fn parsed_amount(&self) -> f64 {
        parse_quantity(&self.amount)
    }

    pub(crate) fn apply(&mut self, field: IngredientField) {
        match field {
            IngredientField::Name(name) => self.name = name,
            IngredientField::Amount(amount) => self.amount = amount,
            IngredientField::Unit(unit) => self.unit = unit,
        }
    }
}

/// A new value for one field of an [`Ingredient`].
#[derive(Clone, Debug, PartialEq)]
pub enum IngredientField {
    /// Replace the name.
    Name(String),
    /// Replace the amount text.
    Amount(String),
    /// Replace the unit.
    Unit(Unit),
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn empty_row() {
        let ingredient = Ingredient::empty(Unit::Cup);
        assert_eq!(ingredient.name(), "");
        assert_eq!(ingredient.amount(), "");
        assert_eq!(ingredient.unit(), Unit::Cup);
        assert_approx_eq!(f64, ingredient.parsed_amount(), 0.0);
    }

    #[test]
    fn ids_are_unique() {
        let a = Ingredient::empty(Unit::Tsp);
        let b = Ingredient::empty(Unit::Tsp);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn apply_keeps_id() {
        let mut ingredient = Ingredient::empty(Unit::Tsp);
        let id = ingredient.id();

        ingredient.apply(IngredientField::Name("sugar".to_string()));
        ingredient.apply(IngredientField::Amount("1 1/2".to_string()));
        ingredient.apply(IngredientField::Unit(Unit::Tbsp));

        assert_eq!(ingredient.id(), id);
        assert_eq!(ingredient.name(), "sugar");
        assert_eq!(ingredient.unit(), Unit::Tbsp);
        assert_approx_eq!(f64, ingredient.parsed_amount(), 1.5);
    }
}
