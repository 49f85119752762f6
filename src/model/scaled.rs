//! Read-only snapshot of a scaler, ready for display.
use super::{IngredientId, Unit};
use serde::Serialize;
use std::fmt::{self, Display};

/// Everything a view needs to show the scaled recipe.
#[derive(Clone, Debug, Serialize)]
pub struct ScaledView {
    /// Portion count the recipe was written for, as entered.
    pub original_portions: String,
    /// Portion count wanted, as entered.
    pub desired_portions: String,
    /// The multiplier when it is usable.
    pub multiplier: Option<f64>,
    /// The multiplier in cooking notation, e.g. `1 1/2`.
    pub multiplier_label: Option<String>,
    /// One entry per ingredient row, in row order.
    pub ingredients: Vec<ScaledIngredient>,
}

/// One ingredient row with its scaled amount.
#[derive(Clone, Debug, Serialize)]
pub struct ScaledIngredient {
    /// Row identity.
    pub id: IngredientId,
    /// Ingredient name.
    pub name: String,
    /// Amount as entered.
    pub amount: String,
    /// Unit of both the entered and the scaled amount.
    pub unit: Unit,
    /// Scaled amount, `None` when there is nothing sensible to show.
    pub scaled: Option<f64>,
    /// Scaled amount in cooking notation.
    pub scaled_label: Option<String>,
}

impl Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scaled_label {
            Some(label) if self.name.is_empty() => write!(f, "{label} {}", self.unit),
            Some(label) => write!(f, "{label} {} {}", self.unit, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl minijinja::value::Object for ScaledIngredient {
    fn repr(self: &std::sync::Arc<Self>) -> minijinja::value::ObjectRepr {
        minijinja::value::ObjectRepr::Plain
    }

    fn get_value(self: &std::sync::Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
        match key.as_str()? {
            "id" => Some(minijinja::Value::from(self.id.to_string())),
            "name" => Some(minijinja::Value::from(&self.name)),
            "amount" => Some(minijinja::Value::from(&self.amount)),
            "unit" => Some(minijinja::Value::from(self.unit.label())),
            "scaled" => self.scaled.map(minijinja::Value::from),
            "scaled_label" => self.scaled_label.as_ref().map(minijinja::Value::from),
            _ => None,
        }
    }

    fn render(self: &std::sync::Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self: Sized + 'static,
    {
        self.fmt(f)
    }
}

impl From<ScaledIngredient> for minijinja::Value {
    fn from(value: ScaledIngredient) -> Self {
        Self::from_object(value)
    }
}
