//! Scale recipe ingredients from one portion count to another.
//!
//! Amounts are typed the way cooks write them (`2`, `0.75`, `1/2`, `1 1/2`) and
//! scaled results come back in the same style, snapping to familiar fractions
//! like `1/3` or `3/4` instead of long decimals.
//!
//! The two building blocks are [`parse_quantity`] and [`format_amount`]. A
//! [`Scaler`] holds an editable ingredient list and the portion counts, and
//! [`render_template`] shows it through a [Jinja2][00]-style template.
//!
//! ```
//! use ingredient_upscaler::{format_amount, parse_quantity};
//!
//! let doubled = parse_quantity("3/4") * 2.0;
//! assert_eq!(format_amount(doubled), "1 1/2");
//! ```
//!
//! [00]: https://jinja.palletsprojects.com/en/stable/
use config::Config;
use filters::{amount_filter, quantity_filter};
use minijinja::{Environment, Value, context};

pub mod card;
pub mod config;
mod error;
mod filters;
mod format;
pub mod model;
mod quantity;
mod scaler;

pub use error::Error;
pub use format::format_amount;
pub use quantity::parse_quantity;
pub use scaler::Scaler;

/// Plain-text layout used when no template is given.
///
/// Shows the portions and multiplier, then one line per ingredient with its
/// entered amount and its scaled amount (or the placeholder).
pub const DEFAULT_TEMPLATE: &str = "\
Recipe makes {{ original_portions }}, scaling to {{ desired_portions }} portions
{%- if multiplier_label %} (multiplying by {{ multiplier_label }}x){% endif %}

Ingredients
{%- for ingredient in ingredients %}
- {% if ingredient.name %}{{ ingredient.name }}{% else %}(unnamed){% endif %}: \
{{ ingredient.amount }} {{ ingredient.unit }} -> \
{% if ingredient.scaled_label %}{{ ingredient.scaled_label }} {{ ingredient.unit }}\
{% else %}{{ placeholder }}{% endif %}
{%- endfor %}
";

/// Render a scaler with the default configuration.
///
/// This is equivalent to calling [`render_template_with_config`] with a default [`Config`].
///
/// # Errors
///
/// Returns [`TemplateError`][`Error::TemplateError`] if the template has a syntax error or rendering fails.
pub fn render_template(scaler: &Scaler, template: &str) -> Result<String, Error> {
    render_template_with_config(scaler, template, &Config::default())
}

/// Render a scaler to a String with the provided [`Config`].
///
/// The template sees `original_portions`, `desired_portions`, `multiplier`,
/// `multiplier_label`, `placeholder` and `ingredients`. Each ingredient has
/// `id`, `name`, `amount`, `unit`, `scaled` and `scaled_label`; the last two are
/// undefined when the amount can't be scaled. The `amount` filter formats a
/// number in cooking notation and the `quantity` filter parses text into one.
///
/// # Errors
///
/// Returns [`TemplateError`][`Error::TemplateError`] if the template has a syntax error or rendering fails.
pub fn render_template_with_config(
    scaler: &Scaler,
    template: &str,
    config: &Config,
) -> Result<String, Error> {
    let view = scaler.view();
    let ingredients: Vec<Value> = view.ingredients.into_iter().map(Value::from).collect();

    let template_context = context! {
        original_portions => view.original_portions,
        desired_portions => view.desired_portions,
        multiplier => view.multiplier,
        multiplier_label => view.multiplier_label,
        placeholder => config.placeholder(),
        ingredients => ingredients,
    };
    let template_environment = template_environment(template)?;

    let template: minijinja::Template<'_, '_> = template_environment.get_template("base")?;
    Ok(template.render(template_context)?)
}

/// Build an environment for the given template.
fn template_environment(template: &str) -> Result<Environment<'_>, Error> {
    let mut env = Environment::new();
    env.add_template("base", template)?;
    env.add_filter("amount", amount_filter);
    env.add_filter("quantity", quantity_filter);
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::RecipeCard;
    use crate::model::{IngredientField, Unit};
    use indoc::indoc;
    use std::path::PathBuf;

    fn get_demo_path() -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("demos");
        path
    }

    fn pancakes() -> Scaler {
        let mut scaler = Scaler::new();
        let rows = [
            ("flour", "1 1/2", Unit::Cup),
            ("sugar", "1/4", Unit::Cup),
            ("salt", "1/2", Unit::Tsp),
            ("butter", "2", Unit::Tbsp),
        ];
        let first = scaler.ingredients()[0].id();
        for (index, (name, amount, unit)) in rows.into_iter().enumerate() {
            let id = if index == 0 {
                first
            } else {
                scaler.add_ingredient()
            };
            scaler
                .update_ingredient(id, IngredientField::Name(name.to_string()))
                .unwrap();
            scaler
                .update_ingredient(id, IngredientField::Amount(amount.to_string()))
                .unwrap();
            scaler
                .update_ingredient(id, IngredientField::Unit(unit))
                .unwrap();
        }
        scaler
    }

    #[test]
    fn simple_template() {
        let scaler = pancakes();
        let template: &str = indoc! {"
            # Ingredients (x{{ multiplier_label }})
            {%- for ingredient in ingredients %}
            - {{ ingredient }}
            {%- endfor %}
        "};

        let result = render_template(&scaler, template).unwrap();
        let expected = indoc! {"
            # Ingredients (x2)
            - 3 cup flour
            - 1/2 cup sugar
            - 1 tsp salt
            - 4 tbsp butter"};
        assert_eq!(result, expected);
    }

    #[test]
    fn scaling_down() {
        let mut scaler = pancakes();
        scaler.set_original_portions("4");
        scaler.set_desired_portions("3");
        let template: &str = indoc! {"
            # Scaled ({{ multiplier_label }}x)
            {%- for ingredient in ingredients %}
            - {{ ingredient.name }}: {{ ingredient.scaled_label }}
            {%- endfor %}
        "};

        // 3/16 cup of sugar has no nearby fraction and 3/8 tsp of salt snaps to 1/3
        let result = render_template(&scaler, template).unwrap();
        let expected = indoc! {"
            # Scaled (3/4x)
            - flour: 1 1/8
            - sugar: 0.19
            - salt: 1/3
            - butter: 1 1/2"};
        assert_eq!(result, expected);
    }

    #[test]
    fn default_template() {
        let mut scaler = pancakes();
        scaler.add_ingredient();

        let result = render_template(&scaler, DEFAULT_TEMPLATE).unwrap();
        let expected = indoc! {"
            Recipe makes 1, scaling to 2 portions (multiplying by 2x)

            Ingredients
            - flour: 1 1/2 cup -> 3 cup
            - sugar: 1/4 cup -> 1/2 cup
            - salt: 1/2 tsp -> 1 tsp
            - butter: 2 tbsp -> 4 tbsp
            - (unnamed):  tsp -> —"};
        assert_eq!(result, expected);
    }

    #[test]
    fn default_template_without_multiplier() {
        let mut scaler = pancakes();
        scaler.set_original_portions("0");
        let config = Config::builder().placeholder("n/a").build();

        let result = render_template_with_config(&scaler, DEFAULT_TEMPLATE, &config).unwrap();
        let expected = indoc! {"
            Recipe makes 0, scaling to 2 portions

            Ingredients
            - flour: 1 1/2 cup -> n/a
            - sugar: 1/4 cup -> n/a
            - salt: 1/2 tsp -> n/a
            - butter: 2 tbsp -> n/a"};
        assert_eq!(result, expected);
    }

    #[test]
    fn demo_card() {
        let card = RecipeCard::from_path(get_demo_path().join("pancakes.yaml")).unwrap();
        let scaler = Scaler::from_card(&card, &Config::default());

        let result = render_template(&scaler, DEFAULT_TEMPLATE).unwrap();
        let expected = indoc! {"
            Recipe makes 4, scaling to 6 portions (multiplying by 1 1/2x)

            Ingredients
            - flour: 1 1/2 cup -> 2 1/4 cup
            - sugar: 2 tbsp -> 3 tbsp
            - baking powder: 3 1/2 tsp -> 5 1/4 tsp
            - salt: 1/4 tsp -> 1/3 tsp
            - milk: 1 1/4 cup -> 1 7/8 cup
            - butter: 45 g -> 67 1/2 g
            - vanilla: to taste dash -> —"};
        assert_eq!(result, expected);
    }

    #[test]
    fn filters() {
        let scaler = pancakes();
        let template = "{{ ((ingredients[0].amount | quantity) * multiplier * 1.5) | amount }}";

        let result = render_template(&scaler, template).unwrap();
        assert_eq!(result, "4 1/2");
    }

    #[test]
    fn err_template_syntax() {
        let scaler = Scaler::new();
        let err = render_template(&scaler, "{% for x in ingredients %}").unwrap_err();
        assert!(matches!(err, Error::TemplateError(_)));
    }
}
