//! Error types for the ingredient-upscaler library.

use crate::model::IngredientId;
use thiserror::Error;

/// Error type for this crate.
///
/// Parsing and formatting amounts never fail; these cover the surrounding plumbing.
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred when generating output from a template.
    #[error("template error")]
    TemplateError(#[from] minijinja::Error),

    /// A recipe card was not valid YAML or had the wrong shape.
    #[error("error parsing recipe card")]
    CardParseError(#[from] serde_yaml::Error),

    /// A recipe card could not be read.
    #[error("error reading recipe card")]
    Io(#[from] std::io::Error),

    /// No ingredient row has the given id.
    #[error("no ingredient with id {0}")]
    UnknownIngredient(IngredientId),

    /// A unit label that isn't one of the supported units.
    #[error("unknown unit `{0}`, expected one of tsp, tbsp, cup, g, oz, pinch, dash")]
    UnknownUnit(String),
}

impl Error {
    /// Format the error with full context including source chain and helpful hints
    ///
    /// Template errors include minijinja's debug information (line numbers and
    /// surrounding source) and a hint for the common kinds of mistakes.
    ///
    /// # Example
    /// ```
    /// use ingredient_upscaler::{Scaler, render_template};
    ///
    /// let scaler = Scaler::new();
    /// let template = "{% for row in ingredients %}{{ row.name }}{% endfor"; // Missing %}
    ///
    /// match render_template(&scaler, template) {
    ///     Ok(result) => println!("{}", result),
    ///     Err(err) => eprintln!("{}", err.format_with_source()),
    /// }
    /// ```
    #[must_use]
    pub fn format_with_source(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();

        if let Error::TemplateError(minijinja_err) = self {
            let _ = write!(output, "{}", minijinja_err.display_debug_info());

            match minijinja_err.kind() {
                minijinja::ErrorKind::SyntaxError => {
                    output.push_str("\n\nHint: This is a syntax error. Check for:");
                    output.push_str("\n  • Missing closing tags ({% endfor %}, {% endif %}, etc.)");
                    output.push_str("\n  • Unclosed strings or brackets");
                }
                minijinja::ErrorKind::UndefinedError => {
                    output.push_str("\n\nHint: A variable or attribute is undefined. Available are:");
                    output.push_str("\n  • original_portions, desired_portions, placeholder");
                    output.push_str("\n  • multiplier, multiplier_label");
                    output.push_str(
                        "\n  • ingredients[].name, .amount, .unit, .scaled, .scaled_label",
                    );
                }
                minijinja::ErrorKind::InvalidOperation => {
                    output.push_str("\n\nHint: Invalid operation. Check that:");
                    output.push_str("\n  • `amount` is applied to numbers");
                    output.push_str("\n  • `quantity` is applied to text");
                }
                _ => {}
            }
        } else {
            let _ = write!(output, "Error: {self:#}");
        }

        // Traverse the error chain
        let mut current_error: &dyn std::error::Error = self;
        while let Some(source) = current_error.source() {
            let _ = write!(output, "\n\nCaused by:\n    {source:#}");
            current_error = source;
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit_lists_choices() {
        let message = Error::UnknownUnit("litre".to_string()).to_string();
        assert!(message.contains("`litre`"));
        assert!(message.contains("pinch"));
    }

    #[test]
    fn card_error_includes_cause() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{").unwrap_err();
        let formatted = Error::from(yaml_err).format_with_source();
        assert!(formatted.starts_with("Error: error parsing recipe card"));
        assert!(formatted.contains("Caused by:"));
    }

    #[test]
    fn template_syntax_error_has_hint() {
        let mut env = minijinja::Environment::new();
        let template_err = env.add_template("bad", "{% for x in y %}").unwrap_err();
        let formatted = Error::from(template_err).format_with_source();
        assert!(formatted.contains("Hint: This is a syntax error"));
    }
}
