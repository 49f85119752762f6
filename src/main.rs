//! `upscale`: scale a recipe from the command line.
//!
//! ```text
//! upscale --original 4 --desired 6 -i "flour=1 1/2 cup" -i "salt=1/4 tsp"
//! upscale --card pancakes.yaml --desired 8
//! ```
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use ingredient_upscaler::{
    DEFAULT_TEMPLATE, Scaler,
    card::{CardIngredient, RecipeCard},
    config::Config,
    model::Unit,
    render_template_with_config,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Scale recipe ingredients from one portion count to another.
#[derive(Debug, Parser)]
#[command(name = "upscale", version, about)]
struct Args {
    /// YAML recipe card with portions and ingredients.
    #[arg(short, long)]
    card: Option<PathBuf>,

    /// Portions the recipe makes, e.g. `4` or `1 1/2`.
    #[arg(short, long)]
    original: Option<String>,

    /// Portions wanted.
    #[arg(short, long)]
    desired: Option<String>,

    /// Ingredient as `name=amount [unit]`; repeat for more. Replaces the card's list.
    #[arg(short, long = "ingredient", value_name = "NAME=AMOUNT [UNIT]")]
    ingredients: Vec<String>,

    /// Template file used instead of the built-in layout.
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Text shown where an amount can't be scaled.
    #[arg(long)]
    placeholder: Option<String>,

    /// Unit for ingredients given without one.
    #[arg(long, default_value_t = Unit::default(), value_parser = parse_unit)]
    default_unit: Unit,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!(?args, "starting");

    let mut builder = Config::builder();
    builder.default_unit(args.default_unit);
    if let Some(placeholder) = &args.placeholder {
        builder.placeholder(placeholder.as_str());
    }
    let config = builder.build();

    let mut card = match &args.card {
        Some(path) => RecipeCard::from_path(path)
            .map_err(|err| anyhow!(err.format_with_source()))
            .with_context(|| format!("failed to load recipe card {}", path.display()))?,
        None => RecipeCard::default(),
    };
    if let Some(original) = args.original {
        card.original_portions = Some(original);
    }
    if let Some(desired) = args.desired {
        card.desired_portions = Some(desired);
    }
    if !args.ingredients.is_empty() {
        card.ingredients = args
            .ingredients
            .iter()
            .map(String::as_str)
            .map(parse_ingredient_arg)
            .collect::<Result<_>>()?;
    }

    let scaler = Scaler::from_card(&card, &config);
    info!(
        rows = scaler.ingredients().len(),
        multiplier = ?scaler.multiplier(),
        "scaling recipe"
    );

    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let output = render_template_with_config(&scaler, &template, &config)
        .map_err(|err| anyhow!(err.format_with_source()))?;
    println!("{output}");
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` and quiet by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_unit(value: &str) -> Result<Unit, String> {
    value.parse::<Unit>().map_err(|err| err.to_string())
}

/// Split `name=amount [unit]`.
///
/// The unit is the last word of the amount when it names a known unit, so
/// `flour=1 1/2 cup` is one and a half cups while `eggs=2` has no unit.
fn parse_ingredient_arg(arg: &str) -> Result<CardIngredient> {
    let (name, rest) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=AMOUNT [UNIT], got `{arg}`"))?;
    let rest = rest.trim();

    let (amount, unit) = match rest.rsplit_once(char::is_whitespace) {
        Some((amount, last)) => match last.parse::<Unit>() {
            Ok(unit) => (amount.trim_end(), Some(unit)),
            Err(_) => (rest, None),
        },
        None => (rest, None),
    };

    Ok(CardIngredient {
        name: name.trim().to_string(),
        amount: amount.to_string(),
        unit,
    })
}
