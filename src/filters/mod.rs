pub mod amount;
pub mod quantity;

pub use amount::amount_filter;
pub use quantity::quantity_filter;
