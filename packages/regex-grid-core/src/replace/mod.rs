//! Regex replacement engine.

mod engine;
mod pattern;

pub use engine::{
    apply_normalized, apply_normalized_to_copy, apply_region, replace_all, replace_in_cell,
    replace_in_column, replace_in_row, Replacement,
};
pub use pattern::Substitution;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
