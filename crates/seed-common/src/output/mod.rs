//! Terminal output helpers

mod json;

pub use json::{format_json, highlight_json, print_json};
