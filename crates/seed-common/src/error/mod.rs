//! Shared error types

mod print_error;

pub use print_error::PrintError;
