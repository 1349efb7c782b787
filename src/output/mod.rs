//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_jump_result, print_lookup_result, print_neighbors_result,
    print_search_result, print_space_summary,
};
