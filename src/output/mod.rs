//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_comparison, print_experiment_stats, print_search_summary,
    print_solve_result,
};
