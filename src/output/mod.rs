//! Rendering and export of ranking results

pub mod export;
pub mod formatter;

pub use export::ranked_results_to_csv;
pub use formatter::ConsoleFormatter;
