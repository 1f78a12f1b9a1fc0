//! Text output: bitmap rendering and report tables.

mod report;
mod terminal;

pub use report::{
    critical_radius_table, performance_table, stability_table, write_report, Report,
};
pub use terminal::{TerminalEncoder, TerminalMode};
