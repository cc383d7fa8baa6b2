//! CLI layer - Command-line interface and interactive menu

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::Cli;
pub use menu::{Menu, MenuChoice};
pub use output::{format_delta_report, format_entry_details, format_entry_table, format_tag_list};
