#![allow(ambiguous_glob_reexports)]

pub mod initialize;
pub mod update_config;
pub mod generate_plot;
pub mod mint_from_message;
pub mod describe_plot;
pub mod close_plot;

pub use initialize::*;
pub use update_config::*;
pub use generate_plot::*;
pub use mint_from_message::*;
pub use describe_plot::*;
pub use close_plot::*;
