pub mod plot_config;
pub mod plot_record;

pub use plot_config::*;
pub use plot_record::*;
