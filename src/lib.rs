pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::{ClientConfig, ConfigError};
pub use frameworks::repl::{run, run_session};
