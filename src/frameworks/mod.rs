// Frameworks layer: process bootstrap, configuration files and the console loop.

pub mod config;
pub mod repl;
