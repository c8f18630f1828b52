// Interface adapters: EDSM wire format, HTTP client, import file and console commands.

pub mod clients;
pub mod commands;
pub mod files;
pub mod protocol;
