pub mod aliases;
pub mod commands;
pub mod entries;
pub mod env;
pub mod state;
