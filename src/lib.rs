pub mod catalog;
pub mod commands;
pub mod configuration;
pub mod display;
pub mod errors;
pub mod filesystem;
pub mod interactive;
pub mod logging;
pub mod model;
pub mod round;
pub mod workspace;
