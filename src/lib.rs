pub mod calendar;
pub mod config;
pub mod controller;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod loader;
pub mod logging;
pub mod organizer;
pub mod prompter;
pub mod ui;
