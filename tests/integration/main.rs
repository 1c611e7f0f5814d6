mod binary;
mod common;
mod config;
mod controller;
mod loader;
