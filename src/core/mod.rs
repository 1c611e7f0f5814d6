pub mod cli;
pub mod context;
pub mod models;
#[cfg(test)]
mod tests;
pub mod types;
