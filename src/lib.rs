pub mod classifiers;
pub mod config;
pub mod core;
pub mod data;
pub mod evaluation;
pub mod inference;
pub mod server;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
