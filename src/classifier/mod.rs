// public modules
pub mod config;
pub mod core;
pub mod predict;

// private modules
mod setters;

#[cfg(test)]
mod tests;

pub use self::config::{Id3Config, ModelIO};
pub use self::core::Id3Classifier;
