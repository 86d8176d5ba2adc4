mod reader;

// Modules
pub mod classifier;
pub mod constants;
pub mod data;
pub mod entropy;
pub mod errors;
pub mod grower;
pub mod metrics;
pub mod node;
pub mod splitter;
pub mod trace;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use classifier::{Id3Classifier, Id3Config, ModelIO};
pub use data::{Domains, Example, Feature, Problem};
pub use errors::Id3Error;
pub use tree::Tree;
