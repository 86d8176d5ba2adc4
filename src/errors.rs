//! Errors
//!
//! Custom error types used throughout the `id3tree` crate.
use thiserror::Error;

/// Errors that can occur while loading problems, growing, persisting or applying a tree.
#[derive(Debug, Error, PartialEq)]
pub enum Id3Error {
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model or problem from file.
    #[error("Unable to read from file {0}")]
    UnableToRead(String),
    /// The problem text does not follow the expected layout.
    #[error("Malformed problem on line {line}: {reason}")]
    ParseProblem { line: usize, reason: String },
    /// A feature definition is unusable (empty or duplicated domain, duplicated name).
    #[error("Invalid feature definition: {0}")]
    InvalidFeature(String),
    /// A training example carries no value for the label feature.
    #[error("Example {0} has no value for the label feature.")]
    MissingLabel(usize),
    /// An example carries no value for a splitting feature.
    #[error("Example has no value for feature {0}.")]
    MissingFeatureValue(String),
    /// The label feature is not among the declared features.
    #[error("The label feature {0} is not declared in the problem.")]
    MissingLabelFeature(String),
    /// A feature name that is not part of the problem was referenced.
    #[error("Unknown feature {0}.")]
    UnknownFeature(String),
    /// A value that is not part of its feature's domain was found.
    #[error("The value {value} is not in the domain of feature {feature}.")]
    ValueOutsideDomain { feature: String, value: String },
    /// A persisted tree could not be reconstructed.
    #[error("Malformed decision tree: {0}")]
    MalformedTree(String),
    /// A tree was requested from a classifier that has not been fitted.
    #[error("The classifier has not been fitted yet.")]
    NotFitted,
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
}
