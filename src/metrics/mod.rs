//! Metrics
//!
//! Agreement between predicted and recorded labels.
pub mod classification;
pub mod evaluation;

pub use evaluation::{Evaluation, Prediction, Verdict};
