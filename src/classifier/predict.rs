//! Prediction Methods
//!
//! Classification and evaluation for a fitted classifier.
use crate::classifier::Id3Classifier;
use crate::data::Example;
use crate::errors::Id3Error;
use crate::metrics::{Evaluation, Prediction};
use log::info;

impl Id3Classifier {
    /// Label predicted for a single example.
    ///
    /// The example is never modified, and classifying it again gives the same result.
    /// `Ok(None)` is returned for examples ending in a leaf no training example reached.
    pub fn classify(&self, example: &Example) -> Result<Option<&str>, Id3Error> {
        self.tree()?.classify(example)
    }

    /// Run `op` inside a dedicated pool when `num_threads` is set, otherwise on the global pool.
    fn install<R, OP>(&self, op: OP) -> Result<R, Id3Error>
    where
        R: Send,
        OP: FnOnce() -> R + Send,
    {
        match self.cfg.num_threads {
            None => Ok(op()),
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| Id3Error::InvalidParameter("num_threads".to_string(), n.to_string(), e.to_string()))?;
                Ok(pool.install(op))
            }
        }
    }

    /// Generate predictions for the given examples.
    ///
    /// # Arguments
    ///
    /// * `examples` - Examples to classify, their label values are ignored.
    /// * `parallel` - If `true`, predictions are computed in parallel using Rayon.
    pub fn predict(&self, examples: &[Example], parallel: bool) -> Result<Vec<Option<String>>, Id3Error> {
        let tree = self.tree()?;
        if parallel {
            self.install(|| tree.predict(examples, true))?
        } else {
            tree.predict(examples, false)
        }
    }

    /// Classify every example and compare with its label value where present.
    ///
    /// Returns the per example predictions, in order, and their summary.
    pub fn evaluate(&self, examples: &[Example], parallel: bool) -> Result<(Vec<Prediction>, Evaluation), Id3Error> {
        let tree = self.tree()?;
        let label = self.cfg.label_feature.as_str();
        let predictions = if parallel {
            self.install(|| tree.evaluate(examples, label, true))??
        } else {
            tree.evaluate(examples, label, false)?
        };
        let evaluation = Evaluation::from_predictions(&predictions);
        info!("Evaluation: {}", evaluation);
        Ok((predictions, evaluation))
    }
}
