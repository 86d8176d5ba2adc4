use super::Tree;
use crate::data::Example;
use crate::errors::Id3Error;
use crate::metrics::Prediction;
use crate::node::Node;
use rayon::prelude::*;

impl Tree {
    /// Walk the tree for one example and return the label of the leaf it ends in.
    ///
    /// `Ok(None)` means the example reached a leaf no training example reached.
    /// The example is only read.
    pub fn classify(&self, example: &Example) -> Result<Option<&str>, Id3Error> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return Ok(label.as_deref()),
                Node::Internal { feature, .. } => {
                    let value = example
                        .get(feature)
                        .ok_or_else(|| Id3Error::MissingFeatureValue(feature.clone()))?;
                    node = node.child(value).ok_or_else(|| Id3Error::ValueOutsideDomain {
                        feature: feature.clone(),
                        value: value.to_string(),
                    })?;
                }
            }
        }
    }

    fn predict_single_threaded(&self, examples: &[Example]) -> Result<Vec<Option<String>>, Id3Error> {
        examples
            .iter()
            .map(|e| self.classify(e).map(|l| l.map(String::from)))
            .collect()
    }

    fn predict_parallel(&self, examples: &[Example]) -> Result<Vec<Option<String>>, Id3Error> {
        examples
            .par_iter()
            .map(|e| self.classify(e).map(|l| l.map(String::from)))
            .collect()
    }

    /// Predicted label of every example, in order.
    pub fn predict(&self, examples: &[Example], parallel: bool) -> Result<Vec<Option<String>>, Id3Error> {
        if parallel {
            self.predict_parallel(examples)
        } else {
            self.predict_single_threaded(examples)
        }
    }

    /// Predict every example and pair it with its recorded value of `label`.
    pub fn evaluate(&self, examples: &[Example], label: &str, parallel: bool) -> Result<Vec<Prediction>, Id3Error> {
        let predicted = self.predict(examples, parallel)?;
        Ok(predicted
            .into_iter()
            .zip(examples.iter())
            .map(|(predicted, e)| Prediction {
                predicted,
                actual: e.get(label).map(String::from),
            })
            .collect())
    }
}
