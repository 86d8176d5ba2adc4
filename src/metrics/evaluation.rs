use crate::constants::NO_DATA_LABEL;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Whether a prediction agrees with the label recorded on the example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Equal,
    NotEqual,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Equal => write!(f, "Equal"),
            Verdict::NotEqual => write!(f, "NotEqual"),
        }
    }
}

/// Predicted label of one example, next to the label it was recorded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// `None` when the example ended in a leaf no training example reached.
    pub predicted: Option<String>,
    /// `None` when the example carries no label.
    pub actual: Option<String>,
}

impl Prediction {
    /// `None` for unlabelled examples. A no-data prediction never equals a label.
    pub fn verdict(&self) -> Option<Verdict> {
        let actual = self.actual.as_ref()?;
        if self.predicted.as_ref() == Some(actual) {
            Some(Verdict::Equal)
        } else {
            Some(Verdict::NotEqual)
        }
    }

    pub fn predicted_str(&self) -> &str {
        self.predicted.as_deref().unwrap_or(NO_DATA_LABEL)
    }
}

impl Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.verdict() {
            Some(v) => write!(f, "{} {}", self.predicted_str(), v),
            None => write!(f, "{}", self.predicted_str()),
        }
    }
}

/// Summary of a batch of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub total: usize,
    pub labelled: usize,
    pub equal: usize,
}

impl Evaluation {
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        let labelled = predictions.iter().filter(|p| p.actual.is_some()).count();
        let equal = predictions
            .iter()
            .filter(|p| p.verdict() == Some(Verdict::Equal))
            .count();
        Evaluation {
            total: predictions.len(),
            labelled,
            equal,
        }
    }

    pub fn not_equal(&self) -> usize {
        self.labelled - self.equal
    }

    pub fn accuracy(&self) -> Option<f64> {
        if self.labelled == 0 {
            None
        } else {
            Some(self.equal as f64 / self.labelled as f64)
        }
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.accuracy() {
            Some(a) => write!(
                f,
                "{} examples, {} labelled, {} equal, {} not equal, accuracy {:.4}",
                self.total,
                self.labelled,
                self.equal,
                self.not_equal(),
                a
            ),
            None => write!(f, "{} examples, none labelled", self.total),
        }
    }
}
