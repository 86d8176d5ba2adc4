use crate::classifier::Id3Classifier;

impl Id3Classifier {
    // Set methods for parameters

    /// Set the label feature name.
    /// * `label_feature` - Name of the feature holding the label.
    pub fn set_label_feature(mut self, label_feature: &str) -> Self {
        self.cfg.label_feature = label_feature.to_string();
        self
    }

    /// Set the split tolerance.
    /// * `epsilon` - Gains within this distance of the best gain are ties, and the
    ///   first feature reaching the best gain is used.
    pub fn set_epsilon(mut self, epsilon: f64) -> Self {
        self.cfg.epsilon = epsilon;
        self
    }

    /// Set whether the diagnostic trace is kept.
    /// * `record_trace` - Keep the trace of each fit, it is logged either way.
    pub fn set_record_trace(mut self, record_trace: bool) -> Self {
        self.cfg.record_trace = record_trace;
        self
    }

    /// Set the number of threads used by parallel prediction.
    /// * `num_threads` - `None` uses the global rayon pool.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }
}
