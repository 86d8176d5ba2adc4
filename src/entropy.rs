//! Entropy
//!
//! Label entropy and information gain over subsets of examples.
//! Subsets are plain slices of borrowed examples; filtering always allocates
//! a new vector and never touches the parent.
use crate::data::{Example, Feature};

/// The examples of `data` whose `feature` equals `value`, in their original order.
pub fn select<'a>(data: &[&'a Example], feature: &str, value: &str) -> Vec<&'a Example> {
    data.iter().copied().filter(|e| e.get(feature) == Some(value)).collect()
}

/// Number of examples of `data` whose `feature` equals `value`.
pub fn count(data: &[&Example], feature: &str, value: &str) -> usize {
    data.iter().filter(|e| e.get(feature) == Some(value)).count()
}

/// Entropy of the label distribution of `data`, in bits.
///
/// Empty data has entropy `0.0`, and labels with no examples contribute nothing.
pub fn entropy(data: &[&Example], label: &Feature) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    label
        .values
        .iter()
        .map(|v| count(data, &label.name, v) as f64 / n)
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}

/// Information gain of splitting `data` on `feature`:
/// `entropy(data) - sum_v p_v * entropy(select(data, feature, v))`.
///
/// The weighted child entropy of empty data is `0.0`, so the gain on empty
/// data equals its entropy, which is `0.0`.
pub fn gain(data: &[&Example], feature: &Feature, label: &Feature) -> f64 {
    let mut remainder = 0.0;
    if !data.is_empty() {
        let n = data.len() as f64;
        for v in feature.values.iter() {
            let subset = select(data, &feature.name, v);
            if subset.is_empty() {
                continue;
            }
            remainder += subset.len() as f64 / n * entropy(&subset, label);
        }
    }
    entropy(data, label) - remainder
}
