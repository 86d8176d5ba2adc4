//! Grower
//!
//! Recursive ID3 induction. Each level removes the chosen feature from the
//! available set, so recursion depth never exceeds the number of features.
use crate::data::{Example, Feature};
use crate::entropy::{count, select};
use crate::node::{Branch, Node};
use crate::splitter::Splitter;
use crate::trace::{Trace, TraceEvent};

/// The label shared by every example of `data`, or `None` when they disagree.
///
/// Callers deal with empty data first; it has no common label here.
pub fn is_one_label<'a>(data: &[&'a Example], label: &str) -> Option<&'a str> {
    let (first, rest) = data.split_first()?;
    let common = first.get(label)?;
    rest.iter().all(|e| e.get(label) == Some(common)).then_some(common)
}

/// The most frequent label of `data`. Labels are scanned in domain order and
/// only a strictly larger count replaces the current choice, so earlier
/// domain values win ties.
pub fn max_label<'l>(data: &[&Example], label: &'l Feature) -> Option<&'l str> {
    let mut best: Option<(&'l str, usize)> = None;
    for v in label.values.iter() {
        let c = count(data, &label.name, v);
        if best.map_or(true, |(_, n)| c > n) {
            best = Some((v.as_str(), c));
        }
    }
    best.map(|(v, _)| v)
}

/// Grows a tree for one problem, collecting the diagnostic trace on the way.
pub struct Grower<'a, T: Splitter> {
    splitter: &'a T,
    label: &'a Feature,
    trace: Trace,
}

impl<'a, T: Splitter> Grower<'a, T> {
    /// * `splitter` - Chooses the split feature at each node.
    /// * `label` - The label feature.
    /// * `record_trace` - Keep the diagnostic events, see [`Trace`].
    pub fn new(splitter: &'a T, label: &'a Feature, record_trace: bool) -> Self {
        Grower {
            splitter,
            label,
            trace: Trace::new(record_trace),
        }
    }

    /// Grow the tree for `data` using the features in `available`, in that order.
    pub fn grow(&mut self, data: &[&Example], available: &[&Feature]) -> Node {
        self.grow_node(data, available, 0)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    fn grow_node<'f>(&mut self, data: &[&Example], available: &[&'f Feature], depth: usize) -> Node {
        if data.is_empty() {
            self.trace.record(TraceEvent::EmptyBranch { depth });
            return Node::undetermined();
        }
        if let Some(label) = is_one_label(data, &self.label.name) {
            return Node::leaf(label);
        }
        let split = if available.is_empty() {
            None
        } else {
            self.splitter.best_split(data, available, self.label, depth, &mut self.trace)
        };
        let split = match split {
            Some(s) => s,
            None => {
                let label = max_label(data, self.label).map(String::from);
                self.trace.record(TraceEvent::OutOfFeatures {
                    depth,
                    label: label.clone(),
                });
                return Node::Leaf { label };
            }
        };

        let feature = split.feature;
        let remaining: Vec<&'f Feature> = available.iter().copied().filter(|f| f.name != feature.name).collect();
        let mut branches = Vec::with_capacity(feature.values.len());
        for v in feature.values.iter() {
            let subset = select(data, &feature.name, v);
            branches.push(Branch {
                value: v.clone(),
                node: self.grow_node(&subset, &remaining, depth + 1),
            });
        }
        Node::Internal {
            feature: feature.name.clone(),
            branches,
        }
    }
}
