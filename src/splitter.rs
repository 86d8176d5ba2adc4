//! Splitter
//!
//! Choosing the feature a node is split on.
use crate::constants::EPSILON;
use crate::data::{Example, Feature};
use crate::entropy::gain;
use crate::trace::{Trace, TraceEvent};

/// The chosen split of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo<'a> {
    /// Feature the node is split on.
    pub feature: &'a Feature,
    pub gain: f64,
    /// Every feature whose gain is within tolerance of the best, `feature` first.
    pub ties: Vec<&'a Feature>,
}

pub trait Splitter {
    /// Pick the split feature among `available`, or `None` when nothing is available.
    fn best_split<'a>(
        &self,
        data: &[&Example],
        available: &[&'a Feature],
        label: &Feature,
        depth: usize,
        trace: &mut Trace,
    ) -> Option<SplitInfo<'a>>;
}

/// Maximum information gain, first feature wins ties.
///
/// A candidate replaces the current best only when its gain is larger by more
/// than `epsilon`; a candidate within `epsilon` of the best joins the tie list.
#[derive(Debug, Clone, Copy)]
pub struct GainSplitter {
    pub epsilon: f64,
}

impl Default for GainSplitter {
    fn default() -> Self {
        GainSplitter::new(EPSILON)
    }
}

impl GainSplitter {
    pub fn new(epsilon: f64) -> Self {
        GainSplitter { epsilon }
    }
}

impl Splitter for GainSplitter {
    fn best_split<'a>(
        &self,
        data: &[&Example],
        available: &[&'a Feature],
        label: &Feature,
        depth: usize,
        trace: &mut Trace,
    ) -> Option<SplitInfo<'a>> {
        let mut best: Option<SplitInfo<'a>> = None;
        for &feature in available.iter() {
            let g = gain(data, feature, label);
            trace.record(TraceEvent::Gain {
                depth,
                feature: feature.name.clone(),
                gain: g,
            });
            match best.as_mut() {
                Some(b) if g > b.gain + self.epsilon => {
                    *b = SplitInfo {
                        feature,
                        gain: g,
                        ties: vec![feature],
                    };
                }
                Some(b) => {
                    if (g - b.gain).abs() < self.epsilon {
                        b.ties.push(feature);
                    }
                }
                None => {
                    best = Some(SplitInfo {
                        feature,
                        gain: g,
                        ties: vec![feature],
                    });
                }
            }
        }
        if let Some(b) = best.as_ref() {
            trace.record(TraceEvent::Best {
                depth,
                gain: b.gain,
                ties: b.ties.iter().map(|f| f.name.clone()).collect(),
            });
        }
        best
    }
}
