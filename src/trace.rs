//! Trace
//!
//! Diagnostic records emitted while a tree is grown. They are a side channel:
//! recording them, or not, never changes the tree. Every event is also sent
//! to the `log` facade.
use crate::constants::GAIN_PRECISION;
use crate::utils::{items_to_strings, precision_round};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single diagnostic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// Gain of one candidate feature at a split.
    Gain { depth: usize, feature: String, gain: f64 },
    /// Outcome of a split selection: the best gain and every feature within
    /// tolerance of it. The first entry of `ties` is the feature used.
    Best { depth: usize, gain: f64, ties: Vec<String> },
    /// Features ran out before the examples were pure; a majority leaf was made.
    OutOfFeatures { depth: usize, label: Option<String> },
    /// No example reached a branch.
    EmptyBranch { depth: usize },
}

impl Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TraceEvent::Gain { feature, gain, .. } => {
                write!(f, "GAIN:  {} : {:?}", feature, precision_round(*gain, GAIN_PRECISION))
            }
            TraceEvent::Best { gain, ties, .. } => {
                let ties: Vec<&str> = ties.iter().map(|t| t.as_str()).collect();
                write!(
                    f,
                    "BEST: {:?} {}",
                    precision_round(*gain, GAIN_PRECISION),
                    items_to_strings(&ties)
                )
            }
            TraceEvent::OutOfFeatures { .. } => write!(f, "***  out of features ***"),
            TraceEvent::EmptyBranch { .. } => write!(f, "***  no examples for branch ***"),
        }
    }
}

/// Ordered collection of [`TraceEvent`]s for one fit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    enabled: bool,
    events: Vec<TraceEvent>,
}

impl Trace {
    /// * `enabled` - Keep the events. When false they are only logged.
    pub fn new(enabled: bool) -> Self {
        Trace {
            enabled,
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, event: TraceEvent) {
        match &event {
            TraceEvent::OutOfFeatures { depth, label } => {
                warn!("Out of features at depth {} before reaching a pure node, using majority label {:?}.", depth, label)
            }
            TraceEvent::Gain { depth, .. } | TraceEvent::Best { depth, .. } | TraceEvent::EmptyBranch { depth } => {
                debug!("[depth {}] {}", depth, event)
            }
        }
        if self.enabled {
            self.events.push(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Ties reported by every split, in the order the splits were made.
    pub fn ties(&self) -> Vec<&[String]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Best { ties, .. } => Some(ties.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in self.events.iter() {
            writeln!(f, "{}", event)?;
            if let TraceEvent::Best { .. } = event {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
