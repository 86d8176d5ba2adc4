use crate::constants::NO_DATA_LABEL;
use crate::data::Domains;
use crate::errors::Id3Error;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// A decision tree node.
///
/// Internal nodes keep one [`Branch`] per value of the splitting feature,
/// in the order of that feature's domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A resolved label, or `None` when no training example reached this node.
    Leaf { label: Option<String> },
    Internal { feature: String, branches: Vec<Branch> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub value: String,
    pub node: Node,
}

impl Node {
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Node::Leaf {
            label: Some(label.into()),
        }
    }

    /// Leaf for a branch no training example reached.
    pub fn undetermined() -> Self {
        Node::Leaf { label: None }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child reached when the node's feature has `value`. Always `None` for leaves.
    pub fn child(&self, value: &str) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { branches, .. } => branches.iter().find(|b| b.value == value).map(|b| &b.node),
        }
    }

    /// Label as printed: the no-data leaf reads `None`.
    pub fn label_str(&self) -> Option<&str> {
        match self {
            Node::Leaf { label } => Some(label.as_deref().unwrap_or(NO_DATA_LABEL)),
            Node::Internal { .. } => None,
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { branches, .. } => branches.iter().map(|b| b.node.n_leaves()).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { branches, .. } => 1 + branches.iter().map(|b| b.node.n_nodes()).sum::<usize>(),
        }
    }

    /// Number of internal nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { branches, .. } => 1 + branches.iter().map(|b| b.node.depth()).max().unwrap_or(0),
        }
    }

    /// Structural checks that hold for every grown tree:
    /// internal nodes name a feature, have branches, and no value twice.
    pub fn validate(&self) -> Result<(), Id3Error> {
        match self {
            Node::Leaf { .. } => Ok(()),
            Node::Internal { feature, branches } => {
                if feature.is_empty() {
                    return Err(Id3Error::MalformedTree("internal node without a feature".to_string()));
                }
                if branches.is_empty() {
                    return Err(Id3Error::MalformedTree(format!("node on {} has no branches", feature)));
                }
                let mut seen = HashSet::with_capacity(branches.len());
                for b in branches.iter() {
                    if !seen.insert(b.value.as_str()) {
                        return Err(Id3Error::MalformedTree(format!(
                            "node on {} has two branches for {}",
                            feature, b.value
                        )));
                    }
                    b.node.validate()?;
                }
                Ok(())
            }
        }
    }

    /// Check that every internal node has exactly one branch per domain value
    /// of its feature, in domain order.
    pub fn check_domains(&self, domains: &Domains) -> Result<(), Id3Error> {
        match self {
            Node::Leaf { .. } => Ok(()),
            Node::Internal { feature, branches } => {
                let values = domains.values(feature).ok_or_else(|| Id3Error::UnknownFeature(feature.clone()))?;
                let matches = values.len() == branches.len()
                    && values.iter().zip(branches.iter()).all(|(v, b)| *v == b.value);
                if !matches {
                    return Err(Id3Error::MalformedTree(format!(
                        "branches of the node on {} do not match its domain",
                        feature
                    )));
                }
                branches.iter().try_for_each(|b| b.node.check_domains(domains))
            }
        }
    }
}
