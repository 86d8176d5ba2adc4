//! Tree
//!
//! A grown decision tree: fitting, printing and json persistence.
//! Classification lives in [`predict`].
pub mod predict;

use crate::classifier::config::ModelIO;
use crate::constants::INDENT;
use crate::data::{Domains, Example, Feature, Problem};
use crate::errors::Id3Error;
use crate::grower::Grower;
use crate::node::Node;
use crate::splitter::Splitter;
use crate::trace::Trace;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Tree { root }
    }

    /// Grow a tree on every example of `problem`, splitting on all non-label features.
    pub fn fit<T: Splitter>(problem: &Problem, splitter: &T, record_trace: bool) -> (Tree, Trace) {
        let data: Vec<&Example> = problem.examples().iter().collect();
        Tree::fit_examples(&data, &problem.features(), problem.label(), splitter, record_trace)
    }

    /// Grow a tree on `data` with an explicit ordered set of split candidates.
    pub fn fit_examples<T: Splitter>(
        data: &[&Example],
        available: &[&Feature],
        label: &Feature,
        splitter: &T,
        record_trace: bool,
    ) -> (Tree, Trace) {
        let mut grower = Grower::new(splitter, label, record_trace);
        let tree = Tree::new(grower.grow(data, available));
        info!(
            "Grew a tree on {} examples and {} features: {} leaves, depth {}.",
            data.len(),
            available.len(),
            tree.n_leaves(),
            tree.depth()
        );
        (tree, grower.into_trace())
    }

    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Check every internal node against the domain table of a problem.
    pub fn check_domains(&self, domains: &Domains) -> Result<(), Id3Error> {
        self.root.check_domains(domains)
    }
}

/// Loading validates the tree structure, a tree that parses but is malformed
/// is rejected with [`Id3Error::MalformedTree`].
impl ModelIO for Tree {
    fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        let tree = serde_json::from_str::<Tree>(json_str).map_err(|e| Id3Error::MalformedTree(e.to_string()))?;
        tree.root.validate()?;
        Ok(tree)
    }
}

fn write_node(f: &mut fmt::Formatter, node: &Node, indent: &str) -> fmt::Result {
    match node {
        Node::Leaf { .. } => writeln!(f, "{}{}", indent, node.label_str().unwrap_or_default()),
        Node::Internal { feature, branches } => {
            let child_indent = format!("{}{}", indent, INDENT);
            for b in branches.iter() {
                writeln!(f, "{}{}={}", indent, feature, b.value)?;
                write_node(f, &b.node, &child_indent)?;
            }
            Ok(())
        }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_node(f, &self.root, "")
    }
}
