use crate::classifier::config::{Id3Config, ModelIO};
use crate::data::{Domains, Problem};
use crate::errors::Id3Error;
use crate::splitter::GainSplitter;
use crate::trace::Trace;
use crate::tree::Tree;
use log::info;
use serde::{Deserialize, Serialize};

/// ID3 classifier object
///
/// Holds the configuration, the domain table a tree was grown with, and the
/// tree itself once fitted. The trace of the last fit is kept in memory only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id3Classifier {
    pub cfg: Id3Config,
    /// Features, label included, the tree was grown with.
    #[serde(default)]
    pub domains: Domains,
    pub(crate) tree: Option<Tree>,
    #[serde(skip)]
    pub(crate) trace: Trace,
}

impl Id3Classifier {
    pub fn new(cfg: Id3Config) -> Self {
        Id3Classifier {
            cfg,
            ..Default::default()
        }
    }

    /// Grow a tree on all examples of `problem`.
    ///
    /// The problem's label feature must be the configured one, and every
    /// example must carry a label.
    pub fn fit(&mut self, problem: &Problem) -> Result<(), Id3Error> {
        self.cfg.validate()?;
        if problem.label().name != self.cfg.label_feature {
            return Err(Id3Error::InvalidParameter(
                "label_feature".to_string(),
                problem.label().name.clone(),
                self.cfg.label_feature.clone(),
            ));
        }
        if let Some(i) = problem.first_unlabelled() {
            return Err(Id3Error::MissingLabel(i));
        }
        info!(
            "Fitting on {} examples with {} candidate features, label {}.",
            problem.examples().len(),
            problem.features().len(),
            problem.label().name
        );
        let splitter = GainSplitter::new(self.cfg.epsilon);
        let (tree, trace) = Tree::fit(problem, &splitter, self.cfg.record_trace);
        self.tree = Some(tree);
        self.trace = trace;
        self.domains = problem.domains().clone();
        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    pub fn tree(&self) -> Result<&Tree, Id3Error> {
        self.tree.as_ref().ok_or(Id3Error::NotFitted)
    }

    /// Diagnostic trace of the last fit; empty for loaded classifiers.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

/// Loading checks the tree structure and, when the domain table was saved
/// along with it, that it declares the label feature and that the tree matches it.
impl ModelIO for Id3Classifier {
    fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        let model = serde_json::from_str::<Id3Classifier>(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        model.cfg.validate()?;
        if !model.domains.is_empty() && model.domains.get(&model.cfg.label_feature).is_none() {
            return Err(Id3Error::MissingLabelFeature(model.cfg.label_feature.clone()));
        }
        if let Some(tree) = model.tree.as_ref() {
            tree.root.validate()?;
            if !model.domains.is_empty() {
                tree.check_domains(&model.domains)?;
            }
        }
        Ok(model)
    }
}
