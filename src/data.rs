//! Data
//!
//! Categorical features, their value domains, and the examples a tree is grown from.
//! A [`Problem`] bundles all three and is the read-only context handed to the
//! entropy engine and the grower.
use crate::errors::Id3Error;
use hashbrown::{HashMap, HashSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A named categorical feature and the ordered list of its legal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub values: Vec<String>,
}

impl Feature {
    pub fn new<S: Into<String>>(name: S, values: &[&str]) -> Self {
        Feature {
            name: name.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Is `value` part of this feature's domain.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// Feature value domain table.
///
/// Holds every feature of a problem, label included, in declaration order.
/// Iteration over features and over each domain is always in that order,
/// which is what makes growing and printing deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Feature>", into = "Vec<Feature>")]
pub struct Domains {
    features: Vec<Feature>,
    index: HashMap<String, usize>,
}

impl Domains {
    pub fn new(features: Vec<Feature>) -> Result<Self, Id3Error> {
        let mut domains = Domains::default();
        for feature in features {
            domains.insert(feature)?;
        }
        Ok(domains)
    }

    /// Add a feature at the end of the table.
    pub fn insert(&mut self, feature: Feature) -> Result<(), Id3Error> {
        if feature.name.is_empty() {
            return Err(Id3Error::InvalidFeature("feature name is empty".to_string()));
        }
        if self.index.contains_key(&feature.name) {
            return Err(Id3Error::InvalidFeature(format!("feature {} is declared twice", feature.name)));
        }
        if feature.values.is_empty() {
            return Err(Id3Error::InvalidFeature(format!("feature {} has an empty domain", feature.name)));
        }
        {
            let mut seen = HashSet::with_capacity(feature.values.len());
            for v in feature.values.iter() {
                if !seen.insert(v.as_str()) {
                    return Err(Id3Error::InvalidFeature(format!(
                        "value {} is listed twice for feature {}",
                        v, feature.name
                    )));
                }
            }
        }
        self.index.insert(feature.name.clone(), self.features.len());
        self.features.push(feature);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.index.get(name).map(|&i| &self.features[i])
    }

    /// Like [`Domains::get`], but an unknown name is an error.
    pub fn feature(&self, name: &str) -> Result<&Feature, Id3Error> {
        self.get(name).ok_or_else(|| Id3Error::UnknownFeature(name.to_string()))
    }

    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|f| f.values.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl PartialEq for Domains {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

impl TryFrom<Vec<Feature>> for Domains {
    type Error = Id3Error;

    fn try_from(features: Vec<Feature>) -> Result<Self, Self::Error> {
        Domains::new(features)
    }
}

impl From<Domains> for Vec<Feature> {
    fn from(domains: Domains) -> Self {
        domains.features
    }
}

/// One example: a value per feature name.
///
/// Examples used for training carry a value for the label feature as well;
/// examples that are only classified may leave it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    values: HashMap<String, String>,
}

impl Example {
    pub fn new() -> Self {
        Example::default()
    }

    /// Builder style insertion, handy for literals.
    pub fn with<F: Into<String>, V: Into<String>>(mut self, feature: F, value: V) -> Self {
        self.insert(feature, value);
        self
    }

    pub fn insert<F: Into<String>, V: Into<String>>(&mut self, feature: F, value: V) {
        self.values.insert(feature.into(), value.into());
    }

    pub fn get(&self, feature: &str) -> Option<&str> {
        self.values.get(feature).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write the example as `feature:value` pairs, in the order of `domains`.
    pub fn display<'a>(&'a self, domains: &'a Domains) -> ExampleDisplay<'a> {
        ExampleDisplay { example: self, domains }
    }
}

impl<F: Into<String>, V: Into<String>> FromIterator<(F, V)> for Example {
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        let mut example = Example::new();
        for (f, v) in iter {
            example.insert(f, v);
        }
        example
    }
}

/// Helper returned by [`Example::display`].
pub struct ExampleDisplay<'a> {
    example: &'a Example,
    domains: &'a Domains,
}

impl Display for ExampleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for feature in self.domains.iter() {
            if let Some(v) = self.example.get(&feature.name) {
                write!(f, "{}:{}   ", feature.name, v)?;
            }
        }
        Ok(())
    }
}

/// A classification problem: the domain table, the label feature and the examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    domains: Domains,
    label: Feature,
    examples: Vec<Example>,
}

impl Problem {
    /// Build a problem, checking every example against the domain table.
    ///
    /// * `domains` - All features, label included.
    /// * `label` - Name of the label feature.
    /// * `examples` - Examples, the label value may be absent.
    pub fn new(domains: Domains, label: &str, examples: Vec<Example>) -> Result<Self, Id3Error> {
        let label = domains
            .get(label)
            .cloned()
            .ok_or_else(|| Id3Error::MissingLabelFeature(label.to_string()))?;
        let problem = Problem {
            domains,
            label,
            examples: Vec::new(),
        };
        for example in examples.iter() {
            problem.check_example(example)?;
        }
        Ok(Problem { examples, ..problem })
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn label(&self) -> &Feature {
        &self.label
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// The features available for splitting: every feature except the label,
    /// in declaration order.
    pub fn features(&self) -> Vec<&Feature> {
        self.domains.iter().filter(|f| f.name != self.label.name).collect()
    }

    /// Check that an example only uses declared features and in-domain values,
    /// and has a value for every non-label feature.
    pub fn check_example(&self, example: &Example) -> Result<(), Id3Error> {
        for (name, value) in example.values.iter() {
            let feature = self.domains.feature(name)?;
            if !feature.contains(value) {
                return Err(Id3Error::ValueOutsideDomain {
                    feature: name.clone(),
                    value: value.clone(),
                });
            }
        }
        for feature in self.features() {
            if example.get(&feature.name).is_none() {
                return Err(Id3Error::MissingFeatureValue(feature.name.clone()));
            }
        }
        Ok(())
    }

    /// Index of the first example without a label value, if any.
    pub fn first_unlabelled(&self) -> Option<usize> {
        self.examples.iter().position(|e| e.get(&self.label.name).is_none())
    }

    /// Split the examples into a training and a holdout problem sharing the same domains.
    ///
    /// * `train_fraction` - Share of examples kept for training, in `[0, 1]`.
    /// * `seed` - Seed of the shuffle, the split is reproducible.
    pub fn train_test_split(&self, train_fraction: f64, seed: u64) -> Result<(Problem, Problem), Id3Error> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(Id3Error::InvalidParameter(
                "train_fraction".to_string(),
                "a value between 0.0 and 1.0".to_string(),
                train_fraction.to_string(),
            ));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut indices: Vec<usize> = (0..self.examples.len()).collect();
        indices.shuffle(&mut rng);
        let n_train = (self.examples.len() as f64 * train_fraction).floor() as usize;

        let pick = |idx: &[usize]| -> Problem {
            Problem {
                domains: self.domains.clone(),
                label: self.label.clone(),
                examples: idx.iter().map(|&i| self.examples[i].clone()).collect(),
            }
        };
        Ok((pick(&indices[..n_train]), pick(&indices[n_train..])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains() -> Domains {
        Domains::new(vec![
            Feature::new("A", &["Y", "N"]),
            Feature::new("B", &["Y", "N"]),
            Feature::new("Ans", &["Y", "N"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_domains_keep_declaration_order() {
        let d = domains();
        let names: Vec<&str> = d.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "Ans"]);
        assert_eq!(d.values("B").unwrap(), &["Y".to_string(), "N".to_string()]);
        assert!(d.get("C").is_none());
        assert_eq!(d.feature("C"), Err(Id3Error::UnknownFeature("C".to_string())));
    }

    #[test]
    fn test_domains_reject_bad_features() {
        let mut d = domains();
        assert!(matches!(d.insert(Feature::new("A", &["x"])), Err(Id3Error::InvalidFeature(_))));
        assert!(matches!(d.insert(Feature::new("C", &[])), Err(Id3Error::InvalidFeature(_))));
        assert!(matches!(
            d.insert(Feature::new("C", &["x", "x"])),
            Err(Id3Error::InvalidFeature(_))
        ));
        assert_eq!(d.len(), 3);
        d.insert(Feature::new("C", &["x", "y", "z"])).unwrap();
        assert_eq!(d.len(), 4);
        assert_eq!(d.values("C").unwrap().len(), 3);
    }

    #[test]
    fn test_domains_serde_rebuilds_index() {
        let d = domains();
        let s = serde_json::to_string(&d).unwrap();
        let back: Domains = serde_json::from_str(&s).unwrap();
        assert_eq!(back, d);
        assert_eq!(back.get("Ans").unwrap().values.len(), 2);
    }

    #[test]
    fn test_problem_features_exclude_label() {
        let p = Problem::new(domains(), "Ans", vec![]).unwrap();
        let names: Vec<&str> = p.features().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(p.label().name, "Ans");
    }

    #[test]
    fn test_problem_missing_label() {
        let r = Problem::new(domains(), "Class", vec![]);
        assert_eq!(r, Err(Id3Error::MissingLabelFeature("Class".to_string())));
    }

    #[test]
    fn test_problem_checks_examples() {
        let bad = Example::new().with("A", "Y").with("B", "maybe").with("Ans", "Y");
        let r = Problem::new(domains(), "Ans", vec![bad]);
        assert!(matches!(r, Err(Id3Error::ValueOutsideDomain { .. })));

        let short = Example::new().with("A", "Y").with("Ans", "Y");
        let r = Problem::new(domains(), "Ans", vec![short]);
        assert_eq!(r, Err(Id3Error::MissingFeatureValue("B".to_string())));

        let unlabelled = Example::new().with("A", "Y").with("B", "N");
        let p = Problem::new(domains(), "Ans", vec![unlabelled]).unwrap();
        assert_eq!(p.first_unlabelled(), Some(0));
    }

    #[test]
    fn test_example_display() {
        let d = domains();
        let e: Example = [("B", "N"), ("A", "Y"), ("Ans", "Y")].into_iter().collect();
        assert_eq!(format!("{}", e.display(&d)), "A:Y   B:N   Ans:Y   ");
    }

    #[test]
    fn test_train_test_split() {
        let examples: Vec<Example> = (0..10)
            .map(|i| {
                let v = if i % 2 == 0 { "Y" } else { "N" };
                Example::new().with("A", v).with("B", "Y").with("Ans", v)
            })
            .collect();
        let p = Problem::new(domains(), "Ans", examples).unwrap();
        let (train, test) = p.train_test_split(0.7, 42).unwrap();
        assert_eq!(train.examples().len(), 7);
        assert_eq!(test.examples().len(), 3);
        let (train2, _) = p.train_test_split(0.7, 42).unwrap();
        assert_eq!(train, train2);
        assert!(p.train_test_split(1.5, 0).is_err());
    }
}
