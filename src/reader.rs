//! Reader
//!
//! Loads a [`Problem`] from its whitespace separated text form:
//!
//! ```text
//! 2
//! A 2 Y N
//! B 2 Y N
//! Ans 2 Y N
//! 2
//! Y Y Y
//! N Y N
//! ```
//!
//! The first line is the number of features besides the label, followed by one
//! line per feature (label included) holding its name, domain size and values.
//! Then comes the number of examples and one line per example with a value per
//! feature, in feature order. Example lines may leave out the label value.
use crate::constants::LABEL_FEATURE;
use crate::data::{Domains, Example, Feature, Problem};
use crate::errors::Id3Error;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Non-blank lines with their 1-based line numbers.
struct Lines<R: BufRead> {
    inner: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Lines {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn next_tokens(&mut self) -> Result<Option<(usize, Vec<String>)>, Id3Error> {
        for l in self.inner.by_ref() {
            self.line += 1;
            let l = l.map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
            let tokens: Vec<String> = l.split_whitespace().map(String::from).collect();
            if !tokens.is_empty() {
                return Ok(Some((self.line, tokens)));
            }
        }
        Ok(None)
    }

    fn expect_tokens(&mut self, what: &str) -> Result<(usize, Vec<String>), Id3Error> {
        self.next_tokens()?.ok_or_else(|| Id3Error::ParseProblem {
            line: self.line + 1,
            reason: format!("unexpected end of input, expected {}", what),
        })
    }

    fn expect_count(&mut self, what: &str) -> Result<usize, Id3Error> {
        let (line, tokens) = self.expect_tokens(what)?;
        parse_count(line, &tokens[0], what)
    }
}

fn parse_count(line: usize, token: &str, what: &str) -> Result<usize, Id3Error> {
    token.parse::<usize>().map_err(|_| Id3Error::ParseProblem {
        line,
        reason: format!("expected {}, found {}", what, token),
    })
}

fn parse_feature(line: usize, tokens: &[String]) -> Result<Feature, Id3Error> {
    if tokens.len() < 2 {
        return Err(Id3Error::ParseProblem {
            line,
            reason: "a feature line needs a name and a domain size".to_string(),
        });
    }
    let declared = parse_count(line, &tokens[1], "the domain size")?;
    let values = tokens[2..].to_vec();
    if declared != values.len() {
        return Err(Id3Error::ParseProblem {
            line,
            reason: format!(
                "feature {} declares {} values but lists {}",
                tokens[0],
                declared,
                values.len()
            ),
        });
    }
    Ok(Feature {
        name: tokens[0].clone(),
        values,
    })
}

impl Problem {
    /// Read a problem whose label feature is named `label`.
    pub fn from_reader<R: BufRead>(reader: R, label: &str) -> Result<Problem, Id3Error> {
        let mut lines = Lines::new(reader);

        let n_features = lines.expect_count("the number of features")?;
        let mut domains = Domains::default();
        for _ in 0..=n_features {
            let (line, tokens) = lines.expect_tokens("a feature line")?;
            let feature = parse_feature(line, &tokens)?;
            domains.insert(feature).map_err(|e| Id3Error::ParseProblem {
                line,
                reason: e.to_string(),
            })?;
        }
        if domains.get(label).is_none() {
            return Err(Id3Error::MissingLabelFeature(label.to_string()));
        }

        let n_examples = lines.expect_count("the number of examples")?;
        let mut examples = Vec::with_capacity(n_examples.min(1024));
        while let Some((line, tokens)) = lines.next_tokens()? {
            let features: Vec<&Feature> = if tokens.len() == domains.len() {
                domains.iter().collect()
            } else if tokens.len() + 1 == domains.len() {
                domains.iter().filter(|f| f.name != label).collect()
            } else {
                return Err(Id3Error::ParseProblem {
                    line,
                    reason: format!(
                        "expected {} values (or {} without the label), found {}",
                        domains.len(),
                        domains.len() - 1,
                        tokens.len()
                    ),
                });
            };
            examples.push(
                features
                    .iter()
                    .zip(tokens)
                    .map(|(f, v)| (f.name.clone(), v))
                    .collect::<Example>(),
            );
        }
        if examples.len() != n_examples {
            warn!(
                "The problem declares {} examples but {} were read, using the examples read.",
                n_examples,
                examples.len()
            );
        }
        Problem::new(domains, label, examples)
    }

    /// Read a problem from a file.
    ///
    /// * `path` - Path of the problem file.
    /// * `label` - Name of the label feature.
    pub fn load<P: AsRef<Path>>(path: P, label: &str) -> Result<Problem, Id3Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
        Problem::from_reader(BufReader::new(file), label)
    }
}

/// Parses a problem whose label feature is `Ans`.
impl FromStr for Problem {
    type Err = Id3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Problem::from_reader(s.as_bytes(), LABEL_FEATURE)
    }
}
