use crate::classifier::{Id3Classifier, Id3Config, ModelIO};
use crate::constants::EPSILON;
use crate::data::{Domains, Example, Feature, Problem};
use crate::entropy::{entropy, gain};
use crate::errors::Id3Error;
use crate::metrics::Verdict;
use crate::node::Node;
use crate::trace::TraceEvent;
use crate::utils::precision_round;
use std::env;
use std::fs;

const RESTAURANT_TREE: &str = "\
Pat=None
   No
Pat=Some
   Yes
Pat=Full
   Hun=Yes
      Type=French
         None
      Type=Thai
         Fri=Yes
            Yes
         Fri=No
            No
      Type=Burger
         Yes
      Type=Italian
         No
   Hun=No
      No
";

fn restaurant() -> Problem {
    Problem::load("resources/restaurant.txt", "Ans").unwrap()
}

fn fitted(problem: &Problem) -> Id3Classifier {
    let mut model = Id3Classifier::default();
    model.fit(problem).unwrap();
    model
}

fn temp_path(name: &str) -> std::path::PathBuf {
    env::temp_dir().join(format!("id3tree_{}_{}.json", name, std::process::id()))
}

#[test]
fn test_restaurant_tree() {
    let problem = restaurant();
    let model = fitted(&problem);
    let tree = model.tree().unwrap();
    assert_eq!(format!("{}", tree), RESTAURANT_TREE);
    assert_eq!(tree.n_leaves(), 8);
    assert_eq!(tree.n_nodes(), 12);
    assert_eq!(tree.depth(), 4);
    assert!(tree.check_domains(problem.domains()).is_ok());
}

#[test]
fn test_restaurant_root_gains() {
    let problem = restaurant();
    let model = fitted(&problem);
    let root_gains: Vec<(&str, f64)> = model
        .trace()
        .events()
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Gain { depth: 0, feature, gain } => Some((feature.as_str(), *gain)),
            _ => None,
        })
        .collect();
    assert_eq!(root_gains.len(), 10);
    let pat = root_gains.iter().find(|(f, _)| *f == "Pat").unwrap().1;
    let ty = root_gains.iter().find(|(f, _)| *f == "Type").unwrap().1;
    assert_eq!(precision_round(pat, 4), 0.5409);
    assert!(ty.abs() < 1e-9);
    assert_eq!(model.trace().ties()[0], &["Pat".to_string()][..]);
    // Under Pat=Full five features share the best gain, the first one is used.
    let ties = model.trace().ties();
    assert_eq!(ties[1][0], "Hun");
    assert_eq!(ties[1].len(), 5);
}

#[test]
fn test_restaurant_training_accuracy() {
    let problem = restaurant();
    let model = fitted(&problem);
    let (predictions, evaluation) = model.evaluate(problem.examples(), false).unwrap();
    assert!(predictions.iter().all(|p| p.verdict() == Some(Verdict::Equal)));
    assert_eq!(evaluation.total, 12);
    assert_eq!(evaluation.labelled, 12);
    assert_eq!(evaluation.accuracy(), Some(1.0));
}

#[test]
fn test_gain_never_negative_and_entropy_bounded() {
    let problem = restaurant();
    let data: Vec<&Example> = problem.examples().iter().collect();
    let label = problem.label();
    let h = entropy(&data, label);
    assert!(h >= 0.0 && h <= (label.values.len() as f64).log2() + EPSILON);
    for f in problem.features() {
        assert!(gain(&data, f, label) >= -EPSILON, "negative gain for {}", f.name);
        for v in f.values.iter() {
            let subset = crate::entropy::select(&data, &f.name, v);
            let h = entropy(&subset, label);
            assert!(h >= 0.0 && h <= 1.0 + EPSILON);
        }
    }
}

#[test]
fn test_fit_is_deterministic() {
    let problem = restaurant();
    let first = fitted(&problem);
    let second = fitted(&problem);
    assert_eq!(first.tree().unwrap(), second.tree().unwrap());
    assert_eq!(first.trace(), second.trace());
    assert_eq!(format!("{}", first.trace()), format!("{}", second.trace()));
}

#[test]
fn test_and_or_first_feature_wins() {
    let problem = Problem::load("resources/and_or.txt", "Ans").unwrap();
    let model = fitted(&problem);
    let tree = model.tree().unwrap();
    assert_eq!(format!("{}", tree), "A=Y\n   Y\nA=N\n   N\n");
    assert_eq!(
        model.trace().events()[..3],
        [
            TraceEvent::Gain {
                depth: 0,
                feature: "A".to_string(),
                gain: 1.0
            },
            TraceEvent::Gain {
                depth: 0,
                feature: "B".to_string(),
                gain: 0.0
            },
            TraceEvent::Best {
                depth: 0,
                gain: 1.0,
                ties: vec!["A".to_string()]
            },
        ]
    );
}

#[test]
fn test_tie_break_keeps_declaration_order() {
    // B and C both predict the label perfectly, A carries nothing.
    let domains = Domains::new(vec![
        Feature::new("A", &["x", "y"]),
        Feature::new("C", &["Y", "N"]),
        Feature::new("B", &["Y", "N"]),
        Feature::new("Ans", &["Y", "N"]),
    ])
    .unwrap();
    let examples = vec![
        Example::new().with("A", "x").with("C", "Y").with("B", "Y").with("Ans", "Y"),
        Example::new().with("A", "x").with("C", "N").with("B", "N").with("Ans", "N"),
        Example::new().with("A", "y").with("C", "Y").with("B", "Y").with("Ans", "Y"),
        Example::new().with("A", "y").with("C", "N").with("B", "N").with("Ans", "N"),
    ];
    let problem = Problem::new(domains, "Ans", examples).unwrap();
    let model = fitted(&problem);
    match &model.tree().unwrap().root {
        Node::Internal { feature, .. } => assert_eq!(feature, "C"),
        Node::Leaf { .. } => panic!("expected a split"),
    }
    assert_eq!(model.trace().ties()[0], &["C".to_string(), "B".to_string()][..]);
}

#[test]
fn test_out_of_features_uses_majority() {
    let domains = Domains::new(vec![Feature::new("A", &["Y", "N"]), Feature::new("Ans", &["Y", "N", "M"])]).unwrap();
    let examples = vec![
        Example::new().with("A", "Y").with("Ans", "N"),
        Example::new().with("A", "Y").with("Ans", "M"),
        Example::new().with("A", "Y").with("Ans", "M"),
        Example::new().with("A", "N").with("Ans", "Y"),
    ];
    let problem = Problem::new(domains, "Ans", examples).unwrap();
    let model = fitted(&problem);
    assert_eq!(format!("{}", model.tree().unwrap()), "A=Y\n   M\nA=N\n   Y\n");
    assert!(model
        .trace()
        .events()
        .iter()
        .any(|e| matches!(e, TraceEvent::OutOfFeatures { depth: 1, label: Some(l) } if l == "M")));
}

#[test]
fn test_round_trip_gives_same_predictions() {
    let problem = restaurant();
    let model = fitted(&problem);
    let path = temp_path("round_trip");
    model.save_model(&path).unwrap();
    let loaded = Id3Classifier::load_model(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.tree().unwrap(), model.tree().unwrap());
    assert_eq!(loaded.domains, model.domains);
    assert_eq!(loaded.cfg, model.cfg);
    assert!(loaded.trace().is_empty());
    let expected = model.predict(problem.examples(), false).unwrap();
    assert_eq!(loaded.predict(problem.examples(), false).unwrap(), expected);
    assert_eq!(loaded.predict(problem.examples(), true).unwrap(), expected);
}

#[test]
fn test_load_rejects_tree_outside_domains() {
    let problem = restaurant();
    let mut model = fitted(&problem);
    model.domains = Domains::new(vec![Feature::new("Pat", &["None", "Some"]), Feature::new("Ans", &["Yes", "No"])]).unwrap();
    let json = model.json_dump().unwrap();
    assert!(matches!(Id3Classifier::from_json(&json), Err(Id3Error::MalformedTree(_))));
    assert!(matches!(Id3Classifier::from_json("{\"cfg\": 3}"), Err(Id3Error::UnableToRead(_))));
    assert!(matches!(
        Id3Classifier::load_model(temp_path("does_not_exist")),
        Err(Id3Error::UnableToRead(_))
    ));
}

#[test]
fn test_fit_errors() {
    let problem = restaurant();
    assert!(matches!(Id3Classifier::default().classify(&problem.examples()[0]), Err(Id3Error::NotFitted)));

    let mut model = Id3Classifier::default().set_label_feature("Class");
    assert!(matches!(model.fit(&problem), Err(Id3Error::InvalidParameter(..))));

    let mut model = Id3Classifier::default().set_epsilon(-1.0);
    assert!(matches!(model.fit(&problem), Err(Id3Error::InvalidParameter(..))));

    let unlabelled: Problem = "1\nA 2 Y N\nAns 2 Y N\n2\nY Y\nN\n".parse().unwrap();
    let mut model = Id3Classifier::default();
    assert_eq!(model.fit(&unlabelled), Err(Id3Error::MissingLabel(1)));
    assert!(!model.is_fitted());
}

#[test]
fn test_setters_and_thread_pool() {
    let problem = restaurant();
    let mut model = Id3Classifier::new(Id3Config::default())
        .set_record_trace(false)
        .set_num_threads(Some(2))
        .set_epsilon(1e-8);
    model.fit(&problem).unwrap();
    assert!(model.trace().is_empty());
    assert_eq!(format!("{}", model.tree().unwrap()), RESTAURANT_TREE);
    let (predictions, evaluation) = model.evaluate(problem.examples(), true).unwrap();
    assert_eq!(predictions.len(), 12);
    assert_eq!(evaluation.equal, 12);
}

#[test]
fn test_holdout_evaluation() {
    let problem = restaurant();
    let (train, test) = problem.train_test_split(0.75, 42).unwrap();
    assert_eq!(train.examples().len(), 9);
    assert_eq!(test.examples().len(), 3);
    let model = fitted(&train);
    let (predictions, evaluation) = model.evaluate(test.examples(), false).unwrap();
    assert_eq!(predictions.len(), 3);
    assert_eq!(evaluation.labelled, 3);
    assert_eq!(evaluation.equal + evaluation.not_equal(), 3);
}

#[test]
fn test_load_rejects_unknown_label_feature() {
    let problem = restaurant();
    let mut model = fitted(&problem);
    model.cfg.label_feature = "Class".to_string();
    let json = model.json_dump().unwrap();
    assert_eq!(
        Id3Classifier::from_json(&json).unwrap_err(),
        Id3Error::MissingLabelFeature("Class".to_string())
    );
}

#[test]
fn test_serial_and_pooled_predictions_agree() {
    let problem = restaurant();
    let mut model = Id3Classifier::default().set_num_threads(Some(3));
    model.fit(&problem).unwrap();
    let serial = model.predict(problem.examples(), false).unwrap();
    let pooled = model.predict(problem.examples(), true).unwrap();
    assert_eq!(serial, pooled);
    let (serial, _) = model.evaluate(problem.examples(), false).unwrap();
    let (pooled, evaluation) = model.evaluate(problem.examples(), true).unwrap();
    assert_eq!(serial, pooled);
    assert_eq!(evaluation.accuracy(), Some(1.0));
}
