use crate::metrics::evaluation::Prediction;

/// Count of (recorded, predicted) label pairs, in first-seen order.
/// Unlabelled predictions are skipped; the no-data prediction is `None`.
pub fn confusion_pairs(predictions: &[Prediction]) -> Vec<((String, Option<String>), usize)> {
    let mut pairs: Vec<((String, Option<String>), usize)> = Vec::new();
    for p in predictions.iter() {
        let Some(actual) = p.actual.as_ref() else {
            continue;
        };
        match pairs
            .iter_mut()
            .find(|((a, pr), _)| a == actual && *pr == p.predicted)
        {
            Some((_, n)) => *n += 1,
            None => pairs.push(((actual.clone(), p.predicted.clone()), 1)),
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(predicted: Option<&str>, actual: Option<&str>) -> Prediction {
        Prediction {
            predicted: predicted.map(String::from),
            actual: actual.map(String::from),
        }
    }

    #[test]
    fn test_confusion_pairs() {
        let preds = vec![
            p(Some("Y"), Some("Y")),
            p(Some("N"), Some("Y")),
            p(Some("Y"), Some("Y")),
            p(None, Some("N")),
            p(Some("Y"), None),
        ];
        let pairs = confusion_pairs(&preds);
        assert_eq!(
            pairs,
            vec![
                (("Y".to_string(), Some("Y".to_string())), 2),
                (("Y".to_string(), Some("N".to_string())), 1),
                (("N".to_string(), None), 1),
            ]
        );
    }
}
