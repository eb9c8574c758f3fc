use crate::core::instances::Instance;
use crate::evaluation::{Measurement, PerformanceEvaluator};
use crate::utils::math::argmax;

/// Holdout classifier evaluator backed by a weighted confusion matrix.
///
/// Reports:
/// - `accuracy`;
/// - Cohen's `kappa` and `kappa_m` (against always predicting the majority
///   true class);
/// - macro `precision`, `recall` and `f1`;
/// - `precision_class_{c}` / `recall_class_{c}` for every class.
///
/// A per-class metric whose denominator is zero is `NaN`.
pub struct BasicClassificationEvaluator {
    /// `confusion[truth][predicted]`, summed instance weights.
    confusion: Vec<Vec<f64>>,
    num_classes: usize,
    total_weight: f64,
}

impl BasicClassificationEvaluator {
    pub fn new(num_classes: usize) -> Self {
        Self {
            confusion: vec![vec![0.0; num_classes]; num_classes],
            num_classes,
            total_weight: 0.0,
        }
    }

    fn grow_to(&mut self, k: usize) {
        if k <= self.num_classes {
            return;
        }
        for row in &mut self.confusion {
            row.resize(k, 0.0);
        }
        self.confusion.resize_with(k, || vec![0.0; k]);
        self.num_classes = k;
    }

    fn true_weight(&self, c: usize) -> f64 {
        self.confusion[c].iter().sum()
    }

    fn predicted_weight(&self, c: usize) -> f64 {
        self.confusion.iter().map(|row| row[c]).sum()
    }

    fn precision(&self, c: usize) -> f64 {
        ratio(self.confusion[c][c], self.predicted_weight(c))
    }

    fn recall(&self, c: usize) -> f64 {
        ratio(self.confusion[c][c], self.true_weight(c))
    }
}

fn ratio(num: f64, denom: f64) -> f64 {
    if denom > 0.0 { num / denom } else { f64::NAN }
}

fn kappa_against(p_o: f64, baseline: f64) -> f64 {
    let d = 1.0 - baseline;
    if d.abs() > f64::EPSILON {
        (p_o - baseline) / d
    } else {
        f64::NAN
    }
}

fn finite_mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n > 0 { sum / n as f64 } else { f64::NAN }
}

impl PerformanceEvaluator for BasicClassificationEvaluator {
    fn add_result(&mut self, example: &dyn Instance, class_votes: &[f64]) {
        let Some(yf) = example.class_value() else {
            return;
        };
        if !yf.is_finite() || yf < 0.0 {
            return;
        }
        let y = yf as usize;
        let Some(yhat) = argmax(class_votes) else {
            return;
        };
        let w = example.weight();
        if w <= 0.0 {
            return;
        }

        self.grow_to(class_votes.len().max(y + 1));
        self.confusion[y][yhat] += w;
        self.total_weight += w;
    }

    fn performance(&self) -> Vec<Measurement> {
        let k = self.num_classes;
        let correct: f64 = (0..k).map(|c| self.confusion[c][c]).sum();
        let p_o = ratio(correct, self.total_weight);
        let mut m = vec![Measurement::new("accuracy", p_o)];

        if self.total_weight <= 0.0 {
            m.extend([
                Measurement::new("kappa", 0.0),
                Measurement::new("kappa_m", 0.0),
            ]);
            return m;
        }

        let p_e: f64 = (0..k)
            .map(|c| {
                self.true_weight(c) / self.total_weight * self.predicted_weight(c)
                    / self.total_weight
            })
            .sum();
        let majority = (0..k)
            .map(|c| self.true_weight(c) / self.total_weight)
            .fold(0.0, f64::max);

        m.push(Measurement::new("kappa", kappa_against(p_o, p_e)));
        m.push(Measurement::new("kappa_m", kappa_against(p_o, majority)));

        let macro_precision = finite_mean((0..k).map(|c| self.precision(c)));
        let macro_recall = finite_mean((0..k).map(|c| self.recall(c)));
        let s = macro_precision + macro_recall;
        let macro_f1 = if s.is_finite() && s > f64::EPSILON {
            2.0 * macro_precision * macro_recall / s
        } else {
            f64::NAN
        };
        m.push(Measurement::new("precision", macro_precision));
        m.push(Measurement::new("recall", macro_recall));
        m.push(Measurement::new("f1", macro_f1));

        for c in 0..k {
            m.push(Measurement::new(
                format!("precision_class_{c}"),
                self.precision(c),
            ));
        }
        for c in 0..k {
            m.push(Measurement::new(format!("recall_class_{c}"), self.recall(c)));
        }
        m
    }
}
