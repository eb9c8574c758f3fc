use crate::core::instances::Instance;
use crate::evaluation::Measurement;

/// Evaluator of predictive performance over a batch of labelled examples.
///
/// Consumes ground-truth examples with the class votes a classifier produced
/// for them, and exposes aggregated metrics via [`performance`].
///
/// [`performance`]: PerformanceEvaluator::performance
pub trait PerformanceEvaluator {
    /// Feeds one labelled example and its class votes (one score per class).
    ///
    /// Examples without a usable class value or votes are skipped.
    fn add_result(&mut self, example: &dyn Instance, class_votes: &[f64]);

    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Value of a single metric, `None` when the evaluator does not report it.
    fn metric(&self, name: &str) -> Option<f64>;
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metric(&self, name: &str) -> Option<f64> {
        self.performance()
            .into_iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}
