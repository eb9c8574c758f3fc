/// A row the classifier can read feature values from.
///
/// Feature `i` of an instance lines up with attribute `i` of the
/// [`InstanceHeader`](crate::core::instance_header::InstanceHeader) it was
/// built against.
pub trait Instance {
    fn weight(&self) -> f64;

    fn value_at_index(&self, index: usize) -> Option<f64>;

    fn is_missing_at_index(&self, index: usize) -> bool {
        self.value_at_index(index).is_none_or(f64::is_nan)
    }

    fn number_of_features(&self) -> usize;

    /// Class index of a labelled row, `None` for unlabelled rows.
    fn class_value(&self) -> Option<f64>;
}
