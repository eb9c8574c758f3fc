pub trait SplitCriterion: Send + Sync {
    /// Higher is better.
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[&[f64]],
    ) -> f64;
}
