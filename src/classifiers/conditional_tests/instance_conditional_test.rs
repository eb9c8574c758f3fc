use crate::core::instances::Instance;

/// Routes an instance to one of the branches of a split node.
pub trait InstanceConditionalTest: Send + Sync {
    /// Branch index for `instance`, or `None` when the tested value is missing.
    fn branch_for_instance(&self, instance: &dyn Instance) -> Option<usize>;

    fn max_branches(&self) -> usize;
}
