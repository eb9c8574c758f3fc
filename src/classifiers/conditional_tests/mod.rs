mod attribute_split_suggestion;
mod instance_conditional_test;
mod numeric_attribute_binary_test;

pub use attribute_split_suggestion::AttributeSplitSuggestion;
pub use instance_conditional_test::InstanceConditionalTest;
pub use numeric_attribute_binary_test::NumericAttributeBinaryTest;
