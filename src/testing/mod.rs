pub mod dummies;
pub mod fixtures;
mod generator;

pub use generator::PurchaseRecordGenerator;
