mod csv_loader;
mod purchase_record;
mod train_test_split;

pub use csv_loader::{load_records, load_records_from_reader};
pub use purchase_record::PurchaseRecord;
pub use train_test_split::train_test_split;
