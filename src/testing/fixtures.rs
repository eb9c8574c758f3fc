use crate::data::PurchaseRecord;
use std::io::Write;
use tempfile::NamedTempFile;

pub const CSV_HEADER: &str = "ProductID,ProductCategory,ProductBrand,ProductPrice,CustomerAge,CustomerGender,PurchaseFrequency,CustomerSatisfaction,PurchaseIntent";

/// Four rows over {Laptops, Smart Watches} x {Apple, Samsung}.
pub const SCENARIO_CSV: &str = "\
ProductID,ProductCategory,ProductBrand,ProductPrice,CustomerAge,CustomerGender,PurchaseFrequency,CustomerSatisfaction,PurchaseIntent
5874,Smart Watches,Samsung,980.39,35,1,7,2,0
5875,Laptops,Apple,2606.72,63,0,16,3,1
5876,Smart Watches,Apple,870.40,48,1,3,5,1
5877,Laptops,Samsung,1798.94,29,0,10,1,0
";

pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_records(records: &[PurchaseRecord]) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    let mut writer = csv::Writer::from_path(file.path()).unwrap();
    for record in records {
        writer.serialize(record).unwrap();
    }
    writer.flush().unwrap();
    file
}
