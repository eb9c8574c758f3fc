use crate::data::PurchaseRecord;
use crate::tasks::StartupError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads every record of a purchase CSV file with a header row.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<PurchaseRecord>, StartupError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StartupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_records_from_reader(BufReader::new(file))
}

pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<PurchaseRecord>, StartupError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = rdr
        .deserialize::<PurchaseRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(StartupError::EmptyDataset);
    }
    Ok(records)
}
