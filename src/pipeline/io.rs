//! CSV input and output for the lookup pipeline.

use std::path::Path;

use crate::error::MaveLookupError;
use crate::record::VariantEffectRecord;
use crate::Result;

/// Column of the input table holding the variant description.
const HGVS_COLUMN: &str = "hgvs";

/// Read variant queries from a CSV file.
///
/// The file must carry an `hgvs` header column; other columns are ignored.
/// Rows are returned in file order.
pub fn read_variant_queries(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    let hgvs_index = headers
        .iter()
        .position(|header| header == HGVS_COLUMN)
        .ok_or_else(|| MaveLookupError::MissingColumn {
            column: HGVS_COLUMN.to_string(),
        })?;

    let mut queries = Vec::new();
    for row in reader.records() {
        let row = row?;
        if let Some(hgvs) = row.get(hgvs_index) {
            queries.push(hgvs.to_string());
        }
    }
    Ok(queries)
}

/// Write output records to a CSV file.
///
/// The header row is always written, even for an empty record set.
pub fn write_records(path: &Path, records: &[VariantEffectRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(VariantEffectRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
