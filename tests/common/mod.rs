use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes the given rows under the standard payments header into a temp file.
pub fn payments_csv(rows: &[[&str; 4]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["value", "key", "type", "max_date"])?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
