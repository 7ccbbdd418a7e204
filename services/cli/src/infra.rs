use drive_insights::analysis::DriveData;
use drive_insights::error::AppError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

pub(crate) fn read_drive(path: &Path) -> Result<DriveData, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(DriveData::from_reader(reader)?)
}

pub(crate) fn read_drive_batch(path: &Path) -> Result<Vec<DriveData>, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(DriveData::batch_from_reader(reader)?)
}

/// Write `value` as pretty-printed JSON with a trailing newline.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let mut encoded = serde_json::to_string_pretty(value)?;
    encoded.push('\n');
    fs::write(path, encoded)?;
    Ok(())
}
