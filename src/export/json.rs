use crate::error::ExportError;
use crate::model::Survey;
use crate::pricing::PricedBom;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn write_pretty<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

pub fn export_json<P: AsRef<Path>>(bom: &PricedBom, path: P) -> Result<(), ExportError> {
    write_pretty(bom, path)
}

/// Saves a survey document in its normalized form.
pub fn write_survey<P: AsRef<Path>>(survey: &Survey, path: P) -> Result<(), ExportError> {
    write_pretty(survey, path)
}
