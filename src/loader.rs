//! Reading survey, catalog and price documents from disk.

use crate::error::LoadError;
use crate::model::Survey;
use crate::pricing::PriceOverlay;
use crate::rollup::InMemoryCatalog;
use serde::de::DeserializeOwned;
use std::path::Path;

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, LoadError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path_ref.to_path_buf(),
        source,
    })
}

/// Loads one survey document.
///
/// Legacy single-assignment leaves are normalized while reading, so the
/// returned tree only carries `products` / `services` lists.
///
/// # Example
///
/// ```no_run
/// use site_survey::loader::load_survey;
///
/// let survey = load_survey("survey.json")?;
/// println!("{} buildings", survey.buildings.len());
/// # Ok::<(), site_survey::error::LoadError>(())
/// ```
pub fn load_survey<P: AsRef<Path>>(path: P) -> Result<Survey, LoadError> {
    let survey: Survey = load_json(path)?;
    tracing::debug!(
        buildings = survey.buildings.len(),
        floors = survey.total_floors(),
        leaves = survey.total_leaves(),
        "loaded survey"
    );
    Ok(survey)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog, LoadError> {
    load_json(path)
}

pub fn load_price_overlay<P: AsRef<Path>>(path: P) -> Result<PriceOverlay, LoadError> {
    load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("site-survey-loader-{name}"));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_survey("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::FileRead { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let path = temp_file("bad.json", "{ not json");
        let err = load_survey(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn reads_price_overlay() {
        let path = temp_file(
            "prices.json",
            r#"{ "products": { "P1": { "unitPrice": 10.0, "marginPercent": 20.0 } } }"#,
        );
        let overlay = load_price_overlay(&path).unwrap();
        assert_eq!(overlay.products["P1"].margin_percent, 20.0);
        assert!(overlay.services.is_empty());
    }
}
