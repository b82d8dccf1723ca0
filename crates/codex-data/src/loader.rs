use thiserror::Error;

use crate::catalog::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("utf-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub enum CatalogSource<'a> {
    /// The document compiled into the binary.
    Embedded,
    /// A JSON file on disk.
    Path(String),
    /// An already-fetched document.
    Bytes(&'a [u8]),
}

pub fn load_catalog(source: CatalogSource<'_>) -> Result<Catalog, CatalogError> {
    match source {
        CatalogSource::Embedded => parse_catalog(include_str!("../data/civ_data.json")),
        CatalogSource::Path(path) => {
            let text = std::fs::read_to_string(&path)?;
            parse_catalog(&text)
        }
        CatalogSource::Bytes(bytes) => parse_catalog(std::str::from_utf8(bytes)?),
    }
}

fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = load_catalog(CatalogSource::Embedded).unwrap();
        assert!(!catalog.civilizations.is_empty());
        assert!(!catalog.victory_types.is_empty());
        // Every leader's civilization must itself be catalogued.
        for leader in catalog.leaders.values() {
            assert!(
                catalog.civilizations.contains_key(&leader.civilization),
                "unknown civilization {:?}",
                leader.civilization
            );
        }
    }

    #[test]
    fn missing_resources_defaults_to_empty() {
        let doc = br#"{
            "civilizations": {},
            "leaders": {},
            "units": {},
            "wonders": {},
            "victory_types": {}
        }"#;
        let catalog = load_catalog(CatalogSource::Bytes(doc)).unwrap();
        assert_eq!(catalog.names(Collection::Resources).count(), 0);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = load_catalog(CatalogSource::Bytes(b"{\"civilizations\": [}")).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_catalog(CatalogSource::Path("/does/not/exist.json".into())).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
