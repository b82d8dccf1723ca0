//! Catalogue access for request handlers.

use codex_data::{load_catalog, Catalog, CatalogError, CatalogSource};

/// Where the wiki reads its catalogue from.
///
/// The document is loaded fresh for every render; the server holds no
/// cross-request state, so edits to a file-backed catalogue show up on the
/// next page load.
#[derive(Clone, Debug)]
pub enum DataProvider {
    /// The document compiled into the binary.
    Embedded,
    /// A JSON file on disk.
    File(String),
}

impl DataProvider {
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            DataProvider::Embedded => load_catalog(CatalogSource::Embedded),
            DataProvider::File(path) => load_catalog(CatalogSource::Path(path.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_provider_loads() {
        let catalog = DataProvider::Embedded.load().unwrap();
        assert!(!catalog.civilizations.is_empty());
    }

    #[test]
    fn missing_file_surfaces_as_error() {
        let provider = DataProvider::File("/no/such/civ_data.json".into());
        assert!(provider.load().is_err());
    }
}
