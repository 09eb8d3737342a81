// src/providers/json_provider.rs
//
// Reads the catalog from a JSON array of pets on disk

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::PetDataProvider;
use crate::domain::Pet;
use crate::error::AppResult;

pub struct JsonFilePetProvider {
    path: PathBuf,
}

impl JsonFilePetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PetDataProvider for JsonFilePetProvider {
    async fn load_pets(&self) -> AppResult<Vec<Pet>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let pets: Vec<Pet> = serde_json::from_str(&raw)?;
        log::debug!("Read {} pets from {}", pets.len(), self.path.display());
        Ok(pets)
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::providers::sample::sample_pets;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_pets_from_file() {
        let pets = sample_pets();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&pets).unwrap().as_bytes())
            .unwrap();

        let provider = JsonFilePetProvider::new(file.path());
        let loaded = provider.load_pets().await.unwrap();
        assert_eq!(loaded, pets);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonFilePetProvider::new(dir.path().join("missing.json"));
        assert!(matches!(provider.load_pets().await, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": \"not a number\"}]").unwrap();

        let provider = JsonFilePetProvider::new(file.path());
        assert!(matches!(
            provider.load_pets().await,
            Err(AppError::Serialization(_))
        ));
    }
}
