// src/providers/pet_provider.rs
//
// Data provider seam - the opaque source of the initial pet list

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::Pet;
use crate::error::{AppError, AppResult};

/// Supplies the full, unfiltered pet list once per session.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PetDataProvider: Send + Sync {
    async fn load_pets(&self) -> AppResult<Vec<Pet>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// In-memory provider over a fixed list
pub struct StaticPetProvider {
    pets: Vec<Pet>,
}

impl StaticPetProvider {
    pub fn new(pets: Vec<Pet>) -> Self {
        Self { pets }
    }

    /// Built-in catalog used when no catalog file is configured
    pub fn sample() -> Self {
        Self::new(super::sample::sample_pets())
    }
}

#[async_trait]
impl PetDataProvider for StaticPetProvider {
    async fn load_pets(&self) -> AppResult<Vec<Pet>> {
        Ok(self.pets.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Provider that always fails; drives the Error path of the catalog store
pub struct FailingPetProvider {
    reason: String,
}

impl FailingPetProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl PetDataProvider for FailingPetProvider {
    async fn load_pets(&self) -> AppResult<Vec<Pet>> {
        Err(AppError::CatalogLoad(self.reason.clone()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_its_list() {
        let provider = StaticPetProvider::sample();
        let pets = provider.load_pets().await.unwrap();
        assert!(!pets.is_empty());
        assert!(crate::domain::validate_catalog(&pets).is_ok());
    }

    #[tokio::test]
    async fn test_failing_provider_fails() {
        let provider = FailingPetProvider::new("offline");
        match provider.load_pets().await {
            Err(AppError::CatalogLoad(reason)) => assert_eq!(reason, "offline"),
            other => panic!("expected load failure, got {:?}", other),
        }
    }
}
