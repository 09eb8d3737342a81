use serde::{Deserialize, Serialize};

use super::pet::PetType;

/// Pet-type filter selected on the browsing screen.
/// `Unfiltered` is the wildcard and matches every pet, including `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetFilter {
    Dog,
    Cat,
    Unfiltered,
}

impl PetFilter {
    /// Supported filter categories, in display order
    pub const ALL: [PetFilter; 3] = [PetFilter::Dog, PetFilter::Cat, PetFilter::Unfiltered];

    pub const DEFAULT: PetFilter = PetFilter::Dog;

    pub fn is_wildcard(self) -> bool {
        self == PetFilter::Unfiltered
    }

    pub fn matches(self, pet_type: PetType) -> bool {
        match self {
            PetFilter::Unfiltered => true,
            PetFilter::Dog => pet_type == PetType::Dog,
            PetFilter::Cat => pet_type == PetType::Cat,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PetFilter::Dog => "Dogs",
            PetFilter::Cat => "Cats",
            PetFilter::Unfiltered => "All",
        }
    }
}

impl Default for PetFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for PetFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetFilter::Dog => write!(f, "dog"),
            PetFilter::Cat => write!(f, "cat"),
            PetFilter::Unfiltered => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for PetFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" | "dogs" => Ok(PetFilter::Dog),
            "cat" | "cats" => Ok(PetFilter::Cat),
            "all" | "unfiltered" | "other" => Ok(PetFilter::Unfiltered),
            other => Err(format!("Invalid pet filter: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_every_type() {
        for t in [PetType::Dog, PetType::Cat, PetType::Other] {
            assert!(PetFilter::Unfiltered.matches(t));
        }
    }

    #[test]
    fn test_concrete_filter_matches_own_type_only() {
        assert!(PetFilter::Dog.matches(PetType::Dog));
        assert!(!PetFilter::Dog.matches(PetType::Cat));
        assert!(!PetFilter::Cat.matches(PetType::Other));
    }

    #[test]
    fn test_default_is_concrete() {
        assert_eq!(PetFilter::default(), PetFilter::Dog);
        assert!(!PetFilter::default().is_wildcard());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Cats".parse::<PetFilter>(), Ok(PetFilter::Cat));
        assert_eq!("all".parse::<PetFilter>(), Ok(PetFilter::Unfiltered));
        assert!("hamster".parse::<PetFilter>().is_err());
    }
}
