//! Collision checking for generated converter names.

use crate::error::{CodegenError, Result};
use indexmap::IndexSet;

/// Insertion-ordered set of claimed converter names.
///
/// Every generated function claims its name here before its text lands in
/// the artifact. The variant key plus direction is injective into the name
/// string, so a second claim of the same name means the matrix or the
/// naming scheme is broken.
#[derive(Debug, Default)]
pub struct NameRegistry {
    claimed: IndexSet<String>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            claimed: IndexSet::new(),
        }
    }

    /// Claim a name, failing if it was already claimed.
    pub fn claim(&mut self, name: String) -> Result<()> {
        if self.claimed.contains(&name) {
            return Err(CodegenError::DuplicateConverterName { name });
        }
        self.claimed.insert(name);
        Ok(())
    }

    /// Number of claimed names.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// True if nothing has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Claimed names, in claim order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.claimed.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_preserve_order() {
        let mut registry = NameRegistry::new();
        registry.claim("convert_a".to_string()).unwrap();
        registry.claim("convert_b".to_string()).unwrap();
        registry.claim("convert_c".to_string()).unwrap();

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["convert_a", "convert_b", "convert_c"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_claim_is_rejected() {
        let mut registry = NameRegistry::new();
        registry.claim("convert_a".to_string()).unwrap();

        let err = registry.claim("convert_a".to_string()).unwrap_err();
        match err {
            CodegenError::DuplicateConverterName { name } => assert_eq!(name, "convert_a"),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = NameRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.names().count(), 0);
    }
}
