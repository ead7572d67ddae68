//! Query descriptor types for tsforge benchmark workloads.
//!
//! A descriptor is created empty by the generator, filled exactly once
//! by a backend emitter, and treated as immutable from then on. Load
//! clients consume descriptors verbatim; nothing here is re-read or
//! revalidated after the fill.

use serde::{Deserialize, Serialize};

/// A generated benchmark query addressed to an HTTP query endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpQuery {
    /// Short, diffable summary of the pattern and its cardinalities.
    pub human_label: String,

    /// Label plus the sampled window's start timestamp.
    pub human_description: String,

    /// HTTP method, e.g. "GET".
    pub method: String,

    /// Request path including the encoded query text.
    pub path: String,

    /// Request body. Empty for GET-style backends.
    pub body: Option<Vec<u8>>,
}

impl HttpQuery {
    /// Returns a descriptor with every field empty, ready to be filled
    /// by a backend emitter.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Whether a backend emitter has already filled this descriptor.
    pub fn is_filled(&self) -> bool {
        !self.method.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_content() {
        let q = HttpQuery::new_empty();
        assert!(q.human_label.is_empty());
        assert!(q.human_description.is_empty());
        assert!(q.method.is_empty());
        assert!(q.path.is_empty());
        assert!(q.body.is_none());
        assert!(!q.is_filled());
    }

    #[test]
    fn test_filled_after_method_set() {
        let mut q = HttpQuery::new_empty();
        q.method = "GET".to_string();
        assert!(q.is_filled());
    }
}
