use hsp_core::ParameterTriple;
use serde::{Deserialize, Serialize};

/// A named material and its Hansen parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub name: String,
    pub params: ParameterTriple,
}

impl MaterialEntry {
    pub fn new(name: impl Into<String>, params: ParameterTriple) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
    }
}
