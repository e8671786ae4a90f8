use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Which side of a compatibility check a material sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Resin,
    Solvent,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Resin, Category::Solvent];

    pub fn label(self) -> &'static str {
        match self {
            Category::Resin => "resin",
            Category::Solvent => "solvent",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Category::Resin => "Resins",
            Category::Solvent => "Solvents",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resin" | "resins" => Ok(Category::Resin),
            "solvent" | "solvents" => Ok(Category::Solvent),
            _ => Err(CatalogError::InvalidInput {
                what: "category must be 'resin' or 'solvent'",
            }),
        }
    }
}
