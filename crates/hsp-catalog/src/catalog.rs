//! Insertion-ordered material catalog.

use hsp_core::ParameterTriple;
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::seed::reference_seed;
use crate::{Category, MaterialEntry};

/// Resins and solvents available to one session.
///
/// Each category is a list in insertion order. Names are unique within a
/// category: adding an existing name replaces its parameters in place, so the
/// entry keeps its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCatalog {
    resins: Vec<MaterialEntry>,
    solvents: Vec<MaterialEntry>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl MaterialCatalog {
    /// A catalog with no entries at all.
    pub fn empty() -> Self {
        Self {
            resins: Vec::new(),
            solvents: Vec::new(),
        }
    }

    /// A catalog holding the reference resins and solvents.
    pub fn seed() -> Self {
        let mut catalog = Self::empty();
        for seed in reference_seed() {
            catalog
                .slot_mut(seed.category)
                .push(MaterialEntry::new(seed.name, seed.params));
        }
        debug!(
            resins = catalog.resins.len(),
            solvents = catalog.solvents.len(),
            "seeded material catalog"
        );
        catalog
    }

    fn slot(&self, category: Category) -> &Vec<MaterialEntry> {
        match category {
            Category::Resin => &self.resins,
            Category::Solvent => &self.solvents,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Vec<MaterialEntry> {
        match category {
            Category::Resin => &mut self.resins,
            Category::Solvent => &mut self.solvents,
        }
    }

    pub fn entry(&self, category: Category, name: &str) -> Option<&MaterialEntry> {
        self.slot(category).iter().find(|e| e.name == name)
    }

    /// Parameters of `name` in `category`.
    pub fn get(&self, category: Category, name: &str) -> CatalogResult<ParameterTriple> {
        self.entry(category, name)
            .map(|e| e.params)
            .ok_or_else(|| CatalogError::NotFound {
                category,
                name: name.to_string(),
            })
    }

    /// Insert `name`, or overwrite it if already present.
    ///
    /// Blank names are rejected and leave the catalog untouched. The numeric
    /// triple is stored as given.
    pub fn add(
        &mut self,
        category: Category,
        name: &str,
        params: ParameterTriple,
    ) -> CatalogResult<()> {
        if name.trim().is_empty() {
            warn!(%category, "rejected material with blank name");
            return Err(CatalogError::InvalidInput {
                what: "material name must not be empty",
            });
        }

        let slot = self.slot_mut(category);
        if let Some(existing) = slot.iter_mut().find(|e| e.name == name) {
            warn!(
                %category,
                material = name,
                old = %existing.params,
                new = %params,
                "overwriting material"
            );
            existing.params = params;
        } else {
            debug!(%category, material = name, %params, "adding material");
            slot.push(MaterialEntry::new(name, params));
        }
        Ok(())
    }

    /// Names in insertion order.
    pub fn list(&self, category: Category) -> Vec<&str> {
        self.slot(category).iter().map(|e| e.name.as_str()).collect()
    }

    pub fn entries(&self, category: Category) -> &[MaterialEntry] {
        self.slot(category)
    }

    pub fn search(&self, category: Category, query: &str) -> Vec<&MaterialEntry> {
        self.slot(category)
            .iter()
            .filter(|e| e.matches_query(query))
            .collect()
    }

    pub fn len(&self, category: Category) -> usize {
        self.slot(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.resins.is_empty() && self.solvents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_lists_reference_names_in_order() {
        let catalog = MaterialCatalog::seed();
        assert_eq!(
            catalog.list(Category::Resin),
            ["Epoxy Resin", "Acrylic Resin", "Polyurethane"]
        );
        assert_eq!(
            catalog.list(Category::Solvent),
            ["Toluene", "Ethanol", "Acetone"]
        );
    }

    #[test]
    fn get_is_scoped_to_category() {
        let catalog = MaterialCatalog::seed();
        assert_eq!(
            catalog.get(Category::Solvent, "Toluene").unwrap(),
            ParameterTriple::new(18.0, 1.4, 2.0)
        );
        let err = catalog.get(Category::Resin, "Toluene").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound {
                category: Category::Resin,
                ..
            }
        ));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = MaterialCatalog::seed();
        assert!(catalog.get(Category::Solvent, "toluene").is_err());
    }

    #[test]
    fn add_then_get_returns_same_triple() {
        let mut catalog = MaterialCatalog::seed();
        let params = ParameterTriple::new(16.0, 9.0, 5.1);
        catalog.add(Category::Solvent, "MEK", params).unwrap();
        assert_eq!(catalog.get(Category::Solvent, "MEK").unwrap(), params);
        assert_eq!(catalog.list(Category::Solvent).last(), Some(&"MEK"));
    }

    #[test]
    fn blank_name_is_rejected_without_mutation() {
        let mut catalog = MaterialCatalog::seed();
        let before = catalog.clone();
        for name in ["", "   ", "\t\n"] {
            let err = catalog
                .add(Category::Solvent, name, ParameterTriple::new(1.0, 2.0, 3.0))
                .unwrap_err();
            assert!(matches!(err, CatalogError::InvalidInput { .. }));
        }
        assert_eq!(catalog, before);
    }

    #[test]
    fn duplicate_overwrites_in_place() {
        let mut catalog = MaterialCatalog::seed();
        let params = ParameterTriple::new(18.4, 1.0, 2.1);
        catalog.add(Category::Solvent, "Toluene", params).unwrap();

        assert_eq!(catalog.len(Category::Solvent), 3);
        assert_eq!(catalog.list(Category::Solvent)[0], "Toluene");
        assert_eq!(catalog.get(Category::Solvent, "Toluene").unwrap(), params);
    }

    #[test]
    fn extreme_values_are_stored_as_given() {
        let mut catalog = MaterialCatalog::empty();
        let params = ParameterTriple::new(-5.0, 1e6, 0.0);
        catalog.add(Category::Resin, "Odd", params).unwrap();
        assert_eq!(catalog.get(Category::Resin, "Odd").unwrap(), params);
    }

    #[test]
    fn search_filters_and_keeps_order() {
        let mut catalog = MaterialCatalog::seed();
        catalog
            .add(Category::Resin, "Epoxy Novolac", ParameterTriple::new(18.0, 11.0, 9.0))
            .unwrap();
        let names: Vec<_> = catalog
            .search(Category::Resin, "epoxy")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["Epoxy Resin", "Epoxy Novolac"]);
        assert_eq!(catalog.search(Category::Resin, "").len(), 4);
    }

    #[test]
    fn empty_catalog() {
        let catalog = MaterialCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.list(Category::Resin).is_empty());
        assert!(!MaterialCatalog::default().is_empty());
    }
}
