use hsp_core::ParameterTriple;

use crate::Category;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedEntry {
    pub category: Category,
    pub name: &'static str,
    pub params: ParameterTriple,
}

const REFERENCE_SEED: [SeedEntry; 6] = [
    SeedEntry {
        category: Category::Resin,
        name: "Epoxy Resin",
        params: ParameterTriple::new(17.0, 10.0, 8.0),
    },
    SeedEntry {
        category: Category::Resin,
        name: "Acrylic Resin",
        params: ParameterTriple::new(16.2, 9.4, 6.8),
    },
    SeedEntry {
        category: Category::Resin,
        name: "Polyurethane",
        params: ParameterTriple::new(18.1, 5.3, 7.5),
    },
    SeedEntry {
        category: Category::Solvent,
        name: "Toluene",
        params: ParameterTriple::new(18.0, 1.4, 2.0),
    },
    SeedEntry {
        category: Category::Solvent,
        name: "Ethanol",
        params: ParameterTriple::new(15.8, 8.8, 19.4),
    },
    SeedEntry {
        category: Category::Solvent,
        name: "Acetone",
        params: ParameterTriple::new(15.5, 10.4, 7.0),
    },
];

/// Reference resins and solvents loaded into every new catalog.
pub fn reference_seed() -> &'static [SeedEntry] {
    &REFERENCE_SEED
}
