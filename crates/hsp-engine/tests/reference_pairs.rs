//! Worked examples against the seeded reference catalog.

use hsp_catalog::{Category, MaterialCatalog};
use hsp_engine::{ClassificationPolicy, Tier, compare, distance, rank};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9
}

#[test]
fn epoxy_vs_toluene_is_incompatible() {
    let catalog = MaterialCatalog::seed();
    let epoxy = catalog.get(Category::Resin, "Epoxy Resin").unwrap();
    let toluene = catalog.get(Category::Solvent, "Toluene").unwrap();

    let result = compare(epoxy, toluene, ClassificationPolicy::default());
    assert!(approx_eq(result.distance, 113.96_f64.sqrt()));
    assert_eq!(format!("{:.2}", result.distance), "10.68");
    assert_eq!(result.tier, Tier::Incompatible);
}

#[test]
fn acrylic_vs_acetone_is_compatible() {
    let catalog = MaterialCatalog::seed();
    let acrylic = catalog.get(Category::Resin, "Acrylic Resin").unwrap();
    let acetone = catalog.get(Category::Solvent, "Acetone").unwrap();

    let result = compare(acrylic, acetone, ClassificationPolicy::default());
    assert!(approx_eq(result.distance, 3.0_f64.sqrt()));
    assert_eq!(result.tier, Tier::Compatible);
}

#[test]
fn ranking_solvents_against_epoxy() {
    let catalog = MaterialCatalog::seed();
    let epoxy = catalog.get(Category::Resin, "Epoxy Resin").unwrap();
    let candidates = catalog
        .entries(Category::Solvent)
        .iter()
        .map(|e| (e.name.as_str(), e.params));

    let rows = rank(epoxy, candidates, 7.0);
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    // Acetone ~3.19, Toluene ~10.68, Ethanol ~11.71
    assert_eq!(names, ["Acetone", "Toluene", "Ethanol"]);

    let tiers: Vec<_> = rows.iter().map(|r| r.tier).collect();
    assert_eq!(
        tiers,
        [Tier::Compatible, Tier::Incompatible, Tier::Incompatible]
    );
    assert!(approx_eq(rows[2].distance, 137.16_f64.sqrt()));
}

#[test]
fn fixed_band_variant_on_reference_pairs() {
    let catalog = MaterialCatalog::seed();
    let policy = ClassificationPolicy::fixed_bands();
    let pu = catalog.get(Category::Resin, "Polyurethane").unwrap();

    for solvent in catalog.entries(Category::Solvent) {
        let ra = distance(pu, solvent.params);
        let expected = if ra <= 4.0 {
            Tier::Compatible
        } else if ra <= 7.0 {
            Tier::Borderline
        } else {
            Tier::Incompatible
        };
        assert_eq!(policy.classify(ra), expected, "{}", solvent.name);
    }
}
