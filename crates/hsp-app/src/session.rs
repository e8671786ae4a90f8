//! One interactive session: a catalog plus the active classification policy.

use hsp_catalog::{Category, MaterialCatalog, MaterialEntry};
use hsp_core::ParameterTriple;
use hsp_engine::{
    ClassificationPolicy, CompatibilityResult, HansenPlot, RankedRow, compare, rank_with_policy,
};
use serde::Serialize;
use tracing::debug;

use crate::config::HspConfig;
use crate::error::AppResult;

/// Everything a front end needs to render one compatibility check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub resin: MaterialEntry,
    pub solvent: MaterialEntry,
    pub threshold: f64,
    pub result: CompatibilityResult,
    pub plot: HansenPlot,
}

/// Session state owned by a single caller.
///
/// Mutation goes through `&mut self`, so one session has exactly one writer.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: MaterialCatalog,
    policy: ClassificationPolicy,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(HspConfig::default())
    }
}

impl Session {
    pub fn new(config: HspConfig) -> Self {
        Self::with_catalog(MaterialCatalog::seed(), config)
    }

    pub fn with_catalog(catalog: MaterialCatalog, config: HspConfig) -> Self {
        Self {
            catalog,
            policy: config.policy(),
        }
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    /// Threshold slider. The value is taken as-is.
    pub fn set_threshold(&mut self, threshold: f64) {
        debug!(threshold, "threshold changed");
        self.policy.threshold = threshold;
    }

    pub fn add_material(
        &mut self,
        category: Category,
        name: &str,
        params: ParameterTriple,
    ) -> AppResult<()> {
        self.catalog.add(category, name, params)?;
        Ok(())
    }

    fn entry(&self, category: Category, name: &str) -> AppResult<MaterialEntry> {
        let params = self.catalog.get(category, name)?;
        Ok(MaterialEntry::new(name, params))
    }

    fn report(&self, resin: MaterialEntry, solvent: MaterialEntry) -> CheckReport {
        let result = compare(resin.params, solvent.params, self.policy);
        debug!(
            resin = %resin.name,
            solvent = %solvent.name,
            ra = result.distance,
            tier = %result.tier,
            "compatibility check"
        );
        CheckReport {
            plot: HansenPlot::new(resin.params, solvent.params, self.policy.threshold),
            threshold: self.policy.threshold,
            resin,
            solvent,
            result,
        }
    }

    /// Compare two catalog entries by name.
    pub fn check(&self, resin: &str, solvent: &str) -> AppResult<CheckReport> {
        let resin = self.entry(Category::Resin, resin)?;
        let solvent = self.entry(Category::Solvent, solvent)?;
        Ok(self.report(resin, solvent))
    }

    /// Add a user-entered solvent, then compare it against `resin`.
    ///
    /// Nothing is added when the resin is unknown, the name is blank or a
    /// parameter is NaN or infinite.
    pub fn check_custom(
        &mut self,
        resin: &str,
        solvent_name: &str,
        params: ParameterTriple,
    ) -> AppResult<CheckReport> {
        let resin = self.entry(Category::Resin, resin)?;
        let params = params.ensure_finite()?;
        self.catalog.add(Category::Solvent, solvent_name, params)?;
        Ok(self.report(resin, MaterialEntry::new(solvent_name, params)))
    }

    /// Every catalog solvent scored against `resin`, nearest first.
    pub fn rank_solvents(&self, resin: &str) -> AppResult<Vec<RankedRow>> {
        let resin = self.catalog.get(Category::Resin, resin)?;
        let candidates = self
            .catalog
            .entries(Category::Solvent)
            .iter()
            .map(|e| (e.name.as_str(), e.params));
        Ok(rank_with_policy(resin, candidates, self.policy))
    }
}
