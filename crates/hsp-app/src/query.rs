//! Table ordering for ranked rows.

use core::cmp::Ordering;
use core::str::FromStr;

use hsp_engine::RankedRow;

use crate::error::AppError;

/// Column of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Solvent,
    Dd,
    Dp,
    Dh,
    Ra,
    Match,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortColumn {
    pub fn header(self) -> &'static str {
        match self {
            SortColumn::Solvent => "Solvent",
            SortColumn::Dd => "δD",
            SortColumn::Dp => "δP",
            SortColumn::Dh => "δH",
            SortColumn::Ra => "Ra",
            SortColumn::Match => "Match",
        }
    }

    fn compare(self, a: &RankedRow, b: &RankedRow) -> Ordering {
        match self {
            SortColumn::Solvent => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Dd => a.params.dd().total_cmp(&b.params.dd()),
            SortColumn::Dp => a.params.dp().total_cmp(&b.params.dp()),
            SortColumn::Dh => a.params.dh().total_cmp(&b.params.dh()),
            SortColumn::Ra => a.distance.total_cmp(&b.distance),
            SortColumn::Match => a.tier.cmp(&b.tier),
        }
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solvent" | "name" => Ok(SortColumn::Solvent),
            "dd" | "δd" => Ok(SortColumn::Dd),
            "dp" | "δp" => Ok(SortColumn::Dp),
            "dh" | "δh" => Ok(SortColumn::Dh),
            "ra" | "distance" => Ok(SortColumn::Ra),
            "match" | "tier" => Ok(SortColumn::Match),
            other => Err(AppError::InvalidInput(format!(
                "unknown sort column '{other}'"
            ))),
        }
    }
}

/// Stable re-sort of table rows; ties keep their current order.
pub fn sort_rows(rows: &mut [RankedRow], column: SortColumn, order: SortOrder) {
    rows.sort_by(|a, b| match order {
        SortOrder::Ascending => column.compare(a, b),
        SortOrder::Descending => column.compare(b, a),
    });
}
