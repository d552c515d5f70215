//! Rule-based scheme eligibility for IFR, CR and CFR rows.
//!
//! Each claim type has a fixed list of schemes, a predicate per scheme and
//! human-readable reason / benefit / impact text. Predicates only look at
//! the fields they need; absent fields take per-rule defaults.

mod cfr;
mod cr;
mod ifr;
mod row;

use serde::Serialize;
use thiserror::Error;

use crate::models::ClaimType;

pub use row::Row;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    #[error("row must be a JSON object")]
    NotAnObject,

    #[error("field {field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Display text attached to a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeMeta {
    pub reason: &'static str,
    pub benefit: &'static str,
    pub impact: &'static str,
}

/// Eligibility outcome for one scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeLabel {
    pub scheme: &'static str,
    pub eligible: bool,
    pub reason: &'static str,
    pub benefit: &'static str,
    pub impact: &'static str,
}

/// Evaluate every scheme of `claim_type` against one row
pub fn evaluate(claim_type: ClaimType, row: &Row) -> Result<Vec<SchemeLabel>, RuleError> {
    let (labels, table, fallback) = match claim_type {
        ClaimType::Individual => (ifr::labels(row)?, ifr::META, ifr::FALLBACK),
        ClaimType::Community => (cr::labels(row)?, cr::META, cr::FALLBACK),
        ClaimType::CommunityForestResource => (cfr::labels(row)?, cfr::META, cfr::FALLBACK),
    };

    Ok(labels
        .into_iter()
        .map(|(scheme, eligible)| {
            let meta = meta_for(table, scheme, fallback);
            SchemeLabel {
                scheme,
                eligible,
                reason: meta.reason,
                benefit: meta.benefit,
                impact: meta.impact,
            }
        })
        .collect())
}

/// Plain-text report, one block per row
pub fn format_report(claim_type: ClaimType, rows: &[Vec<SchemeLabel>]) -> String {
    let mut out = String::new();
    for (i, labels) in rows.iter().enumerate() {
        out.push_str(&format!("[{}] row {}\n", claim_type.label(), i + 1));
        for label in labels {
            let mark = if label.eligible { "YES" } else { "NO " };
            out.push_str(&format!("  {} {}\n", mark, label.scheme));
            if label.eligible {
                out.push_str(&format!("      reason:  {}\n", label.reason));
                out.push_str(&format!("      benefit: {}\n", label.benefit));
                out.push_str(&format!("      impact:  {}\n", label.impact));
            }
        }
    }
    out
}

fn meta_for(table: &[(&str, SchemeMeta)], scheme: &str, fallback: SchemeMeta) -> SchemeMeta {
    table
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|(_, meta)| *meta)
        .unwrap_or(fallback)
}
