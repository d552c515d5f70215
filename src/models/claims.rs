//! FRA claim records
//!
//! Claims are display-only: the compiled-in sample list is used unless a
//! claims JSON file is given on the command line.

use serde::Deserialize;
use std::io;
use std::path::Path;

use super::enums::{ClaimFilter, ClaimType};

/// A single FRA claim as shown in the claims table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Claim {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub village: String,
    pub status: String,
    #[serde(default)]
    pub schemes: Vec<String>,
}

impl Claim {
    /// Scheme names joined for the table column
    pub fn schemes_label(&self) -> String {
        self.schemes.join(", ")
    }
}

/// The list of claims backing the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimBook {
    pub claims: Vec<Claim>,
}

impl ClaimBook {
    /// Compiled-in sample claims
    pub fn sample() -> Self {
        let claim = |id: &str, name: &str, claim_type, village: &str, schemes: &[&str]| Claim {
            id: id.to_string(),
            name: name.to_string(),
            claim_type,
            village: village.to_string(),
            status: "Accepted".to_string(),
            schemes: schemes.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            claims: vec![
                claim(
                    "IFR-001",
                    "Nek Ram",
                    ClaimType::Individual,
                    "Lakkarmandi",
                    &["PMAY-G", "PM-KISAN", "MGNREGA"],
                ),
                claim(
                    "CR-005",
                    "Village Community",
                    ClaimType::Community,
                    "Padhrotu",
                    &["DAJGUA", "JJM"],
                ),
            ],
        }
    }

    /// Load claims from a JSON array file
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let claims: Vec<Claim> = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        // Ids double as row keys, so they must be unique
        for (i, claim) in claims.iter().enumerate() {
            if claims[..i].iter().any(|c| c.id == claim.id) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("duplicate claim id: {}", claim.id),
                ));
            }
        }

        Ok(Self { claims })
    }

    /// Claims passing the type filter and, when set, the village filter
    pub fn filtered(&self, filter: ClaimFilter, village: Option<&str>) -> Vec<&Claim> {
        self.claims
            .iter()
            .filter(|c| filter.matches(c.claim_type))
            .filter(|c| village.is_none_or(|v| c.village == v))
            .collect()
    }

    /// Distinct villages in first-seen order
    pub fn villages(&self) -> Vec<&str> {
        let mut villages: Vec<&str> = Vec::new();
        for claim in &self.claims {
            if !villages.contains(&claim.village.as_str()) {
                villages.push(&claim.village);
            }
        }
        villages
    }

    pub fn get(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }
}
