//! Community forest resource (CFR) rules: seven forest-governance schemes.

use super::{Row, RuleError, SchemeMeta};

pub(super) fn labels(row: &Row) -> Result<Vec<(&'static str, bool)>, RuleError> {
    let degraded = row.text("forest_condition", "") == "degraded";
    let fire = row.text("fire_incidents_5yrs", "no") == "yes";
    let ntfps_listed = !row.text("major_ntfps_collected", "").is_empty();

    Ok(vec![
        (
            "JJM",
            row.is_one_of("water_supply_coverage", "", &["none", "partial"])
                || row.text("water_availability_in_forest", "") == "low",
        ),
        ("PMJANMAN", degraded || ntfps_listed),
        (
            "DAJGUA",
            fire || row.text("gramsabha_meeting_frequency", "") == "rare",
        ),
        (
            "MGNREGA_COMMUNITY",
            row.text("road_access_condition", "") == "poor"
                || row.text("electricity_supply_coverage", "") == "none",
        ),
        ("NRLM_COMMUNITY", row.text("frc_formed", "") == "yes"),
        ("TRIBALPROD_COMMUNITY", ntfps_listed),
        ("NGOGRANT", degraded && fire),
    ])
}

pub(super) const FALLBACK: SchemeMeta = SchemeMeta {
    reason: "Village meets scheme criteria.",
    benefit: "Helps community development.",
    impact: "Improves overall well-being.",
};

pub(super) const META: &[(&str, SchemeMeta)] = &[
    (
        "JJM",
        SchemeMeta {
            reason: "Village has poor/partial water supply or low water availability.",
            benefit: "Improves safe drinking water access and tap connections.",
            impact: "Reduces water stress and enhances health outcomes.",
        },
    ),
    (
        "PMJANMAN",
        SchemeMeta {
            reason: "Forest condition degraded / high NTFP collection workload.",
            benefit: "Targeted tribal development and basic services improvement.",
            impact: "Strengthens socio-economic well-being of tribal communities.",
        },
    ),
    (
        "DAJGUA",
        SchemeMeta {
            reason: "Irregular Gram Sabha / fire incidents indicate governance gaps.",
            benefit: "Village development, forest governance and infrastructure support.",
            impact: "Improves collective capacity and forest management.",
        },
    ),
    (
        "MGNREGA_COMMUNITY",
        SchemeMeta {
            reason: "Poor road access or no electricity — infrastructure deficit.",
            benefit: "Creation of durable community assets via MGNREGA.",
            impact: "Supports livelihoods and boosts village infrastructure.",
        },
    ),
    (
        "NRLM_COMMUNITY",
        SchemeMeta {
            reason: "FRC institution formed — strong community governance.",
            benefit: "Strengthening of SHG/VO institutions under NRLM.",
            impact: "Improves women empowerment and financial inclusion.",
        },
    ),
    (
        "TRIBALPROD_COMMUNITY",
        SchemeMeta {
            reason: "High dependency on NTFP collection.",
            benefit: "Support for NTFP processing, storage and marketing.",
            impact: "Increases income from forest-based livelihoods.",
        },
    ),
    (
        "NGOGRANT",
        SchemeMeta {
            reason: "Degraded forest & fire incidents indicate need for NGO support.",
            benefit: "Grant-in-aid for voluntary tribal welfare organisations.",
            impact: "Improves resilience and socio-economic support systems.",
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn eligible(value: Value) -> Vec<&'static str> {
        let row = Row::from_value(value).unwrap();
        labels(&row)
            .unwrap()
            .into_iter()
            .filter(|(_, ok)| *ok)
            .map(|(scheme, _)| scheme)
            .collect()
    }

    #[test]
    fn test_empty_row_is_not_eligible() {
        assert!(eligible(json!({})).is_empty());
    }

    #[test]
    fn test_water_coverage() {
        assert_eq!(eligible(json!({"water_supply_coverage": "Partial"})), vec!["JJM"]);
        assert_eq!(eligible(json!({"water_availability_in_forest": "low"})), vec!["JJM"]);
        assert!(eligible(json!({"water_supply_coverage": "full"})).is_empty());
    }

    #[test]
    fn test_degraded_forest_with_fire() {
        let schemes = eligible(json!({
            "forest_condition": "Degraded",
            "fire_incidents_5yrs": "Yes"
        }));
        assert_eq!(schemes, vec!["PMJANMAN", "DAJGUA", "NGOGRANT"]);
    }

    #[test]
    fn test_ntfp_listing() {
        let schemes = eligible(json!({"major_ntfps_collected": "Mahua, Tendu"}));
        assert_eq!(schemes, vec!["PMJANMAN", "TRIBALPROD_COMMUNITY"]);
        assert!(eligible(json!({"major_ntfps_collected": "  "})).is_empty());
    }

    #[test]
    fn test_infrastructure_and_governance() {
        let schemes = eligible(json!({
            "road_access_condition": "poor",
            "gramsabha_meeting_frequency": "rare",
            "frc_formed": "yes"
        }));
        assert_eq!(schemes, vec!["DAJGUA", "MGNREGA_COMMUNITY", "NRLM_COMMUNITY"]);
    }
}
