//! Community rights (CR) rules: seven village-level schemes.

use super::{Row, RuleError, SchemeMeta};

const HAZARD_PRONE: &[&str] = &["drought", "flood", "both", "yes"];

pub(super) fn labels(row: &Row) -> Result<Vec<(&'static str, bool)>, RuleError> {
    let water_distance = row.number("distance_to_water_km", 0.0)?;
    let st_share = row.number("st_hh_percent", 0.0)?;
    let wage_dependency = row.number("wagelabour_dependency_percent", 0.0)?;
    let ntfp_dependency = row.number("ntfp_dependency_percent", 0.0)?;
    let hazard_prone = row.is_one_of("drought_or_flood_prone", "no", HAZARD_PRONE);
    let shg_vo = row.text("shg_vo_presence", "no") == "yes";

    Ok(vec![
        ("JJM", water_distance > 1.0 || hazard_prone),
        ("PMJANMAN", st_share > 70.0),
        ("DAJGUA", st_share > 40.0),
        ("MGNREGA_COMM", wage_dependency > 30.0),
        ("NRLM_VO", shg_vo),
        ("TRIBALPROD_COMM", ntfp_dependency > 30.0),
        ("GRANTINAID_VO", shg_vo && hazard_prone),
    ])
}

pub(super) const FALLBACK: SchemeMeta = SchemeMeta {
    reason: "Community vulnerability and infrastructure gaps.",
    benefit: "Community-level development and welfare support.",
    impact: "Improves collective resilience and living standards.",
};

pub(super) const META: &[(&str, SchemeMeta)] = &[
    (
        "JJM",
        SchemeMeta {
            reason: "Village shows poor or distant access to safe water sources, or is drought/flood prone.",
            benefit: "Improved drinking water supply and household tap connections.",
            impact: "Reduces water stress and improves community health.",
        },
    ),
    (
        "PMJANMAN",
        SchemeMeta {
            reason: "High concentration of ST households in the village.",
            benefit: "Targeted tribal village development under PM-JANMAN.",
            impact: "Enhances basic services and socio-economic status of tribal communities.",
        },
    ),
    (
        "DAJGUA",
        SchemeMeta {
            reason: "Village has significant tribal presence needing focused development.",
            benefit: "Converged tribal area development (infrastructure, services, livelihoods).",
            impact: "Improves long-term living conditions in tribal hamlets.",
        },
    ),
    (
        "MGNREGA_COMM",
        SchemeMeta {
            reason: "High dependency on wage labour in the community.",
            benefit: "Creation of community assets via MGNREGA (ponds, roads, land development).",
            impact: "Supports livelihoods while building durable infrastructure.",
        },
    ),
    (
        "NRLM_VO",
        SchemeMeta {
            reason: "Presence of SHG/VO federations in the village.",
            benefit: "Strengthening of SHG institutions and village organisations under NRLM.",
            impact: "Improves financial inclusion, women’s empowerment and local governance.",
        },
    ),
    (
        "TRIBALPROD_COMM",
        SchemeMeta {
            reason: "Community shows high dependency on NTFP for livelihoods.",
            benefit: "Support for NTFP collection, value-addition and marketing.",
            impact: "Increases and stabilises incomes from forest-based products.",
        },
    ),
    (
        "GRANTINAID_VO",
        SchemeMeta {
            reason: "SHG/VO present in an environmentally vulnerable (drought/flood prone) village.",
            benefit: "Grant-in-aid to voluntary organisations working for ST welfare.",
            impact: "Strengthens resilience and welfare programmes for tribal communities.",
        },
    ),
];
