//! Individual forest rights (IFR) rules: twelve household-level schemes.

use super::{Row, RuleError, SchemeMeta};

const TRUTHY: &[&str] = &["yes", "true", "1"];

/// Education levels in ascending order
const EDUCATION_LEVELS: [&str; 9] = [
    "illiterate",
    "primary",
    "middle",
    "high school",
    "higher secondary",
    "diploma",
    "graduation",
    "post graduation",
    "phd",
];

/// Rank of an education level; unknown levels rank as illiterate
fn education_rank(level: &str) -> usize {
    EDUCATION_LEVELS
        .iter()
        .position(|l| *l == level.trim())
        .unwrap_or(0)
}

pub(super) fn labels(row: &Row) -> Result<Vec<(&'static str, bool)>, RuleError> {
    let st = row.is_one_of("is_st", "no", TRUTHY);
    let shg = row.is_one_of("shg_membership", "no", TRUTHY);
    let livelihood = row.text("primary_livelihood", "");
    let children = row.text("school_going_children", "no") == "yes";
    let education = education_rank(&row.text("highest_education_level", "illiterate"));

    let income = row.number("annual_income", 0.0)?;
    let age = row.number("age_of_claimant", 0.0)?;
    let cultivation_area = row.number("cultivation_area", 0.0)?;
    let elderly = row.number("elderly_count_60plus", 0.0)?;

    Ok(vec![
        ("PMAYG", row.text("house_type", "") == "kutcha"),
        (
            "PMKISAN",
            row.text("cultivable_land_ownership", "no") == "yes"
                && cultivation_area > 0.0
                && matches!(livelihood.as_str(), "agriculture" | "farmer"),
        ),
        ("MGNREGA_INDIV", livelihood == "wage labour" || income < 60000.0),
        ("NRLM_INDIV", shg),
        ("DDUGKY", (18.0..=35.0).contains(&age)),
        ("EMRS", st && children),
        (
            "PREMATRIC_ST",
            st && children && education <= education_rank("high school"),
        ),
        (
            "POSTMATRIC_ST",
            st && education >= education_rank("higher secondary"),
        ),
        (
            "NATFELLOWSHIP_ST",
            st && education >= education_rank("graduation"),
        ),
        (
            "NSAP",
            age >= 60.0 || elderly > 0.0 || row.text("disability_in_household", "no") == "yes",
        ),
        ("PMGKAY", income < 80000.0),
        (
            "TRIBALPROD_INDIV",
            st && matches!(
                livelihood.as_str(),
                "ntfp" | "forest produce" | "artisan" | "handicraft"
            ),
        ),
    ])
}

pub(super) const FALLBACK: SchemeMeta = SchemeMeta {
    reason: "Eligibility based on livelihood and vulnerability.",
    benefit: "Direct household-level support.",
    impact: "Improves long-term livelihood security.",
};

pub(super) const META: &[(&str, SchemeMeta)] = &[
    (
        "PMAYG",
        SchemeMeta {
            reason: "Kutcha or weak housing makes the household eligible for PMAY–G.",
            benefit: "Support to construct or upgrade a pucca house.",
            impact: "Improves long-term housing security and dignity.",
        },
    ),
    (
        "PMKISAN",
        SchemeMeta {
            reason: "Cultivable land and farming livelihood detected.",
            benefit: "Direct income support to farmer household.",
            impact: "Reduces seasonal financial stress and supports cultivation.",
        },
    ),
    (
        "MGNREGA_INDIV",
        SchemeMeta {
            reason: "Low income or wage labour dependence.",
            benefit: "Guaranteed wage employment for willing workers.",
            impact: "Stabilises income and helps meet basic needs.",
        },
    ),
    (
        "NRLM_INDIV",
        SchemeMeta {
            reason: "Self-Help Group membership in the household.",
            benefit: "Access to SHG-based credit and livelihood support.",
            impact: "Strengthens women’s economic role and resilience.",
        },
    ),
    (
        "DDUGKY",
        SchemeMeta {
            reason: "Youth in the age band for skill training.",
            benefit: "Skill development and placement support.",
            impact: "Improves employability and non-farm livelihoods.",
        },
    ),
    (
        "EMRS",
        SchemeMeta {
            reason: "ST household with school-going children.",
            benefit: "Residential schooling under EMRS.",
            impact: "Improves education outcomes for tribal children.",
        },
    ),
    (
        "PREMATRIC_ST",
        SchemeMeta {
            reason: "ST child at pre-matric education level.",
            benefit: "Scholarship support for school education.",
            impact: "Reduces dropouts and encourages continued schooling.",
        },
    ),
    (
        "POSTMATRIC_ST",
        SchemeMeta {
            reason: "ST student in higher secondary or beyond.",
            benefit: "Scholarship for post-matric education.",
            impact: "Improves access to higher education and careers.",
        },
    ),
    (
        "NATFELLOWSHIP_ST",
        SchemeMeta {
            reason: "ST candidate with graduation or higher.",
            benefit: "Fellowship for advanced studies/research.",
            impact: "Builds long-term academic and leadership capacity.",
        },
    ),
    (
        "NSAP",
        SchemeMeta {
            reason: "Elderly, widow or disabled member in household.",
            benefit: "Social pension support.",
            impact: "Provides minimum income security to vulnerable persons.",
        },
    ),
    (
        "PMGKAY",
        SchemeMeta {
            reason: "Low-income household with food security needs.",
            benefit: "Free/subsidised food grain support.",
            impact: "Reduces hunger and improves nutritional security.",
        },
    ),
    (
        "TRIBALPROD_INDIV",
        SchemeMeta {
            reason: "Livelihood depends on NTFP/forest produce/handicrafts.",
            benefit: "Support for marketing and value addition of tribal products.",
            impact: "Enhances income from traditional livelihoods.",
        },
    ),
];
