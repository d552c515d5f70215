//! Scheme recommendation metadata shown in the claim details modal.

/// Placeholder for any field of an unknown scheme
pub const PLACEHOLDER: &str = "N/A";

/// Known welfare schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeName {
    PmayG,
    PmKisan,
    Mgnrega,
    Jjm,
    Dajgua,
}

impl SchemeName {
    pub const ALL: [SchemeName; 5] = [
        SchemeName::PmayG,
        SchemeName::PmKisan,
        SchemeName::Mgnrega,
        SchemeName::Jjm,
        SchemeName::Dajgua,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeName::PmayG => "PMAY-G",
            SchemeName::PmKisan => "PM-KISAN",
            SchemeName::Mgnrega => "MGNREGA",
            SchemeName::Jjm => "JJM",
            SchemeName::Dajgua => "DAJGUA",
        }
    }

    /// Exact, case-sensitive match on the display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn info(&self) -> SchemeInfo {
        match self {
            SchemeName::PmayG => SchemeInfo {
                reason: "Beneficiary has kutcha or semi-pucca house and low income.",
                benefits: "₹1.3–1.95 lakh for construction of pucca house.",
                impact: "Improves housing security and reduces vulnerability.",
                suggestion: "Assist claimant to open bank account if not available.",
            },
            SchemeName::PmKisan => SchemeInfo {
                reason: "Claimant depends on agriculture for livelihood.",
                benefits: "₹6,000 per year income support.",
                impact: "Ensures stable seasonal income.",
                suggestion: "Link land record after IFR approval.",
            },
            SchemeName::Mgnrega => SchemeInfo {
                reason: "Livelihood vulnerability and need for wage support.",
                benefits: "100 days guaranteed wage employment.",
                impact: "Strengthens income security.",
                suggestion: "Prioritize forest restoration activities.",
            },
            SchemeName::Jjm => SchemeInfo {
                reason: "Village lacks adequate water supply coverage.",
                benefits: "Tap water connection for all households.",
                impact: "Improves health and reduces drudgery.",
                suggestion: "Train community water committee.",
            },
            SchemeName::Dajgua => SchemeInfo {
                reason: "Need for community governance strengthening.",
                benefits: "Funding for Gram Sabha-led development.",
                impact: "Improves local self-governance.",
                suggestion: "Conduct regular meetings for monitoring.",
            },
        }
    }
}

/// Static descriptive text for a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeInfo {
    pub reason: &'static str,
    pub benefits: &'static str,
    pub impact: &'static str,
    pub suggestion: &'static str,
}

impl SchemeInfo {
    pub const fn placeholder() -> Self {
        Self {
            reason: PLACEHOLDER,
            benefits: PLACEHOLDER,
            impact: PLACEHOLDER,
            suggestion: PLACEHOLDER,
        }
    }
}

/// Look up scheme text by name, falling back to placeholders
pub fn scheme_info(name: &str) -> SchemeInfo {
    match SchemeName::from_name(name) {
        Some(scheme) => scheme.info(),
        None => {
            tracing::debug!(scheme = name, "no scheme info, using placeholder");
            SchemeInfo::placeholder()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_scheme_resolves() {
        for scheme in SchemeName::ALL {
            let info = scheme_info(scheme.as_str());
            assert_eq!(info, scheme.info());
            assert_ne!(info.reason, PLACEHOLDER);
            assert_ne!(info.benefits, PLACEHOLDER);
            assert_ne!(info.impact, PLACEHOLDER);
            assert_ne!(info.suggestion, PLACEHOLDER);
        }
    }

    #[test]
    fn test_known_scheme_exact_text() {
        let info = scheme_info("PM-KISAN");
        assert_eq!(info.reason, "Claimant depends on agriculture for livelihood.");
        assert_eq!(info.benefits, "₹6,000 per year income support.");
        assert_eq!(info.impact, "Ensures stable seasonal income.");
        assert_eq!(info.suggestion, "Link land record after IFR approval.");
    }

    #[test]
    fn test_unknown_scheme_uses_placeholder() {
        for name in ["NSAP", "", "pmay-g", "JJM "] {
            assert_eq!(scheme_info(name), SchemeInfo::placeholder());
        }
    }

    #[test]
    fn test_from_name_round_trips_all() {
        for scheme in SchemeName::ALL {
            assert_eq!(SchemeName::from_name(scheme.as_str()), Some(scheme));
        }
    }
}
