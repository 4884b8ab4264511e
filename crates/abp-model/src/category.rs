//! Category taxonomy: exclusion set and coarse classification.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Detailed categories removed before classification. Matched case-sensitively.
pub const EXCLUDED_CATEGORIES: [&str; 3] = ["Land and Pathways", "Street Furniture", "Utilities"];

/// Lowercased detailed categories classified as residential.
pub const RESIDENTIAL_CATEGORIES: [&str; 3] =
    ["residential", "multi-occupancy residential", "unclassified"];

/// Lowercased detailed categories classified as business.
pub const BUSINESS_CATEGORIES: [&str; 6] = [
    "industrial",
    "leisure",
    "multi-occupancy commercial",
    "place of worship",
    "public sectors",
    "pubs and hotels",
];

/// Returns true when the detailed category is in the exclusion set.
///
/// Exact comparison: "utilities" is not excluded here.
pub fn is_excluded(category: &str) -> bool {
    EXCLUDED_CATEGORIES.contains(&category)
}

/// Coarse classification written to the `main_category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MainCategory {
    Residential,
    Business,
    Other,
}

impl MainCategory {
    /// Classifies a detailed category label.
    ///
    /// The label is lowercased and compared whole; surrounding whitespace is
    /// not trimmed, so padded labels fall through to `Other`.
    pub fn classify(detailed: &str) -> Self {
        let lowered = detailed.to_lowercase();
        if RESIDENTIAL_CATEGORIES.contains(&lowered.as_str()) {
            MainCategory::Residential
        } else if BUSINESS_CATEGORIES.contains(&lowered.as_str()) {
            MainCategory::Business
        } else {
            MainCategory::Other
        }
    }

    /// Classifies a possibly-missing label; missing labels are `Other`.
    pub fn classify_opt(detailed: Option<&str>) -> Self {
        detailed.map_or(MainCategory::Other, Self::classify)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MainCategory::Residential => "residential",
            MainCategory::Business => "business",
            MainCategory::Other => "other",
        }
    }

    /// True for the residual bucket dropped from the output.
    pub fn is_residual(self) -> bool {
        self == MainCategory::Other
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "residential" => Ok(MainCategory::Residential),
            "business" => Ok(MainCategory::Business),
            "other" => Ok(MainCategory::Other),
            _ => Err(format!("unknown main category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(MainCategory::classify("Residential"), MainCategory::Residential);
        assert_eq!(
            MainCategory::classify("MULTI-OCCUPANCY RESIDENTIAL"),
            MainCategory::Residential
        );
        assert_eq!(MainCategory::classify("Unclassified"), MainCategory::Residential);
        assert_eq!(MainCategory::classify("Pubs and Hotels"), MainCategory::Business);
        assert_eq!(MainCategory::classify("Place Of Worship"), MainCategory::Business);
    }

    #[test]
    fn test_classify_fallthrough() {
        assert_eq!(MainCategory::classify("Zoo"), MainCategory::Other);
        assert_eq!(MainCategory::classify(" Residential"), MainCategory::Other);
        assert_eq!(MainCategory::classify("Residential "), MainCategory::Other);
        assert_eq!(MainCategory::classify("industrial estate"), MainCategory::Other);
        assert_eq!(MainCategory::classify(""), MainCategory::Other);
        assert_eq!(MainCategory::classify_opt(None), MainCategory::Other);
    }

    #[test]
    fn test_excluded_categories_are_residual() {
        for category in EXCLUDED_CATEGORIES {
            assert!(MainCategory::classify(category).is_residual());
        }
    }

    #[test]
    fn test_exclusion_is_case_sensitive() {
        assert!(is_excluded("Utilities"));
        assert!(is_excluded("Land and Pathways"));
        assert!(!is_excluded("utilities"));
        assert!(!is_excluded("Street furniture"));
    }

    #[test]
    fn test_round_trip_str() {
        assert_eq!("business".parse::<MainCategory>(), Ok(MainCategory::Business));
        assert!("Business".parse::<MainCategory>().is_err());
        assert_eq!(
            serde_json::to_string(&MainCategory::Residential).unwrap(),
            "\"residential\""
        );
    }
}
