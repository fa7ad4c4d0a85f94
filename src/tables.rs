//! Code tables for enrichment lookups.
//!
//! Maps the export's short codes (rating color hex, numeric country
//! code, price range) to human-readable labels. The tables are
//! immutable configuration injected into the [`Normalizer`] at
//! construction, so tests can substitute alternates without
//! process-wide side effects.
//!
//! [`Normalizer`]: crate::normalize::Normalizer

use rustc_hash::FxHashMap;

// ============================================================================
// EMBEDDED CODE TABLE DATA
// ============================================================================

/// Rating color code → display color. Two distinct codes legitimately
/// render as "darkred"; that is source data, not a typo.
static COLOR_ENTRIES: &[(&str, &str)] = &[
    ("3F7E00", "darkgreen"),
    ("5BA829", "green"),
    ("9ACD32", "lightgreen"),
    ("CDD614", "orange"),
    ("FFBA00", "red"),
    ("CBCBC8", "darkred"),
    ("FF7800", "darkred"),
];

/// Country code → country name, spelled exactly as the dashboard's
/// filter options expect ("New Zeland", "Singapure" included).
static COUNTRY_ENTRIES: &[(u32, &str)] = &[
    (1, "India"),
    (14, "Australia"),
    (30, "Brazil"),
    (37, "Canada"),
    (94, "Indonesia"),
    (148, "New Zeland"),
    (162, "Philippines"),
    (166, "Qatar"),
    (184, "Singapure"),
    (189, "South Africa"),
    (191, "Sri Lanka"),
    (208, "Turkey"),
    (214, "United Arab Emirates"),
    (215, "England"),
    (216, "United States of America"),
];

/// Price tier for a raw `price_range` value.
///
/// Total by construction: anything outside 1..=3 (including values ≥ 4
/// present in some exports) is "gourmet", never an error.
pub fn price_type(price_range: u32) -> &'static str {
    match price_range {
        1 => "cheap",
        2 => "normal",
        3 => "expensive",
        _ => "gourmet",
    }
}

/// Exact-keyed lookup tables for the two code columns.
#[derive(Debug, Clone)]
pub struct CodeTables {
    colors: FxHashMap<String, String>,
    countries: FxHashMap<u32, String>,
}

impl CodeTables {
    /// Build tables from caller-supplied mappings.
    pub fn new(colors: FxHashMap<String, String>, countries: FxHashMap<u32, String>) -> Self {
        Self { colors, countries }
    }

    /// The fixed tables shipped with the dashboard (7 colors, 15 countries).
    pub fn builtin() -> Self {
        let colors = COLOR_ENTRIES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        let countries = COUNTRY_ENTRIES
            .iter()
            .map(|(code, name)| (*code, name.to_string()))
            .collect();
        Self { colors, countries }
    }

    pub fn color_name(&self, code: &str) -> Option<&str> {
        self.colors.get(code).map(String::as_str)
    }

    pub fn country_name(&self, code: u32) -> Option<&str> {
        self.countries.get(&code).map(String::as_str)
    }

    /// All mapped country names, sorted. The presentation layer's
    /// country selector is populated from this range.
    pub fn country_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.countries.values().cloned().collect();
        names.sort();
        names
    }
}

impl Default for CodeTables {
    fn default() -> Self {
        Self::builtin()
    }
}
