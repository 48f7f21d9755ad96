//! Free-text country labels to canonical regions
//!
//! CMS editors type country names in several languages and as ISO codes.
//! Keys are stored trimmed and lower-cased.

use std::collections::HashMap;
use lazy_static::lazy_static;

use super::country::Country;

lazy_static! {
    static ref COUNTRY_ALIASES: HashMap<&'static str, Country> = {
        let mut aliases = HashMap::new();

        for label in ["deutschland", "germany", "de", "deu"] {
            aliases.insert(label, Country::Germany);
        }
        for label in ["österreich", "oesterreich", "austria", "at", "aut"] {
            aliases.insert(label, Country::Austria);
        }
        for label in ["schweiz", "switzerland", "suisse", "svizzera", "ch", "che"] {
            aliases.insert(label, Country::Switzerland);
        }

        aliases
    };
}

/// Resolve a free-text country label
///
/// Matching ignores case and surrounding whitespace.
pub fn resolve_alias(label: &str) -> Option<Country> {
    let key = label.trim().to_lowercase();
    COUNTRY_ALIASES.get(key.as_str()).copied()
}

/// All known labels with their country, sorted by label
pub fn aliases() -> Vec<(&'static str, Country)> {
    let mut entries: Vec<_> = COUNTRY_ALIASES.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
