//! Icon glyphs for the TUI.
//!
//! Plain Unicode characters that render in any reasonable terminal; no
//! Nerd Font requirement.

use geodish_app::AlertSeverity;

/// Marker for the selected country tile
pub const PIN: &str = "\u{25cf}"; // ●

/// Marker for unselected tiles
pub const DOT: &str = "\u{25cb}"; // ○

/// Shown while a fetch is in flight
pub const SPINNER: &str = "\u{27f3}"; // ⟳

/// Severity glyph for an alert line
pub fn alert_glyph(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Info => "\u{2139}",    // ℹ
        AlertSeverity::Success => "\u{2713}", // ✓
        AlertSeverity::Warning => "\u{26a0}", // ⚠
        AlertSeverity::Danger => "\u{2717}",  // ✗
    }
}

/// Shown for countries without a known flag glyph
pub const NEUTRAL_FLAG: &str = "\u{1f3f3}"; // 🏳

/// Flag glyphs keyed by country display name (case-insensitive)
const COUNTRY_FLAGS: &[(&str, &str)] = &[
    ("brazil", "🇧🇷"),
    ("china", "🇨🇳"),
    ("ethiopia", "🇪🇹"),
    ("france", "🇫🇷"),
    ("germany", "🇩🇪"),
    ("greece", "🇬🇷"),
    ("india", "🇮🇳"),
    ("italy", "🇮🇹"),
    ("japan", "🇯🇵"),
    ("lebanon", "🇱🇧"),
    ("mexico", "🇲🇽"),
    ("morocco", "🇲🇦"),
    ("peru", "🇵🇪"),
    ("south korea", "🇰🇷"),
    ("spain", "🇪🇸"),
    ("thailand", "🇹🇭"),
    ("turkey", "🇹🇷"),
    ("united kingdom", "🇬🇧"),
    ("united states", "🇺🇸"),
    ("vietnam", "🇻🇳"),
];

/// Look up a country's flag glyph, falling back to [`NEUTRAL_FLAG`].
pub fn country_flag(country: &str) -> &'static str {
    let key = country.trim().to_lowercase();
    COUNTRY_FLAGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, flag)| *flag)
        .unwrap_or(NEUTRAL_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_flag_lookup_is_case_insensitive() {
        assert_eq!(country_flag("Japan"), "🇯🇵");
        assert_eq!(country_flag("japan"), "🇯🇵");
        assert_eq!(country_flag("SOUTH KOREA"), "🇰🇷");
    }

    #[test]
    fn test_unknown_country_gets_neutral_flag() {
        assert_eq!(country_flag("Atlantis"), NEUTRAL_FLAG);
    }
}
