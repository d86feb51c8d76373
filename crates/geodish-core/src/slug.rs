//! Asset slug derivation
//!
//! Dish images are published under deterministic filenames derived from the
//! dish name. The derivation must match the server's convention exactly or
//! image probes will always miss.

/// Derive the asset slug for a dish name.
///
/// Lowercases the name, collapses each run of whitespace into a single
/// hyphen, then strips every character outside `[a-z0-9-]`.
///
/// ```rust
/// use geodish_core::slug::dish_slug;
/// assert_eq!(dish_slug("Pad  Thai!"), "pad-thai");
/// ```
pub fn dish_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                out.push(ch);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_basic() {
        assert_eq!(dish_slug("Sushi"), "sushi");
        assert_eq!(dish_slug("Pizza Margherita"), "pizza-margherita");
    }

    #[test]
    fn test_slug_collapses_whitespace_runs() {
        assert_eq!(dish_slug("Pad  Thai!"), "pad-thai");
        assert_eq!(dish_slug("a \t b"), "a-b");
    }

    #[test]
    fn test_slug_strips_punctuation() {
        // Each whitespace run becomes a hyphen before stripping, so a
        // stripped word leaves both hyphens behind
        assert_eq!(dish_slug("Fish & Chips"), "fish--chips");
        assert_eq!(dish_slug("Crème brûlée"), "crme-brle");
    }

    #[test]
    fn test_slug_keeps_digits_and_hyphens() {
        assert_eq!(dish_slug("7-Layer Dip"), "7-layer-dip");
    }

    #[test]
    fn test_slug_empty_and_symbol_only() {
        assert_eq!(dish_slug(""), "");
        assert_eq!(dish_slug("!!!"), "");
    }
}
