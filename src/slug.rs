//! Company code derivation: a company's name becomes its lowercase, URL-safe code.

use deunicode::deunicode;

/// Slugify a company name into its code.
/// e.g. "Apple" -> "apple", "Eataly NYC" -> "eataly-nyc", "AT&T, Inc." -> "atandt-inc"
///
/// The name is transliterated to ASCII first ("Café" -> "Cafe"), `&` becomes `and`.
/// ASCII alphanumerics (and `_`) are kept and lowercased, runs of whitespace or `-` collapse
/// to a single `-`, everything else is dropped. Leading and trailing separators are trimmed.
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        let word: Option<&str> = if c == '&' { Some("and") } else { None };
        if c.is_ascii_alphanumeric() || c == '_' || word.is_some() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            match word {
                Some(w) => out.push_str(w),
                None => out.push(c.to_ascii_lowercase()),
            }
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_single_word() {
        assert_eq!(slugify("Apple"), "apple");
        assert_eq!(slugify("IBM"), "ibm");
    }

    #[test]
    fn joins_words_with_dashes() {
        assert_eq!(slugify("Eataly NYC"), "eataly-nyc");
        assert_eq!(slugify("  Blue   Bottle  Coffee "), "blue-bottle-coffee");
        assert_eq!(slugify("Coca - Cola"), "coca-cola");
    }

    #[test]
    fn ampersand_becomes_and() {
        assert_eq!(slugify("AT&T, Inc."), "atandt-inc");
        assert_eq!(slugify("Johnson & Johnson"), "johnson-and-johnson");
    }

    #[test]
    fn drops_punctuation() {
        assert_eq!(slugify("Yahoo!"), "yahoo");
    }

    #[test]
    fn transliterates_to_ascii() {
        assert_eq!(slugify("Café Ñandú"), "cafe-nandu");
        assert_eq!(slugify("Müller Straße"), "muller-strasse");
        assert!(slugify("Société Générale").is_ascii());
    }

    #[test]
    fn punctuation_only_name_is_empty() {
        assert_eq!(slugify("!!! ---"), "");
    }
}
