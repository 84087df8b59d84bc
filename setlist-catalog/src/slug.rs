/// Derive a URL-safe song id from a title.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// hyphens, then folds every run of whitespace and hyphens into a single
/// hyphen. Leading and trailing hyphens are trimmed.
pub fn create_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
        // anything else is dropped without breaking the word
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apostrophes_are_stripped() {
        assert_eq!(create_slug("Don't Stop Believin'"), "dont-stop-believin");
    }

    #[test]
    fn test_whitespace_and_hyphens_collapse() {
        assert_eq!(create_slug("Semi-Charmed   Life"), "semi-charmed-life");
        assert_eq!(create_slug("34 + 35"), "34-35");
        assert_eq!(create_slug("Hot - n - Cold"), "hot-n-cold");
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        assert_eq!(create_slug("Señorita"), "seorita");
        assert_eq!(create_slug("Bésame Mucho"), "bsame-mucho");
    }

    #[test]
    fn test_punctuation_only_edges_are_trimmed() {
        assert_eq!(create_slug("Thank U, Next"), "thank-u-next");
        assert_eq!(create_slug("  (Intro) "), "intro");
        assert_eq!(create_slug("Mr. Brightside"), "mr-brightside");
        assert_eq!(create_slug("!!!"), "");
    }
}
