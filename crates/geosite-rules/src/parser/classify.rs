//! Line classifier for domain-list-community rule sets.
//!
//! Recognized line shapes, checked in this order on the trimmed line:
//!
//! | Line                | Outcome                    |
//! |---------------------|----------------------------|
//! | empty               | `Blank`                    |
//! | `# ...`             | `Comment`                  |
//! | `regexp:...`        | `RegexIgnored`             |
//! | `include:name`      | `Include(name)`            |
//! | `full:domain attrs` | `FullDomain(domain)`       |
//! | `domain attrs`      | `SuffixDomain(domain)`     |
//!
//! Classification never fails; a directive with an empty payload is `Blank`.

use crate::rule::{ClassifiedLine, RuleSetName};

const COMMENT_PREFIX: char = '#';
const REGEXP_PREFIX: &str = "regexp:";
const INCLUDE_PREFIX: &str = "include:";
const FULL_PREFIX: &str = "full:";

/// Classify a single raw line.
pub fn classify(line: &str) -> ClassifiedLine {
    let line = line.trim();
    if line.is_empty() {
        return ClassifiedLine::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return ClassifiedLine::Comment;
    }
    if line.starts_with(REGEXP_PREFIX) {
        return ClassifiedLine::RegexIgnored;
    }
    if let Some(target) = line.strip_prefix(INCLUDE_PREFIX) {
        let target = target.trim();
        if target.is_empty() {
            return ClassifiedLine::Blank;
        }
        return ClassifiedLine::Include(RuleSetName::from(target));
    }
    if let Some(rest) = line.strip_prefix(FULL_PREFIX) {
        return match clean_content(rest) {
            "" => ClassifiedLine::Blank,
            domain => ClassifiedLine::FullDomain(domain.to_string()),
        };
    }
    // The suffix path drops empty values the same way `full:` does.
    match clean_content(line) {
        "" => ClassifiedLine::Blank,
        domain => ClassifiedLine::SuffixDomain(domain.to_string()),
    }
}

/// Strip a trailing inline annotation such as `@ads` or `@cn`.
///
/// Returns the text before the first space, trimmed, or the whole input
/// trimmed when it has no space.
pub fn clean_content(content: &str) -> &str {
    let content = content.trim();
    match content.find(' ') {
        Some(idx) => content[..idx].trim(),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_lines() {
        assert_eq!(classify(""), ClassifiedLine::Blank);
        assert_eq!(classify("   "), ClassifiedLine::Blank);
        assert_eq!(classify("\t \t"), ClassifiedLine::Blank);
    }

    #[test]
    fn comment_lines() {
        assert_eq!(classify("# comment"), ClassifiedLine::Comment);
        assert_eq!(classify("   #indented"), ClassifiedLine::Comment);
        assert_eq!(classify("#"), ClassifiedLine::Comment);
    }

    #[test]
    fn regexp_lines_are_ignored() {
        assert_eq!(
            classify(r"regexp:ads\.example\.com$"),
            ClassifiedLine::RegexIgnored
        );
        assert_eq!(classify("regexp:"), ClassifiedLine::RegexIgnored);
    }

    #[test]
    fn include_lines() {
        assert_eq!(
            classify("include:google"),
            ClassifiedLine::Include("google".into())
        );
        assert_eq!(
            classify("include:  category-ads  "),
            ClassifiedLine::Include("category-ads".into())
        );
    }

    #[test]
    fn include_with_empty_target_is_blank() {
        assert_eq!(classify("include:"), ClassifiedLine::Blank);
        assert_eq!(classify("include:   "), ClassifiedLine::Blank);
    }

    #[test]
    fn full_lines_strip_annotations() {
        assert_eq!(
            classify("full: exact.example.com annotation"),
            ClassifiedLine::FullDomain("exact.example.com".into())
        );
        assert_eq!(
            classify("full:www.example.com @cn"),
            ClassifiedLine::FullDomain("www.example.com".into())
        );
    }

    #[test]
    fn full_with_empty_value_is_blank() {
        assert_eq!(classify("full:"), ClassifiedLine::Blank);
        assert_eq!(classify("full:    "), ClassifiedLine::Blank);
    }

    #[test]
    fn bare_lines_are_suffix_domains() {
        assert_eq!(
            classify("suffix.example.org"),
            ClassifiedLine::SuffixDomain("suffix.example.org".into())
        );
        assert_eq!(
            classify("  example.com @ads  "),
            ClassifiedLine::SuffixDomain("example.com".into())
        );
    }

    #[test]
    fn unknown_prefixes_fall_through_to_suffix() {
        // Only the fixed set of prefixes is recognized.
        assert_eq!(
            classify("domain:example.com"),
            ClassifiedLine::SuffixDomain("domain:example.com".into())
        );
        assert_eq!(
            classify("keyword:google"),
            ClassifiedLine::SuffixDomain("keyword:google".into())
        );
    }

    #[test]
    fn prefixes_are_case_sensitive() {
        assert_eq!(
            classify("FULL:example.com"),
            ClassifiedLine::SuffixDomain("FULL:example.com".into())
        );
    }

    #[test]
    fn classify_is_total() {
        let samples = [
            "", " ", "#", "regexp:", "include:", "full:", "x", "full: a b c",
            "include:a b", "\u{00e9}xample.com", "a\tb", "::::",
        ];
        for s in samples {
            // Must not panic; any variant is acceptable.
            let _ = classify(s);
        }
    }

    #[test]
    fn clean_content_stops_at_first_space() {
        assert_eq!(clean_content("example.com @ads @cn"), "example.com");
        assert_eq!(clean_content("  example.com  "), "example.com");
        assert_eq!(clean_content(""), "");
    }

    #[test]
    fn clean_content_only_splits_on_spaces() {
        assert_eq!(clean_content("example.com\t@ads"), "example.com\t@ads");
    }

    #[test]
    fn clean_content_is_idempotent() {
        for s in ["example.com", "a.b.c @x", "  spaced  out  ", ""] {
            let once = clean_content(s);
            assert_eq!(clean_content(once), once);
        }
    }
}
