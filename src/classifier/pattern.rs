//! Glob-to-regex translation
//!
//! Only two wildcards are understood:
//! - `**` matches any run of characters, path separators included
//! - `*` matches any run of characters except `/`
//!
//! Everything else is literal text. There are no character classes, brace
//! sets or negations, and a trailing `/**` needs at least one more character
//! after the slash to match.

use regex::Regex;

use super::PatternError;

/// A compiled, fully-anchored glob pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let translated = translate(source);
        let regex = Regex::new(&translated).map_err(|e| PatternError::Compile {
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Pattern text as written in the profile
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `path` fully matches (case-sensitive)
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Translate a glob into an anchored regex source string
pub fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');

    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '*' {
            literal.push(c);
            continue;
        }

        out.push_str(&regex::escape(&literal));
        literal.clear();

        if chars.peek() == Some(&'*') {
            chars.next();
            out.push_str(".*");
        } else {
            out.push_str("[^/]*");
        }
    }
    out.push_str(&regex::escape(&literal));

    out.push('$');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        Pattern::new(pattern).expect("pattern compiles").matches(path)
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("package.json"), r"^package\.json$");
        assert_eq!(translate("src/**"), "^src/.*$");
        assert_eq!(translate("**/*.md"), r"^.*/[^/]*\.md$");
        assert_eq!(translate("**/*.test.*"), r"^.*/[^/]*\.test\.[^/]*$");
    }

    #[test]
    fn test_literal_dot() {
        assert!(matches("package.json", "package.json"));
        assert!(!matches("package.json", "packageXjson"));
    }

    #[test]
    fn test_full_path_anchoring() {
        assert!(!matches("package.json", "packages/wxt/package.json"));
        assert!(!matches("src", "src/index.ts"));
        assert!(!matches("index.ts", "src/index.ts.bak"));
    }

    #[test]
    fn test_double_star_crosses_separators() {
        assert!(matches("packages/wxt/src/**", "packages/wxt/src/index.ts"));
        assert!(matches(
            "packages/wxt/src/**",
            "packages/wxt/src/core/utils/deep/file.ts"
        ));
        assert!(matches("**/test/**", "packages/wxt/test/setup.ts"));
    }

    #[test]
    fn test_trailing_double_star_needs_more_path() {
        assert!(!matches("packages/wxt/src/**", "packages/wxt/src"));
        assert!(matches("packages/wxt/src/**", "packages/wxt/src/"));
    }

    #[test]
    fn test_leading_double_star_needs_separator() {
        assert!(matches("**/*.md", "docs/guide.md"));
        assert!(!matches("**/*.md", "README.md"));
    }

    #[test]
    fn test_single_star_stays_in_segment() {
        assert!(matches("src/*.ts", "src/index.ts"));
        assert!(!matches("src/*.ts", "src/nested/index.ts"));
        assert!(matches("**/*.test.*", "packages/wxt/src/index.test.ts"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches("README.md", "readme.md"));
        assert!(!matches("**/Tests/**", "pkg/tests/a.ts"));
    }

    #[test]
    fn test_unsupported_syntax_is_literal() {
        assert!(!matches("src/[ab].ts", "src/a.ts"));
        assert!(matches("src/[ab].ts", "src/[ab].ts"));
        assert!(!matches("src/{a,b}.ts", "src/a.ts"));
        assert!(matches("src/{a,b}.ts", "src/{a,b}.ts"));
        assert!(!matches("!docs/**", "docs/a.md"));
    }

    #[test]
    fn test_display_keeps_source() {
        let pattern = Pattern::new("**/*.snap").unwrap();
        assert_eq!(pattern.to_string(), "**/*.snap");
        assert_eq!(pattern.as_str(), "**/*.snap");
    }
}
