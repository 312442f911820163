//! Shell-style name patterns compiled to anchored regular expressions.

use regex::Regex;

/// A `*`/`?` name pattern.
///
/// `*` becomes `.*`, `?` becomes `.`, and every other character is matched
/// literally. The whole name must match.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let mut source = String::with_capacity(pattern.len() + 8);
        source.push('^');
        let mut buf = [0u8; 4];
        for ch in pattern.chars() {
            match ch {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                other => source.push_str(&regex::escape(other.encode_utf8(&mut buf))),
            }
        }
        source.push('$');
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Regex::new(&source)?,
        })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_is_anchored() {
        let glob = Glob::new("*.js").unwrap();
        assert!(glob.is_match("app.js"));
        assert!(!glob.is_match("app.jsx"));
        assert!(!glob.is_match("app.json"));
    }

    #[test]
    fn question_matches_one_char() {
        let glob = Glob::new("file?.txt").unwrap();
        assert!(glob.is_match("file1.txt"));
        assert!(!glob.is_match("file10.txt"));
        assert!(!glob.is_match("file.txt"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let glob = Glob::new("a+b(1).md").unwrap();
        assert!(glob.is_match("a+b(1).md"));
        assert!(!glob.is_match("aab1.md"));
    }

    #[test]
    fn plain_name_is_exact() {
        let glob = Glob::new("readme").unwrap();
        assert!(glob.is_match("readme"));
        assert!(!glob.is_match("readme.md"));
    }
}
