//! Include/exclude filtering of performance entity types.

use regex::Regex;

/// Glob filter over entity type names.
///
/// Patterns support `*` (any run of characters) and `?` (one character) and
/// must match the whole name. An empty include list matches every name; a
/// matching exclude pattern always wins.
#[derive(Debug, Clone)]
pub struct EntityFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl EntityFilter {
    /// Compiles the include and exclude glob lists.
    ///
    /// # Errors
    ///
    /// Returns the regex error for a pattern that compiles to an oversized
    /// expression.
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self, regex::Error> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// A filter that matches every name.
    #[must_use]
    pub fn all() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|re| re.is_match(name));
        included && !self.exclude.iter().any(|re| re.is_match(name))
    }
}

fn compile<S: AsRef<str>>(globs: &[S]) -> Result<Vec<Regex>, regex::Error> {
    globs.iter().map(|glob| glob_to_regex(glob.as_ref())).collect()
}

fn glob_to_regex(glob: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::with_capacity(glob.len() + 8);
    pattern.push('^');
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            other => pattern.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    Regex::new(&pattern)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_include_matches_everything() {
        let filter = EntityFilter::new::<&str>(&[], &[]).unwrap();
        assert!(filter.matches("cluster-domclient"));
        assert!(filter.matches(""));
    }

    #[test]
    fn globs_match_whole_name() {
        let filter = EntityFilter::new(&["cluster-*", "host-dom?lient"], &[]).unwrap();
        assert!(filter.matches("cluster-domcompmgr"));
        assert!(filter.matches("host-domclient"));
        assert!(!filter.matches("host-domcompmgr"));
        assert!(!filter.matches("vsan-cluster-domclient"));
    }

    #[test]
    fn exclude_wins_over_include() {
        let filter = EntityFilter::new(&["*"], &["*-disk*", "vscsi"]).unwrap();
        assert!(filter.matches("cache-disk"));
        assert!(!filter.matches("capacity-disk"));
        assert!(!filter.matches("vscsi"));
        assert!(filter.matches("vsan-pnic-net"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let filter = EntityFilter::new(&["a.b+"], &[]).unwrap();
        assert!(filter.matches("a.b+"));
        assert!(!filter.matches("axbb"));
    }

    proptest! {
        #[test]
        fn star_matches_any_name(name in "[a-z\\-]{0,24}") {
            let filter = EntityFilter::new(&["*"], &[]).unwrap();
            prop_assert!(filter.matches(&name));
        }

        #[test]
        fn exact_pattern_matches_only_itself(a in "[a-z\\-]{1,16}", b in "[a-z\\-]{1,16}") {
            let filter = EntityFilter::new(&[a.as_str()], &[]).unwrap();
            prop_assert!(filter.matches(&a));
            prop_assert_eq!(filter.matches(&b), a == b);
        }

        #[test]
        fn excluded_name_never_matches(name in "[a-z\\-]{1,16}") {
            let filter = EntityFilter::new(&["*"], &[name.as_str()]).unwrap();
            prop_assert!(!filter.matches(&name));
        }
    }
}
