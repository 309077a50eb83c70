// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Nearest test declaration at a cursor.
//!
//! Each [`Matcher`] recognizes one declaration style and reports its last
//! match before the end of the cursor's line. [`TestLocator`] picks the
//! closest of those, so the lexically nearest declaration wins regardless
//! of style.

use std::sync::LazyLock;

use regex::Regex;

/// Declaration family of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    /// `test "name"` or `def test_name`.
    Test,
    /// `it "name"`.
    It,
}

impl TestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TestKind::Test => "test",
            TestKind::It => "it",
        }
    }
}

/// A test declaration found in a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMatch {
    pub kind: TestKind,
    pub name: String,
    /// Byte offset where the declaration starts.
    pub offset: usize,
}

impl TestMatch {
    /// Name as passed to the runner's `-n` filter.
    ///
    /// `test` names become method-name fragments (whitespace, `#` and `:`
    /// replaced by `_`); `it` names are matched by substring and pass
    /// through as written.
    pub fn filter_name(&self) -> String {
        match self.kind {
            TestKind::Test => self
                .name
                .chars()
                .map(|c| if c.is_whitespace() || c == '#' || c == ':' { '_' } else { c })
                .collect(),
            TestKind::It => self.name.clone(),
        }
    }
}

/// Recognizes one test declaration style.
pub trait Matcher: Send + Sync {
    /// Matcher name (for logging).
    fn name(&self) -> &'static str;

    /// Last declaration lying entirely within `text[..end]`.
    fn find_nearest_before(&self, text: &str, end: usize) -> Option<TestMatch>;
}

#[allow(clippy::expect_used)]
static TEST_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\btest[\s(]+(?:"([^"\n]+)"|'([^'\n]+)')"#).expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static TEST_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bdef\s+test_([A-Za-z0-9_]+[?!]?)").expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static SPEC_IT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bit[\s(]+(?:"([^"\n]+)"|'([^'\n]+)')"#).expect("valid regex pattern")
});

/// Matcher backed by a regex whose first participating group is the name.
pub struct RegexMatcher {
    name: &'static str,
    kind: TestKind,
    pattern: &'static LazyLock<Regex>,
}

impl RegexMatcher {
    /// Minitest string style: `test "name"` / `test 'name'`.
    pub fn test_string() -> Self {
        Self {
            name: "test-string",
            kind: TestKind::Test,
            pattern: &TEST_STRING,
        }
    }

    /// Minitest method style: `def test_name`.
    pub fn test_method() -> Self {
        Self {
            name: "test-method",
            kind: TestKind::Test,
            pattern: &TEST_METHOD,
        }
    }

    /// Spec style: `it "name"` / `it 'name'`.
    pub fn spec_it() -> Self {
        Self {
            name: "spec-it",
            kind: TestKind::It,
            pattern: &SPEC_IT,
        }
    }
}

impl Matcher for RegexMatcher {
    fn name(&self) -> &'static str {
        self.name
    }

    fn find_nearest_before(&self, text: &str, end: usize) -> Option<TestMatch> {
        let haystack = text.get(..end)?;
        let caps = self.pattern.captures_iter(haystack).last()?;
        let whole = caps.get(0)?;
        let name = caps.iter().skip(1).flatten().next()?;
        Some(TestMatch {
            kind: self.kind,
            name: name.as_str().to_string(),
            offset: whole.start(),
        })
    }
}

/// Ordered set of matchers with a closest-match selection.
pub struct TestLocator {
    matchers: Vec<Box<dyn Matcher>>,
}

impl Default for TestLocator {
    /// Minitest string, minitest method and spec `it` styles, in that order.
    fn default() -> Self {
        Self::new(vec![
            Box::new(RegexMatcher::test_string()),
            Box::new(RegexMatcher::test_method()),
            Box::new(RegexMatcher::spec_it()),
        ])
    }
}

impl TestLocator {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Add a matcher after the existing ones.
    pub fn with_matcher(mut self, matcher: Box<dyn Matcher>) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Nearest declaration on or before the cursor's line.
    ///
    /// Ties go to the matcher registered first.
    pub fn nearest_test(&self, text: &str, cursor: usize) -> Option<TestMatch> {
        let end = line_end(text, cursor);
        self.matchers
            .iter()
            .filter_map(|m| {
                let found = m.find_nearest_before(text, end);
                if let Some(ref found) = found {
                    tracing::trace!("{} matched {:?} at {}", m.name(), found.name, found.offset);
                }
                found
            })
            .min_by_key(|found| end - found.offset)
    }
}

/// Nearest declaration using the default matchers.
pub fn nearest_test(text: &str, cursor: usize) -> Option<TestMatch> {
    TestLocator::default().nearest_test(text, cursor)
}

/// Byte offset of the end of the line containing `offset` (the newline's
/// index, or the text length on the last line).
pub fn line_end(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text.as_bytes()[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(text.len(), |pos| offset + pos)
}

/// Byte offset of the start of a 1-based line. Lines past the end clamp to
/// the text length.
pub fn line_offset(text: &str, line: usize) -> usize {
    if line <= 1 {
        return 0;
    }
    text.match_indices('\n')
        .nth(line - 2)
        .map_or(text.len(), |(idx, _)| idx + 1)
}

/// 1-based line number containing `offset`.
pub fn line_number(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
