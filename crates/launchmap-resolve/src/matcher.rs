//! Capability token matching strategies.
//!
//! The capability injector only asks "does this token select this source?".
//! Keeping that predicate behind [`TokenMatcher`] lets stricter matching be
//! swapped in without touching the injector or the pipeline.

use globset::GlobBuilder;
use serde::{Deserialize, Serialize};

/// A token bound to a matcher, tested against many sources.
pub type SourcePredicate<'a> = Box<dyn Fn(&str) -> bool + Send + Sync + 'a>;

/// Decides whether a capability token selects a remap rule source.
pub trait TokenMatcher: Send + Sync {
    /// Returns `true` if `source` should be rewritten for `token`.
    fn matches(&self, token: &str, source: &str) -> bool;

    /// Prepare `token` once for checks against every rule source.
    ///
    /// Matchers with per-token setup cost override this.
    fn compile<'a>(&'a self, token: &'a str) -> SourcePredicate<'a> {
        Box::new(move |source: &str| self.matches(token, source))
    }
}

/// Token appears anywhere in the source.
///
/// Deliberately loose: `/camera/image` selects both `/camera/image_raw` and
/// `/camera/image_raw/compressed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TokenMatcher for SubstringMatcher {
    fn matches(&self, token: &str, source: &str) -> bool {
        source.contains(token)
    }
}

/// Token equals the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl TokenMatcher for ExactMatcher {
    fn matches(&self, token: &str, source: &str) -> bool {
        source == token
    }
}

/// Token is a glob over the whole source; `*` does not cross `/`.
///
/// An invalid glob matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatcher;

impl TokenMatcher for GlobMatcher {
    fn matches(&self, token: &str, source: &str) -> bool {
        self.compile(token)(source)
    }

    fn compile<'a>(&'a self, token: &'a str) -> SourcePredicate<'a> {
        match GlobBuilder::new(token).literal_separator(true).build() {
            Ok(glob) => {
                let matcher = glob.compile_matcher();
                Box::new(move |source: &str| matcher.is_match(source))
            },
            Err(_) => Box::new(|_: &str| false),
        }
    }
}

static SUBSTRING: SubstringMatcher = SubstringMatcher;
static EXACT: ExactMatcher = ExactMatcher;
static GLOB: GlobMatcher = GlobMatcher;

/// Built-in matcher selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// [`SubstringMatcher`].
    #[default]
    Substring,
    /// [`ExactMatcher`].
    Exact,
    /// [`GlobMatcher`].
    Glob,
}

impl MatchStrategy {
    /// The matcher implementing this strategy.
    #[must_use]
    pub fn matcher(self) -> &'static dyn TokenMatcher {
        match self {
            Self::Substring => &SUBSTRING,
            Self::Exact => &EXACT,
            Self::Glob => &GLOB,
        }
    }
}
