// crates/addrdb-core/src/text.rs

//! # Locale-aware name matching
//!
//! Everything that compares names goes through a [`Collator`]. At primary
//! strength two strings are equal when they only differ in case or
//! diacritics (`"ÉLYSÉES"` == `"elysees"`), which is achieved by folding both
//! sides with [`fold_key`] before comparing.

use once_cell::unsync::OnceCell;
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for comparison.
///
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use addrdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Comparison strength of a [`Collator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strength {
    /// Ignores case and diacritics.
    #[default]
    Primary,
    /// Plain code point comparison.
    Identical,
}

/// Ordering and equality over names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collator {
    strength: Strength,
}

impl Collator {
    pub fn new(strength: Strength) -> Self {
        Self { strength }
    }

    /// The collator every repository is configured with.
    pub fn primary() -> Self {
        Self::new(Strength::Primary)
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Collation key of `s`. Two strings are equal under this collator iff
    /// their keys are equal.
    pub fn key(&self, s: &str) -> String {
        match self.strength {
            Strength::Primary => fold_key(s),
            Strength::Identical => s.to_string(),
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.strength {
            Strength::Primary => fold_key(a).cmp(&fold_key(b)),
            Strength::Identical => a.cmp(b),
        }
    }

    pub fn equals(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// How a query fragment has to line up with a candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Candidate begins with the fragment.
    StartsWith,
    /// Fragment matches at the beginning or right after any whitespace.
    StartsFromSpace,
    /// Like [`MatchMode::StartsFromSpace`] but never at the beginning.
    StartsFromSpaceNotBeginning,
    /// Fragment appears anywhere. Noticeably slower on large candidate sets.
    Contains,
}

/// Returns `true` if `candidate` matches `fragment` under `mode`.
///
/// ```rust
/// use addrdb_core::text::{matches, Collator, MatchMode};
///
/// let c = Collator::primary();
/// assert!(matches(&c, "Fifth Avenue", "avenue", MatchMode::StartsFromSpace));
/// assert!(!matches(&c, "Fifth Avenue", "fifth", MatchMode::StartsFromSpaceNotBeginning));
/// ```
pub fn matches(collator: &Collator, candidate: &str, fragment: &str, mode: MatchMode) -> bool {
    FoldedName::new(collator, candidate).matches(&collator.key(fragment), mode)
}

/// Collation keys of a candidate name, folded once and reusable across
/// fragments.
///
/// Word boundaries come from whitespace in the name as written, not in its
/// key: transliteration may put spaces between syllables (`"北京路"` folds
/// to `"bei jing lu"`) that are not word starts.
#[derive(Debug, Clone)]
pub struct FoldedName<'a> {
    collator: Collator,
    name: &'a str,
    whole: String,
    /// Keys of the suffixes starting right after whitespace, folded on first
    /// use.
    words: OnceCell<Vec<String>>,
}

impl<'a> FoldedName<'a> {
    pub fn new(collator: &Collator, name: &'a str) -> Self {
        Self {
            collator: *collator,
            name,
            whole: collator.key(name),
            words: OnceCell::new(),
        }
    }

    fn words(&self) -> &[String] {
        self.words.get_or_init(|| {
            let name = self.name;
            name.char_indices()
                .filter(|(_, ch)| ch.is_whitespace())
                .map(|(i, ch)| i + ch.len_utf8())
                .filter(|&i| i < name.len())
                .map(|i| self.collator.key(&name[i..]))
                .collect()
        })
    }

    /// Tests a fragment that was already folded with the same collator.
    pub fn matches(&self, part: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::StartsWith => self.whole.starts_with(part),
            MatchMode::Contains => self.whole.contains(part),
            MatchMode::StartsFromSpace => {
                self.whole.starts_with(part) || self.words().iter().any(|w| w.starts_with(part))
            }
            MatchMode::StartsFromSpaceNotBeginning => {
                self.words().iter().any(|w| w.starts_with(part))
            }
        }
    }
}

/// A query bundled with its collator and mode, handed to the index when the
/// filtering happens there (village and postcode lookups).
#[derive(Debug, Clone)]
pub struct NameMatcher {
    collator: Collator,
    part: String,
    key: String,
    mode: MatchMode,
}

impl NameMatcher {
    pub fn new(collator: Collator, part: &str, mode: MatchMode) -> Self {
        Self {
            collator,
            part: part.to_string(),
            key: collator.key(part),
            mode,
        }
    }

    pub fn part(&self) -> &str {
        &self.part
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matches_folded(&FoldedName::new(&self.collator, name))
    }

    /// Same as [`matches`](Self::matches) for a name folded up front.
    pub fn matches_folded(&self, name: &FoldedName<'_>) -> bool {
        name.matches(&self.key, self.mode)
    }
}

/// Ordering for house numbers: the leading number compares numerically, the
/// remainder through the collator, so `2 < 10 < 10a < 10b`.
pub fn house_number_cmp(collator: &Collator, a: &str, b: &str) -> Ordering {
    let (na, ra) = split_number(a);
    let (nb, rb) = split_number(b);
    match (na, nb) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| collator.compare(ra, rb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collator.compare(a, b),
    }
}

fn split_number(s: &str) -> (Option<u64>, &str) {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    match s[..end].parse::<u64>() {
        Ok(n) => (Some(n), &s[end..]),
        Err(_) => (None, s),
    }
}

/// `true` if the query could be (part of) a postcode.
pub fn contains_digit(s: &str) -> bool {
    s.chars().any(|ch| ch.is_ascii_digit())
}
