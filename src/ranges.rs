//! Mat Ranges
//!
//! Shelter staff describe mat layouts in a compact notation: comma-separated
//! mat numbers and inclusive `a-b` ranges, e.g. `"1-12,14,20-24"`. A
//! [`MatRangeSet`] is the parsed form of that text, an ordered set of
//! distinct positive mat numbers.

use std::{collections::BTreeSet, fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest span a single `a-b` range may cover.
pub const MAX_RANGE_SPAN: u32 = 10_000;

/// Most mats a whole set may hold.
pub const MAX_SET_SIZE: usize = 10_000;

/// Errors produced while parsing mat-range text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Two commas with nothing between them, or a trailing comma.
    #[error("mat list `{0}` contains an empty entry")]
    EmptyToken(String),

    /// The entry is neither a number nor an `a-b` range.
    #[error("`{0}` is not a mat number or range")]
    InvalidToken(String),

    /// Mat numbers start at 1.
    #[error("`{0}` contains a mat number below 1")]
    NonPositive(String),

    /// The number does not fit a mat number.
    #[error("`{0}` contains a mat number that is too large")]
    TooLarge(String),

    /// The range end is below its start.
    #[error("range `{0}` runs backwards")]
    Descending(String),

    /// The range covers more mats than [`MAX_RANGE_SPAN`].
    #[error("range `{0}` spans more than {MAX_RANGE_SPAN} mats")]
    TooWide(String),

    /// The whole list names more than [`MAX_SET_SIZE`] mats.
    #[error("mat list `{0}` names more than {MAX_SET_SIZE} mats")]
    TooMany(String),
}

/// An ordered set of mat numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatRangeSet {
    mats: BTreeSet<u32>,
}

impl MatRangeSet {
    /// Parse compact mat-range text.
    ///
    /// Whitespace around entries is ignored and overlapping entries collapse
    /// into one set. Blank text is the empty set.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the first malformed entry.
    pub fn parse(notation: &str) -> Result<Self, ParseError> {
        let mut mats = BTreeSet::new();

        if notation.trim().is_empty() {
            return Ok(Self { mats });
        }

        for token in notation.split(',') {
            let token = token.trim();

            if token.is_empty() {
                return Err(ParseError::EmptyToken(notation.to_string()));
            }

            mats.extend(parse_token(token)?);

            if mats.len() > MAX_SET_SIZE {
                return Err(ParseError::TooMany(notation.to_string()));
            }
        }

        Ok(Self { mats })
    }

    /// Check whether the mat is in the set.
    pub fn contains(&self, mat: u32) -> bool {
        self.mats.contains(&mat)
    }

    /// Check whether every mat in this set is also in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.mats.is_subset(&other.mats)
    }

    /// Mats in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<u32> {
        self.mats.iter().copied().collect()
    }

    /// Iterate mats in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.mats.iter().copied()
    }

    /// Number of mats in the set.
    pub fn len(&self) -> usize {
        self.mats.len()
    }

    /// Check whether the set has no mats.
    pub fn is_empty(&self) -> bool {
        self.mats.is_empty()
    }

    /// Mats in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            mats: self.mats.union(&other.mats).copied().collect(),
        }
    }

    /// Mats in this set that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            mats: self.mats.difference(&other.mats).copied().collect(),
        }
    }

    /// Maximal runs of consecutive mats, ascending.
    pub fn runs(&self) -> impl Iterator<Item = RangeInclusive<u32>> + '_ {
        let mut mats = self.mats.iter().copied().peekable();

        std::iter::from_fn(move || {
            let start = mats.next()?;
            let mut end = start;

            while let Some(next) = mats.next_if(|&mat| end.checked_add(1) == Some(mat)) {
                end = next;
            }

            Some(start..=end)
        })
    }
}

fn parse_token(token: &str) -> Result<RangeInclusive<u32>, ParseError> {
    let Some((start, end)) = token.split_once('-') else {
        let mat = parse_mat(token, token)?;

        return Ok(mat..=mat);
    };

    let start = parse_mat(start.trim(), token)?;
    let end = parse_mat(end.trim(), token)?;

    if start > end {
        return Err(ParseError::Descending(token.to_string()));
    }

    if end - start >= MAX_RANGE_SPAN {
        return Err(ParseError::TooWide(token.to_string()));
    }

    Ok(start..=end)
}

fn parse_mat(digits: &str, token: &str) -> Result<u32, ParseError> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::InvalidToken(token.to_string()));
    }

    // Only digits remain, so the parse can only fail on overflow.
    let mat = digits
        .parse::<u32>()
        .map_err(|_overflow| ParseError::TooLarge(token.to_string()))?;

    if mat == 0 {
        return Err(ParseError::NonPositive(token.to_string()));
    }

    Ok(mat)
}

impl FromStr for MatRangeSet {
    type Err = ParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        Self::parse(notation)
    }
}

impl TryFrom<String> for MatRangeSet {
    type Error = ParseError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        Self::parse(&notation)
    }
}

impl From<MatRangeSet> for String {
    fn from(set: MatRangeSet) -> Self {
        set.to_string()
    }
}

impl FromIterator<u32> for MatRangeSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            mats: iter.into_iter().filter(|&mat| mat > 0).collect(),
        }
    }
}

/// Renders the canonical compact notation, collapsing consecutive mats.
impl fmt::Display for MatRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, run) in self.runs().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }

            if run.start() == run.end() {
                write!(f, "{}", run.start())?;
            } else {
                write!(f, "{}-{}", run.start(), run.end())?;
            }
        }

        Ok(())
    }
}
