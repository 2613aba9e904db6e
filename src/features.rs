//! Mat Features
//!
//! Tags describing what a mat is suited for. Stored as a concatenated tag
//! string (`"HS"`) and handled in memory as a small bitmask.

use std::{
    fmt::{self, Write},
    ops::{BitOr, BitOrAssign},
    str::FromStr,
};

use thiserror::Error;

/// Errors produced while reading a feature tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeatureTagError {
    /// The character is not one of `H`, `S` or `W`.
    #[error("unknown mat feature tag `{0}`")]
    UnknownTag(char),
}

/// A single mat feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatFeature {
    /// Handicap accessible.
    Handicap,

    /// Next to a power socket.
    Socket,

    /// Reserved for guests on a work assignment.
    Work,
}

impl MatFeature {
    /// Every feature, in canonical tag order.
    pub const ALL: [Self; 3] = [Self::Handicap, Self::Socket, Self::Work];

    /// The tag character used in storage.
    pub const fn tag(self) -> char {
        match self {
            Self::Handicap => 'H',
            Self::Socket => 'S',
            Self::Work => 'W',
        }
    }

    /// Look up a feature by its tag character.
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'H' => Some(Self::Handicap),
            'S' => Some(Self::Socket),
            'W' => Some(Self::Work),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Handicap => 0b001,
            Self::Socket => 0b010,
            Self::Work => 0b100,
        }
    }
}

/// A set of [`MatFeature`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatFeatures(u8);

impl MatFeatures {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Return a copy of the set with the feature added.
    #[must_use]
    pub const fn with(self, feature: MatFeature) -> Self {
        Self(self.0 | feature.bit())
    }

    /// Check whether the feature is present.
    pub const fn contains(self, feature: MatFeature) -> bool {
        self.0 & feature.bit() != 0
    }

    /// Check whether no feature is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of features present.
    pub fn len(self) -> usize {
        self.iter().count()
    }

    /// Iterate present features in canonical order.
    pub fn iter(self) -> impl Iterator<Item = MatFeature> {
        MatFeature::ALL
            .into_iter()
            .filter(move |feature| self.contains(*feature))
    }

    /// The storage form: concatenated tags, or `None` when empty.
    pub fn to_tag_string(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl FromIterator<MatFeature> for MatFeatures {
    fn from_iter<I: IntoIterator<Item = MatFeature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl BitOr for MatFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MatFeatures {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for MatFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feature in self.iter() {
            f.write_char(feature.tag())?;
        }

        Ok(())
    }
}

/// Accepts tags in any order; repeats are idempotent.
impl FromStr for MatFeatures {
    type Err = FeatureTagError;

    fn from_str(tags: &str) -> Result<Self, Self::Err> {
        tags.chars().try_fold(Self::empty(), |features, tag| {
            MatFeature::from_tag(tag)
                .map(|feature| features.with(feature))
                .ok_or(FeatureTagError::UnknownTag(tag))
        })
    }
}
