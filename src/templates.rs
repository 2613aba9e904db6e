//! Template Validation
//!
//! A template lists every mat a facility lays out plus three optional
//! feature subsets. Before a template is used to generate inventory each
//! subset must parse and fall inside the full mat list.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    features::{MatFeature, MatFeatures},
    ranges::{MatRangeSet, ParseError},
};

/// Mat lists as stored on a template, in compact range notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMats {
    /// Every mat the template lays out.
    pub all_mats: String,

    /// Handicap-accessible mats.
    pub handicap_mats: Option<String>,

    /// Mats next to a power socket.
    pub socket_mats: Option<String>,

    /// Mats reserved for work assignments.
    pub work_mats: Option<String>,
}

/// A named mat list on a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateField {
    /// `all_mats`
    AllMats,

    /// `handicap_mats`
    HandicapMats,

    /// `socket_mats`
    SocketMats,

    /// `work_mats`
    WorkMats,
}

impl TemplateField {
    /// Field name as stored.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllMats => "all_mats",
            Self::HandicapMats => "handicap_mats",
            Self::SocketMats => "socket_mats",
            Self::WorkMats => "work_mats",
        }
    }
}

impl fmt::Display for TemplateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem with one template field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateFieldError {
    /// The field is not valid range notation.
    #[error("{field} is not a valid mat list: {source}")]
    Unparseable {
        /// Offending field.
        field: TemplateField,

        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// The field lists mats missing from `all_mats`.
    #[error("{field} lists mats that are not in all_mats: {stray}")]
    NotSubset {
        /// Offending field.
        field: TemplateField,

        /// Mats outside `all_mats`.
        stray: MatRangeSet,
    },

    /// `all_mats` parsed to an empty set.
    #[error("all_mats lists no mats")]
    NoMats,
}

impl TemplateFieldError {
    /// The field this error is about.
    pub const fn field(&self) -> TemplateField {
        match self {
            Self::Unparseable { field, .. } | Self::NotSubset { field, .. } => *field,
            Self::NoMats => TemplateField::AllMats,
        }
    }
}

/// Every problem found on a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid template mat lists: {}", join_errors(.errors))]
pub struct TemplateError {
    errors: SmallVec<[TemplateFieldError; 3]>,
}

impl TemplateError {
    fn single(error: TemplateFieldError) -> Self {
        let mut errors = SmallVec::new();

        errors.push(error);

        Self { errors }
    }

    /// Individual field problems, in field order.
    pub fn errors(&self) -> &[TemplateFieldError] {
        &self.errors
    }

    /// Check whether the named field has a problem.
    pub fn has_field(&self, field: TemplateField) -> bool {
        self.errors.iter().any(|error| error.field() == field)
    }
}

fn join_errors(errors: &[TemplateFieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A template whose mat lists have been parsed and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTemplate {
    all: MatRangeSet,
    handicap: MatRangeSet,
    socket: MatRangeSet,
    work: MatRangeSet,
}

impl ValidatedTemplate {
    /// Every mat.
    pub fn all_mats(&self) -> &MatRangeSet {
        &self.all
    }

    /// The mats carrying a feature.
    pub fn mats_with(&self, feature: MatFeature) -> &MatRangeSet {
        match feature {
            MatFeature::Handicap => &self.handicap,
            MatFeature::Socket => &self.socket,
            MatFeature::Work => &self.work,
        }
    }

    /// Features of a single mat.
    pub fn features_of(&self, mat: u32) -> MatFeatures {
        MatFeature::ALL
            .into_iter()
            .filter(|feature| self.mats_with(*feature).contains(mat))
            .collect()
    }
}

/// Validate a template's mat lists.
///
/// An unparseable or empty `all_mats` is fatal and reported alone. The three
/// subsets are checked independently and every failure is reported.
///
/// # Errors
///
/// Returns a [`TemplateError`] listing each offending field.
pub fn validate(mats: &TemplateMats) -> Result<ValidatedTemplate, TemplateError> {
    let all = MatRangeSet::parse(&mats.all_mats).map_err(|source| {
        TemplateError::single(TemplateFieldError::Unparseable {
            field: TemplateField::AllMats,
            source,
        })
    })?;

    if all.is_empty() {
        return Err(TemplateError::single(TemplateFieldError::NoMats));
    }

    let mut errors = SmallVec::new();

    let handicap = check_subset(
        TemplateField::HandicapMats,
        mats.handicap_mats.as_deref(),
        &all,
        &mut errors,
    );

    let socket = check_subset(
        TemplateField::SocketMats,
        mats.socket_mats.as_deref(),
        &all,
        &mut errors,
    );

    let work = check_subset(
        TemplateField::WorkMats,
        mats.work_mats.as_deref(),
        &all,
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(TemplateError { errors });
    }

    Ok(ValidatedTemplate {
        all,
        handicap,
        socket,
        work,
    })
}

fn check_subset(
    field: TemplateField,
    notation: Option<&str>,
    all: &MatRangeSet,
    errors: &mut SmallVec<[TemplateFieldError; 3]>,
) -> MatRangeSet {
    let Some(notation) = notation else {
        return MatRangeSet::default();
    };

    match MatRangeSet::parse(notation) {
        Ok(subset) if subset.is_subset_of(all) => subset,
        Ok(subset) => {
            errors.push(TemplateFieldError::NotSubset {
                field,
                stray: subset.difference(all),
            });

            MatRangeSet::default()
        }
        Err(source) => {
            errors.push(TemplateFieldError::Unparseable { field, source });

            MatRangeSet::default()
        }
    }
}
