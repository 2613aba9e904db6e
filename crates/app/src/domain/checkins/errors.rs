//! Checkins service errors.

use jiff::civil::Date;
use matnight::templates::TemplateError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{
    checkins::records::CheckinUuid, facilities::records::FacilityUuid, guests::records::GuestUuid,
    templates::records::TemplateUuid,
};

/// Unique index allowing one mat per guest per night.
pub(crate) const GUEST_NIGHT_CONSTRAINT: &str = "checkins_facility_date_guest_key";

/// Unique constraint allowing one record per mat per night.
pub(crate) const MAT_NIGHT_CONSTRAINT: &str = "checkins_facility_date_mat_key";

/// Broad classes of failure, for callers mapping errors onto responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request contradicts itself or the records it names.
    BadRequest,

    /// A referenced record does not exist.
    NotFound,

    /// The request collides with current state.
    Conflict,

    /// Stored data failed validation.
    Invalid,

    /// The store failed; the outcome of the request is unknown to the caller.
    ServerError,
}

impl FailureKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Invalid => "invalid",
            Self::ServerError => "server_error",
        }
    }
}

/// Checkin service error variants.
#[derive(Debug, Error)]
pub enum CheckinsServiceError {
    #[error("facility {0} not found")]
    FacilityNotFound(FacilityUuid),

    #[error("template {0} not found")]
    TemplateNotFound(TemplateUuid),

    #[error("checkin {0} not found")]
    CheckinNotFound(CheckinUuid),

    #[error("template {template} does not belong to facility {facility}")]
    TemplateFacilityMismatch {
        template: TemplateUuid,
        facility: FacilityUuid,
    },

    #[error("template {template} has invalid mat lists")]
    InvalidTemplate {
        template: TemplateUuid,
        #[source]
        source: TemplateError,
    },

    #[error("facility {facility} already has {existing} mats on {date}")]
    InventoryExists {
        facility: FacilityUuid,
        date: Date,
        existing: u64,
    },

    #[error("inventory for facility {facility} on {date} already exists")]
    DuplicateMat { facility: FacilityUuid, date: Date },

    #[error("payload facility {payload} does not match facility {facility}")]
    PayloadFacilityMismatch {
        facility: FacilityUuid,
        payload: FacilityUuid,
    },

    #[error("no guest given for checkin {0}")]
    MissingGuest(CheckinUuid),

    #[error("guest {0} not found")]
    GuestNotFound(GuestUuid),

    #[error("guest {guest} does not belong to facility {facility}")]
    GuestFacilityMismatch {
        guest: GuestUuid,
        facility: FacilityUuid,
    },

    #[error("checkin {checkin} does not belong to facility {facility}")]
    CheckinFacilityMismatch {
        checkin: CheckinUuid,
        facility: FacilityUuid,
    },

    #[error("checkin {checkin} is occupied by guest {guest}")]
    MatOccupied {
        checkin: CheckinUuid,
        guest: GuestUuid,
    },

    #[error("guest {guest} already has a mat on {date}")]
    GuestAlreadyCheckedIn { guest: GuestUuid, date: Date },

    #[error("checkin {0} is not currently assigned")]
    NotAssigned(CheckinUuid),

    #[error("payment amount {amount} for checkin {checkin} is too large to record")]
    InvalidPaymentAmount { checkin: CheckinUuid, amount: u64 },

    #[error("checkins {from} and {to} are on different nights")]
    DifferentNights { from: CheckinUuid, to: CheckinUuid },

    #[error("cannot reassign checkin {0} onto itself")]
    SameCheckin(CheckinUuid),

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl CheckinsServiceError {
    /// Classify the error.
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::FacilityNotFound(_) | Self::TemplateNotFound(_) | Self::CheckinNotFound(_) => {
                FailureKind::NotFound
            }
            Self::TemplateFacilityMismatch { .. }
            | Self::InventoryExists { .. }
            | Self::DuplicateMat { .. }
            | Self::MatOccupied { .. }
            | Self::GuestAlreadyCheckedIn { .. } => FailureKind::Conflict,
            Self::InvalidTemplate { .. } => FailureKind::Invalid,
            Self::PayloadFacilityMismatch { .. }
            | Self::MissingGuest(_)
            | Self::GuestNotFound(_)
            | Self::GuestFacilityMismatch { .. }
            | Self::CheckinFacilityMismatch { .. }
            | Self::NotAssigned(_)
            | Self::InvalidPaymentAmount { .. }
            | Self::DifferentNights { .. }
            | Self::SameCheckin(_)
            | Self::InvalidReference
            | Self::InvalidData => FailureKind::BadRequest,
            Self::Sql(_) => FailureKind::ServerError,
        }
    }

    /// Translate a write that may have hit the one-mat-per-guest index.
    pub(crate) fn from_guest_write(error: Error, guest: GuestUuid, date: Date) -> Self {
        if violated_unique_constraint(&error) == Some(GUEST_NIGHT_CONSTRAINT) {
            return Self::GuestAlreadyCheckedIn { guest, date };
        }

        error.into()
    }

    /// Translate a bulk insert that may have hit the one-record-per-mat constraint.
    pub(crate) fn from_inventory_write(error: Error, facility: FacilityUuid, date: Date) -> Self {
        if violated_unique_constraint(&error) == Some(MAT_NIGHT_CONSTRAINT) {
            return Self::DuplicateMat { facility, date };
        }

        error.into()
    }
}

fn violated_unique_constraint(error: &Error) -> Option<&str> {
    error
        .as_database_error()
        .filter(|error| matches!(error.kind(), ErrorKind::UniqueViolation))
        .and_then(DatabaseError::constraint)
}

impl From<Error> for CheckinsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::UniqueViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
