//! Checkins
//!
//! One record per mat per night at a facility. Inventory generation creates
//! a night's records in bulk; assign, deassign and reassign move guests
//! between them.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::{CheckinsServiceError, FailureKind};
pub use service::*;
