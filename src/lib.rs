//! Matnight
//!
//! Matnight is the nightly mat allocation core for multi-facility overnight
//! shelter programs: mat-range algebra, template validation, inventory
//! planning and the mat occupancy state machine.

pub mod assignment;
pub mod features;
pub mod inventory;
pub mod prelude;
pub mod ranges;
pub mod templates;
