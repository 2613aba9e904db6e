//! Matnight Domain Concerns

pub mod checkins;
pub mod facilities;
pub mod guests;
pub mod templates;
