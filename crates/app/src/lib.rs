//! Persistence and services for nightly mat inventory and check-ins.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;
