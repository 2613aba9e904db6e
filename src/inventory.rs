//! Inventory Planning
//!
//! Expands a validated template into the mats of one night.

use crate::{features::MatFeatures, templates::ValidatedTemplate};

/// One mat to create for a night, unoccupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMat {
    /// Mat number from the template's `all_mats`.
    pub mat_number: u32,

    /// Features derived from the template subsets.
    pub features: MatFeatures,
}

/// Plan one mat per entry of `all_mats`, in ascending mat order.
pub fn plan_inventory(template: &ValidatedTemplate) -> Vec<PlannedMat> {
    template
        .all_mats()
        .iter()
        .map(|mat_number| PlannedMat {
            mat_number,
            features: template.features_of(mat_number),
        })
        .collect()
}
