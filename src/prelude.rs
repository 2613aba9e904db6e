//! Matnight prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    assignment::{
        AssignPlan, MatSlot, Occupancy, OccupantDetails, ReassignError, Reassignment,
        TransitionError, reassign,
    },
    features::{FeatureTagError, MatFeature, MatFeatures},
    inventory::{PlannedMat, plan_inventory},
    ranges::{MatRangeSet, ParseError},
    templates::{
        TemplateError, TemplateField, TemplateFieldError, TemplateMats, ValidatedTemplate,
        validate,
    },
};
