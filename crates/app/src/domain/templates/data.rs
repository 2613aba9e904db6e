//! Template Data

use matnight::templates::TemplateMats;

use crate::domain::{facilities::records::FacilityUuid, templates::records::TemplateUuid};

/// New Template Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewTemplate {
    /// UUID to assign to the template row.
    pub uuid: TemplateUuid,

    /// Owning facility.
    pub facility_uuid: FacilityUuid,

    /// Template name; unique within the facility.
    pub name: String,

    /// Mat lists in compact range notation.
    pub mats: TemplateMats,
}
