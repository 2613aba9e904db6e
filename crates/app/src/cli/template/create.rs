use clap::Args;
use matnight::templates::TemplateMats;
use matnight_app::domain::{
    facilities::records::FacilityUuid,
    templates::{
        TemplatesService,
        data::NewTemplate,
        records::{TemplateRecord, TemplateUuid},
    },
};
use uuid::Uuid;

use crate::cli::error_chain;

#[derive(Debug, Args)]
pub(crate) struct CreateTemplateArgs {
    /// Owning facility UUID
    #[arg(long)]
    facility_uuid: Uuid,

    /// Template name, unique within the facility
    #[arg(long)]
    name: String,

    /// Every mat, e.g. "1-40,45"
    #[arg(long)]
    all_mats: String,

    /// Handicap-accessible mats
    #[arg(long)]
    handicap_mats: Option<String>,

    /// Mats next to a power socket
    #[arg(long)]
    socket_mats: Option<String>,

    /// Mats reserved for work assignments
    #[arg(long)]
    work_mats: Option<String>,

    /// Optional template UUID; generated when omitted
    #[arg(long)]
    template_uuid: Option<Uuid>,
}

pub(crate) async fn run(
    args: CreateTemplateArgs,
    service: &dyn TemplatesService,
) -> Result<(), String> {
    let template = create(args, service).await?;

    println!("template_uuid: {}", template.uuid);
    println!("facility_uuid: {}", template.facility_uuid);
    println!("template_name: {}", template.name);
    println!("all_mats: {}", template.mats.all_mats);

    for (label, mats) in [
        ("handicap_mats", &template.mats.handicap_mats),
        ("socket_mats", &template.mats.socket_mats),
        ("work_mats", &template.mats.work_mats),
    ] {
        println!("{label}: {}", mats.as_deref().unwrap_or("none"));
    }

    Ok(())
}

async fn create(
    args: CreateTemplateArgs,
    service: &dyn TemplatesService,
) -> Result<TemplateRecord, String> {
    service
        .create_template(NewTemplate {
            uuid: args
                .template_uuid
                .map_or_else(TemplateUuid::new, TemplateUuid::from_uuid),
            facility_uuid: FacilityUuid::from_uuid(args.facility_uuid),
            name: args.name,
            mats: TemplateMats {
                all_mats: args.all_mats,
                handicap_mats: args.handicap_mats,
                socket_mats: args.socket_mats,
                work_mats: args.work_mats,
            },
        })
        .await
        .map_err(|error| format!("failed to create template: {}", error_chain(&error)))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use matnight::templates::validate;
    use matnight_app::domain::templates::{MockTemplatesService, TemplatesServiceError};
    use testresult::TestResult;

    use super::*;

    fn args(socket_mats: &str) -> CreateTemplateArgs {
        CreateTemplateArgs {
            facility_uuid: Uuid::now_v7(),
            name: "Winter".to_string(),
            all_mats: "1-20".to_string(),
            handicap_mats: None,
            socket_mats: Some(socket_mats.to_string()),
            work_mats: None,
            template_uuid: None,
        }
    }

    #[tokio::test]
    async fn create_forwards_mat_lists_unchanged() -> TestResult {
        let mut service = MockTemplatesService::new();

        service
            .expect_create_template()
            .withf(|template| {
                template.mats.all_mats == "1-20"
                    && template.mats.socket_mats.as_deref() == Some("3, 5-6")
                    && template.mats.handicap_mats.is_none()
            })
            .times(1)
            .returning(|template| {
                Ok(TemplateRecord {
                    uuid: template.uuid,
                    facility_uuid: template.facility_uuid,
                    name: template.name,
                    mats: template.mats,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let created = create(args("3, 5-6"), &service).await?;

        assert_eq!(created.name, "Winter");

        Ok(())
    }

    #[tokio::test]
    async fn create_reports_which_field_failed() {
        let Err(invalid) = validate(&TemplateMats {
            all_mats: "1-20".to_string(),
            socket_mats: Some("19-25".to_string()),
            ..TemplateMats::default()
        }) else {
            unreachable!("socket mats outside all_mats should not validate");
        };

        let mut service = MockTemplatesService::new();

        service
            .expect_create_template()
            .return_once(move |_| Err(TemplatesServiceError::InvalidMats(invalid)));

        let Err(message) = create(args("19-25"), &service).await else {
            unreachable!("expected the service error to surface");
        };

        assert!(
            message.contains("socket_mats lists mats that are not in all_mats: 21-25"),
            "unexpected message: {message}"
        );
    }
}
