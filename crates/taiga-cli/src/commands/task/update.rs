use taiga_client::{SessionClient, TaskPatchBuilder};

use crate::cli::GlobalFlags;
use crate::output::output;

pub struct Params {
    pub id: i64,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub status: Option<i64>,
    pub assigned_to: Option<i64>,
    pub unassign: bool,
}

pub async fn run(
    params: Params,
    upstream: &SessionClient<'_>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = TaskPatchBuilder::new();
    if let Some(subject) = params.subject {
        builder = builder.subject(subject);
    }
    if let Some(description) = params.description {
        builder = builder.description(description);
    }
    if let Some(status) = params.status {
        builder = builder.status(status);
    }
    if let Some(assignee) = params.assigned_to {
        builder = builder.assigned_to(Some(assignee));
    } else if params.unassign {
        builder = builder.assigned_to(None);
    }

    let task = upstream.update_task(params.id, &builder.build()).await?;
    output(&task, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.subject.is_none()
        && params.description.is_none()
        && params.status.is_none()
        && params.assigned_to.is_none()
        && !params.unassign
    {
        anyhow::bail!(
            "At least one of --subject, --description, --status, --assigned-to, or --unassign must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Params, validate_update_params};

    fn params() -> Params {
        Params {
            id: 42,
            subject: None,
            description: None,
            status: None,
            assigned_to: None,
            unassign: false,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&params()).is_err());
    }

    #[test]
    fn accepts_update_with_any_field() {
        let with_status = Params {
            status: Some(8),
            ..params()
        };
        assert!(validate_update_params(&with_status).is_ok());

        let unassign = Params {
            unassign: true,
            ..params()
        };
        assert!(validate_update_params(&unassign).is_ok());
    }
}
