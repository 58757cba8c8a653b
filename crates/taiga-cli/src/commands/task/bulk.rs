use std::path::Path;

use anyhow::Context;
use taiga_bulk::{BulkTaskRequest, reconcile};
use taiga_client::SessionClient;
use taiga_core::entities::TaskDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskBulkArgs;
use crate::output::output_with_message;

pub async fn run(
    args: &TaskBulkArgs,
    upstream: &SessionClient<'_>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let drafts = match &args.file {
        Some(path) => read_drafts(path)?,
        None => args.subjects.iter().map(TaskDraft::new).collect(),
    };

    let mut request = BulkTaskRequest::new(args.project, drafts);
    request.user_story_id = args.story;
    request.status_id = args.status;
    request.assigned_to_id = args.assigned_to;

    let report = reconcile(upstream, &request).await?;
    output_with_message(&report, &report.summary(), flags.format)
}

/// Read a JSON array of drafts.
fn read_drafts(path: &Path) -> anyhow::Result<Vec<TaskDraft>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid task list in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reads_drafts_with_optional_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"subject": "Write docs"}}, {{"subject": "Deploy", "status": 8, "assigned_to": 12}}]"#
        )
        .unwrap();

        let drafts = read_drafts(file.path()).unwrap();

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0], TaskDraft::new("Write docs"));
        assert_eq!(drafts[1].status, Some(8));
        assert_eq!(drafts[1].assigned_to, Some(12));
    }

    #[test]
    fn rejects_non_array_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"subject": "Write docs"}}"#).unwrap();

        let err = read_drafts(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("invalid task list in"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_drafts(Path::new("/nonexistent/tasks.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tasks.json"));
    }
}
