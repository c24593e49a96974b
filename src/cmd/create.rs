use tracing::info;

use crate::context::AppContext;
use crate::domain::document::load_document;
use crate::error::AppResult;
use crate::workflow::bootstrap::start_session;
use crate::workflow::submit::{SubmissionReport, submit_tickets};

const RULE: &str = "============================================================";

pub async fn run(ctx: &AppContext) -> AppResult<SubmissionReport> {
    println!("{RULE}");
    println!("Linear Ticket Creator");
    println!("{RULE}");
    println!("✓ API key found");

    let path = &ctx.config.tickets_path;
    println!("\nParsing {}...", path.display());
    let tickets = load_document(path)?;
    println!("✓ Found {} tickets", tickets.len());
    info!(count = tickets.len(), path = %path.display(), "tickets parsed");

    let session = start_session(ctx.issue_tracker.as_ref(), ctx.team_resolver.as_ref()).await?;

    println!("\n{RULE}");
    println!("Creating {} tickets...", tickets.len());
    println!("{RULE}\n");

    let report = submit_tickets(ctx.issue_tracker.as_ref(), &session, &tickets).await;

    println!("\n{RULE}");
    println!("Summary");
    println!("{RULE}");
    println!("✓ Created: {}", report.created);
    println!("✗ Failed: {}", report.failed);
    println!("Total: {}", report.total);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;
    use crate::config::AppConfig;
    use crate::infra::prompt::FixedTeam;
    use crate::workflow::fake::{Call, FakeTracker};

    fn context(path: PathBuf, tracker: Arc<FakeTracker>) -> AppContext {
        let config = AppConfig {
            api_key: "lin_api_test".to_string(),
            api_url: "http://localhost/graphql".to_string(),
            tickets_path: path,
            team: Some("ENG".to_string()),
        };
        AppContext::new(config, tracker, Arc::new(FixedTeam::new("ENG".to_string())))
    }

    #[tokio::test]
    async fn runs_the_whole_pipeline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "## Epic 1: Setup\n### Ticket 1.1: Init repo\n**Type:** Technical\n### Ticket 1.2: Add CI\n\n## Epic 2: Docs\n### Ticket 2.1: Write README\n"
        )
        .unwrap();

        let tracker = Arc::new(
            FakeTracker::with_teams(vec![FakeTracker::team("t1", "ENG")])
                .with_label("l-f", "Feature")
                .with_label("l-t", "Technical")
                .with_label("l-d", "Documentation")
                .failing_issue("Add CI"),
        );
        let ctx = context(file.path().to_path_buf(), tracker.clone());

        let report = run(&ctx).await.unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.created, 2);
        assert_eq!(report.failed, 1);

        let issue_calls = tracker
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::CreateIssue(_)))
            .count();
        assert_eq!(issue_calls, 3);
    }

    #[tokio::test]
    async fn missing_document_fails_before_remote_calls() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = Arc::new(FakeTracker::with_teams(vec![FakeTracker::team("t1", "ENG")]));
        let ctx = context(dir.path().join("LINEAR_TICKETS.md"), tracker.clone());

        assert!(run(&ctx).await.is_err());
        assert!(tracker.calls().is_empty());
    }
}
