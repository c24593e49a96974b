use tracing::{debug, warn};

use crate::domain::issue::IssueDraft;
use crate::domain::team::RemoteSession;
use crate::domain::ticket::Ticket;
use crate::services::IssueTrackerService;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionReport {
    pub created: usize,
    pub failed: usize,
    pub total: usize,
}

/// Creates one issue per ticket, in order. A failed ticket is reported and
/// counted; the remaining tickets are still attempted.
pub async fn submit_tickets(
    tracker: &dyn IssueTrackerService,
    session: &RemoteSession,
    tickets: &[Ticket],
) -> SubmissionReport {
    let mut report = SubmissionReport {
        total: tickets.len(),
        ..SubmissionReport::default()
    };

    for ticket in tickets {
        let draft = IssueDraft::from_ticket(ticket, session);
        match tracker.create_issue(&draft).await {
            Ok(issue) => {
                debug!(id = %issue.id, identifier = %issue.identifier, "issue created");
                println!("✓ Created: {} - {}", issue.identifier, issue.title);
                println!("  URL: {}", issue.url);
                report.created += 1;
            }
            Err(error) => {
                warn!(title = %ticket.title, %error, "issue creation failed");
                println!("✗ Failed: {}", ticket.title);
                println!("  Error: {error}");
                report.failed += 1;
            }
        }
    }

    report
}
