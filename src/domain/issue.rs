use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::team::RemoteSession;
use crate::domain::ticket::{Ticket, remote_priority};

/// Input of Linear's `issueCreate` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub team_id: String,
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub estimate: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<String>,
}

impl IssueDraft {
    pub fn from_ticket(ticket: &Ticket, session: &RemoteSession) -> Self {
        let label_ids = session
            .labels
            .get(ticket.ticket_type)
            .map(|id| vec![id.to_string()])
            .unwrap_or_default();

        Self {
            team_id: session.team.id.clone(),
            title: ticket.title.clone(),
            description: render_description(ticket),
            priority: remote_priority(ticket.priority),
            estimate: ticket.estimate,
            label_ids,
        }
    }
}

fn render_description(ticket: &Ticket) -> String {
    let mut body = format!("**Epic:** {}\n\n{}\n\n", ticket.epic, ticket.description);
    if !ticket.acceptance_criteria.is_empty() {
        body.push_str("**Acceptance Criteria:**\n");
        for item in &ticket.acceptance_criteria {
            let _ = writeln!(body, "- [ ] {item}");
        }
    }
    body
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub url: String,
}
