use tracing::info;

use crate::domain::team::{LabelSet, RemoteSession};
use crate::domain::ticket::TicketType;
use crate::error::{AppError, AppResult};
use crate::services::{IssueTrackerService, TeamResolver};

/// Selects the team and makes sure every ticket type has a label in it.
pub async fn start_session(
    tracker: &dyn IssueTrackerService,
    resolver: &dyn TeamResolver,
) -> AppResult<RemoteSession> {
    println!("\nFetching teams...");
    let teams = tracker.list_teams().await?;
    if teams.is_empty() {
        return Err(AppError::Configuration(
            "no teams found; make sure your API key has access to a team".to_string(),
        ));
    }

    println!("\nAvailable teams:");
    for (index, team) in teams.iter().enumerate() {
        println!("  {}. {team}", index + 1);
    }

    let team = resolver.resolve(&teams)?;
    println!("\nUsing team: {}", team.name);
    info!(team = %team.key, "team selected");

    println!("\nSetting up labels...");
    let existing = tracker.list_labels(&team.id).await?;
    let mut labels = LabelSet::default();
    for ticket_type in TicketType::ALL {
        let name = ticket_type.as_str();
        match existing.iter().find(|label| label.name == name) {
            Some(label) => {
                println!("  ✓ Label exists: {name}");
                labels.insert(ticket_type, label.id.clone());
            }
            None => {
                println!("  Creating label: {name}");
                let created = tracker
                    .create_label(&team.id, name, ticket_type.label_color())
                    .await?;
                labels.insert(ticket_type, created.id);
            }
        }
    }
    info!(labels = labels.len(), "labels resolved");

    Ok(RemoteSession { team, labels })
}
