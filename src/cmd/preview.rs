use std::path::Path;

use crate::domain::document::load_document;
use crate::domain::ticket::{Ticket, remote_priority};
use crate::error::AppResult;

/// Prints what `create` would submit, without contacting Linear.
pub fn run(path: &Path) -> AppResult<()> {
    let tickets = load_document(path)?;
    print!("{}", render(&tickets));
    Ok(())
}

fn render(tickets: &[Ticket]) -> String {
    let mut out = String::new();
    let mut current_epic: Option<&str> = None;

    for ticket in tickets {
        if current_epic != Some(ticket.epic.as_str()) {
            out.push_str(&format!("\nEpic: {}\n", ticket.epic));
            current_epic = Some(ticket.epic.as_str());
        }
        let priority = ticket
            .priority
            .map_or("No priority", |priority| priority.as_str());
        out.push_str(&format!(
            "  - {} [{}, {} ({}), estimate {}]\n",
            ticket.title,
            ticket.ticket_type.as_str(),
            priority,
            remote_priority(ticket.priority),
            ticket.estimate
        ));
        for item in &ticket.acceptance_criteria {
            out.push_str(&format!("      - [ ] {item}\n"));
        }
    }

    out.push_str(&format!("\n{} tickets\n", tickets.len()));
    out
}
