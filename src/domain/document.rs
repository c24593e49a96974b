//! Extraction of tickets from a markdown planning document.
//!
//! The document is laid out as `## Epic <n>: <name>` sections holding
//! `### Ticket <n.m>: <title>` sections. Inside a ticket, fields are bold
//! labels at the start of a line:
//!
//! ```text
//! **Priority:** High
//! **Type:** Technical
//! **Estimate:** 3
//! **Description:**
//! Free text, possibly over several lines.
//! **Acceptance Criteria:**
//! - [ ] First criterion
//! ```

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ticket::{Priority, Ticket, TicketType};
use crate::error::{AppError, AppResult};

static EPIC_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+Epic\s+\d+:\s*(.*?)\s*$").expect("valid epic regex"));
static TICKET_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###\s+Ticket\s+[\d.]+:\s*(.*?)\s*$").expect("valid ticket regex")
});
static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,2}\s").expect("valid heading regex"));
static FIELD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[ \t]*\*\*(Priority|Type|Estimate|Description|Acceptance Criteria):\*\*[ \t]*(.*)$",
    )
    .expect("valid field regex")
});
static UNCHECKED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*- \[ \] (.+)$").expect("valid checklist regex"));
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*---+[ \t]*$").expect("valid separator regex"));
static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)").expect("valid word regex"));
static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("valid digits regex"));

pub fn load_document(path: &Path) -> AppResult<Vec<Ticket>> {
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::Configuration(format!(
            "tickets file {} not found; run from the directory containing it or pass --file",
            path.display()
        )),
        io::ErrorKind::InvalidData => AppError::Document(format!(
            "tickets file {} is not valid UTF-8",
            path.display()
        )),
        _ => AppError::Io(err),
    })?;
    parse_document(&contents)
}

pub fn parse_document(text: &str) -> AppResult<Vec<Ticket>> {
    let mut tickets = Vec::new();
    let mut epic: Option<String> = None;
    let mut section: Option<TicketSection<'_>> = None;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');

        if let Some(caps) = EPIC_HEADING.captures(line) {
            tickets.extend(section.take().map(TicketSection::into_ticket));
            epic = Some(caps[1].to_string());
            continue;
        }

        if let Some(caps) = TICKET_HEADING.captures(line) {
            tickets.extend(section.take().map(TicketSection::into_ticket));
            let title = caps[1].trim();
            if let Some(epic) = &epic {
                if !title.is_empty() {
                    section = Some(TicketSection::new(epic, title));
                }
            }
            continue;
        }

        if SECTION_HEADING.is_match(line) {
            tickets.extend(section.take().map(TicketSection::into_ticket));
            continue;
        }

        if let Some(section) = section.as_mut() {
            section.lines.push(line);
        }
    }
    tickets.extend(section.take().map(TicketSection::into_ticket));

    if epic.is_none() {
        return Err(AppError::Document(
            "no \"## Epic <n>: <name>\" sections found".to_string(),
        ));
    }

    Ok(tickets)
}

struct TicketSection<'a> {
    epic: String,
    title: String,
    lines: Vec<&'a str>,
}

#[derive(Clone, Copy)]
enum Block {
    Description,
    Criteria,
}

impl<'a> TicketSection<'a> {
    fn new(epic: &str, title: &str) -> Self {
        Self {
            epic: epic.to_string(),
            title: title.to_string(),
            lines: Vec::new(),
        }
    }

    fn into_ticket(self) -> Ticket {
        let mut priority: Option<&str> = None;
        let mut ticket_type: Option<&str> = None;
        let mut estimate: Option<&str> = None;
        let mut description: Option<Vec<&str>> = None;
        let mut criteria: Option<Vec<String>> = None;
        let mut open: Option<Block> = None;

        for line in self.lines {
            if let Some(caps) = FIELD_LABEL.captures(line) {
                let value = caps.get(2).map_or("", |m| m.as_str()).trim();
                open = None;
                match &caps[1] {
                    "Priority" => {
                        priority.get_or_insert(value);
                    }
                    "Type" => {
                        ticket_type.get_or_insert(value);
                    }
                    "Estimate" => {
                        estimate.get_or_insert(value);
                    }
                    "Description" if description.is_none() => {
                        description = Some(if value.is_empty() { vec![] } else { vec![value] });
                        open = Some(Block::Description);
                    }
                    "Acceptance Criteria" if criteria.is_none() => {
                        let mut items = Vec::new();
                        push_unchecked(&mut items, value);
                        criteria = Some(items);
                        open = Some(Block::Criteria);
                    }
                    _ => {}
                }
                continue;
            }

            if SEPARATOR.is_match(line) {
                open = None;
                continue;
            }

            match open {
                Some(Block::Description) => {
                    if let Some(lines) = description.as_mut() {
                        lines.push(line);
                    }
                }
                Some(Block::Criteria) => {
                    if let Some(items) = criteria.as_mut() {
                        push_unchecked(items, line);
                    }
                }
                None => {}
            }
        }

        let mut ticket = Ticket::new(self.epic, self.title);
        if let Some(word) = priority.and_then(leading_word) {
            ticket.priority = Priority::from_label(word);
        }
        if let Some(kind) = ticket_type.and_then(leading_word).and_then(TicketType::from_label) {
            ticket.ticket_type = kind;
        }
        if let Some(points) = estimate
            .and_then(|value| LEADING_DIGITS.captures(value))
            .and_then(|caps| caps[1].parse::<u32>().ok())
        {
            ticket.estimate = points;
        }
        if let Some(lines) = description {
            ticket.description = lines.join("\n").trim().to_string();
        }
        if let Some(items) = criteria {
            ticket.acceptance_criteria = items;
        }
        ticket
    }
}

fn leading_word(value: &str) -> Option<&str> {
    LEADING_WORD
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn push_unchecked(items: &mut Vec<String>, line: &str) {
    if let Some(caps) = UNCHECKED_ITEM.captures(line) {
        items.push(caps[1].to_string());
    }
}
