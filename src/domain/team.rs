use std::collections::HashMap;
use std::fmt;

use crate::domain::ticket::TicketType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub key: String,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub id: String,
    pub name: String,
}

/// Remote label ids keyed by the ticket type they encode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    ids: HashMap<TicketType, String>,
}

impl LabelSet {
    pub fn insert(&mut self, ticket_type: TicketType, id: String) {
        self.ids.insert(ticket_type, id);
    }

    pub fn get(&self, ticket_type: TicketType) -> Option<&str> {
        self.ids.get(&ticket_type).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}

#[derive(Debug, Clone)]
pub struct RemoteSession {
    pub team: Team,
    pub labels: LabelSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_set_overwrites_per_type() {
        let mut labels = LabelSet::default();
        assert_eq!(labels.len(), 0);
        labels.insert(TicketType::Feature, "a".to_string());
        labels.insert(TicketType::Feature, "b".to_string());
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get(TicketType::Feature), Some("b"));
        assert_eq!(labels.get(TicketType::Technical), None);
    }
}
