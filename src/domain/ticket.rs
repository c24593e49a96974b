#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

/// Remote value for "no priority".
pub const NO_PRIORITY: u8 = 0;

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "urgent" => Some(Priority::Urgent),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Linear's numeric scale: 1 is the most urgent, 4 the least.
    pub fn remote_value(&self) -> u8 {
        match self {
            Priority::Urgent => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
        }
    }
}

pub fn remote_priority(priority: Option<Priority>) -> u8 {
    priority.map_or(NO_PRIORITY, |priority| priority.remote_value())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TicketType {
    #[default]
    Feature,
    Technical,
    Documentation,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [
        TicketType::Feature,
        TicketType::Technical,
        TicketType::Documentation,
    ];

    /// Also the remote label name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Feature => "Feature",
            TicketType::Technical => "Technical",
            TicketType::Documentation => "Documentation",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "feature" => Some(TicketType::Feature),
            "technical" => Some(TicketType::Technical),
            "documentation" => Some(TicketType::Documentation),
            _ => None,
        }
    }

    pub fn label_color(&self) -> &'static str {
        match self {
            TicketType::Feature => "#22c55e",
            TicketType::Technical => "#3b82f6",
            TicketType::Documentation => "#f59e0b",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub title: String,
    pub description: String,
    /// `None` when the document names a priority that is not recognised.
    pub priority: Option<Priority>,
    pub ticket_type: TicketType,
    pub estimate: u32,
    pub epic: String,
    pub acceptance_criteria: Vec<String>,
}

impl Ticket {
    pub const DEFAULT_ESTIMATE: u32 = 1;

    pub fn new(epic: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Some(Priority::default()),
            ticket_type: TicketType::default(),
            estimate: Self::DEFAULT_ESTIMATE,
            epic: epic.into(),
            acceptance_criteria: Vec::new(),
        }
    }
}
