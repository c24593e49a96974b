pub mod issue_tracker;
pub mod team_resolver;

pub use issue_tracker::IssueTrackerService;
pub use team_resolver::TeamResolver;
