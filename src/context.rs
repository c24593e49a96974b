use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{IssueTrackerService, TeamResolver};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub team_resolver: Arc<dyn TeamResolver>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        issue_tracker: Arc<dyn IssueTrackerService>,
        team_resolver: Arc<dyn TeamResolver>,
    ) -> Self {
        Self {
            config,
            issue_tracker,
            team_resolver,
        }
    }
}
