use async_trait::async_trait;

use crate::domain::issue::{CreatedIssue, IssueDraft};
use crate::domain::team::{Label, Team};
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn list_teams(&self) -> AppResult<Vec<Team>>;
    async fn list_labels(&self, team_id: &str) -> AppResult<Vec<Label>>;
    async fn create_label(&self, team_id: &str, name: &str, color: &str) -> AppResult<Label>;
    async fn create_issue(&self, draft: &IssueDraft) -> AppResult<CreatedIssue>;
}
