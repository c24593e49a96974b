use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::issue::{CreatedIssue, IssueDraft};
use crate::domain::team::{Label, Team};
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTeams,
    ListLabels(String),
    CreateLabel(String, String),
    CreateIssue(String),
}

/// In-memory tracker that records every call it receives.
#[derive(Default)]
pub struct FakeTracker {
    teams: Vec<Team>,
    labels: Vec<Label>,
    failing_titles: HashSet<String>,
    fail_label_creation: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeTracker {
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::default()
        }
    }

    pub fn team(id: &str, key: &str) -> Team {
        Team {
            id: id.to_string(),
            name: format!("{key} team"),
            key: key.to_string(),
        }
    }

    pub fn with_label(mut self, id: &str, name: &str) -> Self {
        self.labels.push(Label {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn failing_issue(mut self, title: &str) -> Self {
        self.failing_titles.insert(title.to_string());
        self
    }

    pub fn failing_label_creation(mut self) -> Self {
        self.fail_label_creation = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueTrackerService for FakeTracker {
    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        self.record(Call::ListTeams);
        Ok(self.teams.clone())
    }

    async fn list_labels(&self, team_id: &str) -> AppResult<Vec<Label>> {
        self.record(Call::ListLabels(team_id.to_string()));
        Ok(self.labels.clone())
    }

    async fn create_label(&self, _team_id: &str, name: &str, color: &str) -> AppResult<Label> {
        self.record(Call::CreateLabel(name.to_string(), color.to_string()));
        if self.fail_label_creation {
            return Err(AppError::IssueTracker("label quota exceeded".to_string()));
        }
        Ok(Label {
            id: format!("created-{name}"),
            name: name.to_string(),
        })
    }

    async fn create_issue(&self, draft: &IssueDraft) -> AppResult<CreatedIssue> {
        self.record(Call::CreateIssue(draft.title.clone()));
        if self.failing_titles.contains(&draft.title) {
            return Err(AppError::IssueTracker(format!(
                "Linear API error: cannot create {}",
                draft.title
            )));
        }
        let number = self
            .calls()
            .iter()
            .filter(|call| matches!(call, Call::CreateIssue(_)))
            .count();
        Ok(CreatedIssue {
            id: format!("issue-{number}"),
            identifier: format!("ENG-{number}"),
            title: draft.title.clone(),
            url: format!("https://linear.app/acme/issue/ENG-{number}"),
        })
    }
}
