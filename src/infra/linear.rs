use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::issue::{CreatedIssue, IssueDraft};
use crate::domain::team::{Label, Team};
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

const TEAMS_QUERY: &str = r#"
query {
    teams {
        nodes {
            id
            name
            key
        }
    }
}
"#;

const LABELS_QUERY: &str = r#"
query($teamId: String!) {
    team(id: $teamId) {
        labels {
            nodes {
                id
                name
            }
        }
    }
}
"#;

const CREATE_LABEL_MUTATION: &str = r#"
mutation($input: IssueLabelCreateInput!) {
    issueLabelCreate(input: $input) {
        issueLabel {
            id
            name
        }
    }
}
"#;

const CREATE_ISSUE_MUTATION: &str = r#"
mutation($input: IssueCreateInput!) {
    issueCreate(input: $input) {
        success
        issue {
            id
            identifier
            title
            url
        }
    }
}
"#;

pub struct LinearClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl LinearClient {
    pub fn new(endpoint: String, api_key: String) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("linear-tickets/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| AppError::IssueTracker(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
    ) -> AppResult<T> {
        debug!(operation, endpoint = %self.endpoint, "sending Linear GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to call Linear: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(status_error(status, &body));
        }

        let payload: GraphqlResponse<T> = response.json().await.map_err(|err| {
            AppError::IssueTracker(format!("failed to parse Linear response: {err}"))
        })?;
        debug!(operation, "Linear GraphQL request completed");

        payload.into_result()
    }
}

fn status_error(status: StatusCode, body: &str) -> AppError {
    let message = match status {
        StatusCode::UNAUTHORIZED => {
            "Linear authentication failed: invalid or expired API key".to_string()
        }
        StatusCode::FORBIDDEN if body.to_lowercase().contains("rate limit") => {
            "Linear API rate limit exceeded".to_string()
        }
        StatusCode::FORBIDDEN => format!("Linear API access forbidden: {body}"),
        StatusCode::NOT_FOUND => format!("Linear resource not found: {body}"),
        _ => format!("Linear responded with {status}: {body}"),
    };
    AppError::IssueTracker(message)
}

#[async_trait]
impl IssueTrackerService for LinearClient {
    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        let data: TeamsData = self.execute("teams", TEAMS_QUERY, json!({})).await?;
        Ok(data.teams.nodes.into_iter().map(Team::from).collect())
    }

    async fn list_labels(&self, team_id: &str) -> AppResult<Vec<Label>> {
        let data: TeamLabelsData = self
            .execute("team.labels", LABELS_QUERY, json!({ "teamId": team_id }))
            .await?;
        let team = data
            .team
            .ok_or_else(|| AppError::IssueTracker(format!("team {team_id} not found")))?;
        Ok(team.labels.nodes.into_iter().map(Label::from).collect())
    }

    async fn create_label(&self, team_id: &str, name: &str, color: &str) -> AppResult<Label> {
        let variables = json!({
            "input": {
                "teamId": team_id,
                "name": name,
                "color": color,
            }
        });
        let data: LabelCreateData = self
            .execute("issueLabelCreate", CREATE_LABEL_MUTATION, variables)
            .await?;
        data.issue_label_create
            .issue_label
            .map(Label::from)
            .ok_or_else(|| {
                AppError::IssueTracker(format!("Linear did not return the created label {name}"))
            })
    }

    async fn create_issue(&self, draft: &IssueDraft) -> AppResult<CreatedIssue> {
        let data: IssueCreateData = self
            .execute("issueCreate", CREATE_ISSUE_MUTATION, json!({ "input": draft }))
            .await?;
        let payload = data.issue_create;
        match payload.issue {
            Some(issue) if payload.success => Ok(issue.into()),
            _ => Err(AppError::IssueTracker(
                "Linear reported the issue was not created".to_string(),
            )),
        }
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

impl<T> GraphqlResponse<T> {
    fn into_result(self) -> AppResult<T> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors
                .iter()
                .map(|error| error.message.as_deref().unwrap_or("unknown error"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::IssueTracker(format!(
                "Linear API error: {messages}"
            )));
        }
        self.data
            .ok_or_else(|| AppError::IssueTracker("Linear response missing data".to_string()))
    }
}

#[derive(Deserialize)]
struct GraphqlError {
    message: Option<String>,
}

#[derive(Deserialize)]
struct Connection<T> {
    nodes: Vec<T>,
}

#[derive(Deserialize)]
struct TeamsData {
    teams: Connection<TeamNode>,
}

#[derive(Deserialize)]
struct TeamNode {
    id: String,
    name: String,
    key: String,
}

impl From<TeamNode> for Team {
    fn from(node: TeamNode) -> Self {
        Team {
            id: node.id,
            name: node.name,
            key: node.key,
        }
    }
}

#[derive(Deserialize)]
struct TeamLabelsData {
    team: Option<TeamLabels>,
}

#[derive(Deserialize)]
struct TeamLabels {
    labels: Connection<LabelNode>,
}

#[derive(Deserialize)]
struct LabelNode {
    id: String,
    name: String,
}

impl From<LabelNode> for Label {
    fn from(node: LabelNode) -> Self {
        Label {
            id: node.id,
            name: node.name,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelCreateData {
    issue_label_create: LabelCreatePayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelCreatePayload {
    issue_label: Option<LabelNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueCreateData {
    issue_create: IssueCreatePayload,
}

#[derive(Deserialize)]
struct IssueCreatePayload {
    success: bool,
    issue: Option<IssueNode>,
}

#[derive(Deserialize)]
struct IssueNode {
    id: String,
    identifier: String,
    title: String,
    url: String,
}

impl From<IssueNode> for CreatedIssue {
    fn from(node: IssueNode) -> Self {
        CreatedIssue {
            id: node.id,
            identifier: node.identifier,
            title: node.title,
            url: node.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_errors_become_tracker_errors() {
        let payload: GraphqlResponse<TeamsData> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Entity not found"}, {"extensions": {}}]}"#,
        )
        .unwrap();
        let err = payload.into_result().err().unwrap();
        assert_eq!(
            err.to_string(),
            "issue tracker error: Linear API error: Entity not found, unknown error"
        );
    }

    #[test]
    fn missing_data_is_an_error() {
        let payload: GraphqlResponse<TeamsData> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(payload.into_result().is_err());
    }

    #[test]
    fn decodes_teams_payload() {
        let payload: GraphqlResponse<TeamsData> = serde_json::from_str(
            r#"{"data": {"teams": {"nodes": [{"id": "t1", "name": "Engineering", "key": "ENG"}]}}}"#,
        )
        .unwrap();
        let teams: Vec<Team> = payload
            .into_result()
            .unwrap()
            .teams
            .nodes
            .into_iter()
            .map(Team::from)
            .collect();
        assert_eq!(teams[0].key, "ENG");
        assert_eq!(teams[0].to_string(), "Engineering (ENG)");
    }

    #[test]
    fn decodes_issue_create_payload() {
        let payload: GraphqlResponse<IssueCreateData> = serde_json::from_str(
            r#"{"data": {"issueCreate": {"success": true, "issue": {
                "id": "i1", "identifier": "ENG-7", "title": "Init repo",
                "url": "https://linear.app/acme/issue/ENG-7"}}}}"#,
        )
        .unwrap();
        let data = payload.into_result().unwrap();
        assert!(data.issue_create.success);
        let issue: CreatedIssue = data.issue_create.issue.unwrap().into();
        assert_eq!(issue.identifier, "ENG-7");
    }

    #[test]
    fn maps_status_codes_to_messages() {
        assert!(
            status_error(StatusCode::UNAUTHORIZED, "")
                .to_string()
                .contains("invalid or expired API key")
        );
        assert!(
            status_error(StatusCode::FORBIDDEN, "Rate limit hit")
                .to_string()
                .contains("rate limit exceeded")
        );
        assert!(
            status_error(StatusCode::BAD_GATEWAY, "upstream")
                .to_string()
                .contains("502 Bad Gateway: upstream")
        );
    }
}
