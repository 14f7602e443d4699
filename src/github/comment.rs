use crate::error::GitHubError;
use crate::report::REPORT_MARKER;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, info};

const PER_PAGE: usize = 100;

/// A pull-request comment, reduced to the fields the upsert decision needs.
/// Deserialized straight from the REST payload so the match logic does not
/// depend on any client library's model types.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
    pub user: CommentAuthor,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentAuthor {
    pub login: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Which transition the upsert takes after the lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum UpsertAction {
    Update { comment_id: u64 },
    Create,
}

/// True for a comment this tool previously posted: authored by a bot account
/// and carrying the report marker heading.
pub fn is_report_comment(comment: &IssueComment) -> bool {
    comment.user.kind == "Bot"
        && comment
            .body
            .as_deref()
            .is_some_and(|body| body.contains(REPORT_MARKER))
}

/// Decide between updating an existing report comment and creating a new one.
/// The first match in the order the API returned wins.
pub fn plan_upsert(comments: &[IssueComment]) -> UpsertAction {
    match comments.iter().find(|c| is_report_comment(c)) {
        Some(existing) => UpsertAction::Update {
            comment_id: existing.id,
        },
        None => UpsertAction::Create,
    }
}

/// Maintains the single report comment on a pull request. Repeated runs
/// overwrite the prior comment instead of appending duplicates.
pub struct CommentUpserter {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl CommentUpserter {
    pub fn new(token: String, owner: String, repo: String) -> Result<Self, GitHubError> {
        let client = Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(GitHubError::Client)?;

        Ok(Self {
            client,
            owner,
            repo,
        })
    }

    /// List, match, then update or create. Errors from any API call
    /// propagate; there is no partial-success state.
    pub async fn upsert(&self, number: u64, body: &str) -> Result<UpsertAction, GitHubError> {
        let comments = self.list_comments(number).await?;
        debug!("Found {} comments on PR #{}", comments.len(), number);

        let action = plan_upsert(&comments);
        match &action {
            UpsertAction::Update { comment_id } => {
                if let Some(existing) = comments.iter().find(|c| c.id == *comment_id) {
                    debug!("Matched report comment by {}", existing.user.login);
                }
                info!("Updating existing report comment {}", comment_id);
                self.update_comment(*comment_id, body).await?;
            }
            UpsertAction::Create => {
                info!("Creating report comment on PR #{}", number);
                self.create_comment(number, body).await?;
            }
        }

        Ok(action)
    }

    async fn list_comments(&self, number: u64) -> Result<Vec<IssueComment>, GitHubError> {
        let mut comments = Vec::new();
        let mut page = 1u32;

        loop {
            let route = format!(
                "/repos/{}/{}/issues/{}/comments?per_page={}&page={}",
                self.owner, self.repo, number, PER_PAGE, page
            );
            let batch: Vec<IssueComment> = self
                .client
                .get(&route, None::<&()>)
                .await
                .map_err(|source| GitHubError::ListComments { number, source })?;

            let last_page = batch.len() < PER_PAGE;
            comments.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(comments)
    }

    async fn update_comment(&self, comment_id: u64, body: &str) -> Result<(), GitHubError> {
        let route = format!(
            "/repos/{}/{}/issues/comments/{}",
            self.owner, self.repo, comment_id
        );
        let _: serde_json::Value = self
            .client
            .patch(&route, Some(&serde_json::json!({ "body": body })))
            .await
            .map_err(|source| GitHubError::UpdateComment {
                id: comment_id,
                source,
            })?;

        Ok(())
    }

    async fn create_comment(&self, number: u64, body: &str) -> Result<(), GitHubError> {
        let route = format!(
            "/repos/{}/{}/issues/{}/comments",
            self.owner, self.repo, number
        );
        let _: serde_json::Value = self
            .client
            .post(&route, Some(&serde_json::json!({ "body": body })))
            .await
            .map_err(|source| GitHubError::CreateComment { number, source })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u64, kind: &str, body: &str) -> IssueComment {
        IssueComment {
            id,
            body: Some(body.to_string()),
            user: CommentAuthor {
                login: "github-actions[bot]".to_string(),
                kind: kind.to_string(),
            },
        }
    }

    #[test]
    fn test_matches_bot_comment_with_marker() {
        let c = comment(1, "Bot", "## Black Formatting Report\n```\n\n```");
        assert!(is_report_comment(&c));
    }

    #[test]
    fn test_rejects_human_comment_with_marker() {
        let c = comment(1, "User", "## Black Formatting Report copied by a human");
        assert!(!is_report_comment(&c));
    }

    #[test]
    fn test_rejects_bot_comment_without_marker() {
        let c = comment(1, "Bot", "Coverage report: 98%");
        assert!(!is_report_comment(&c));
    }

    #[test]
    fn test_rejects_comment_with_no_body() {
        let c = IssueComment {
            id: 1,
            body: None,
            user: CommentAuthor {
                login: "github-actions[bot]".to_string(),
                kind: "Bot".to_string(),
            },
        };
        assert!(!is_report_comment(&c));
    }

    #[test]
    fn test_plan_creates_when_no_match() {
        let comments = vec![
            comment(1, "User", "LGTM"),
            comment(2, "Bot", "Coverage report: 98%"),
        ];
        assert_eq!(plan_upsert(&comments), UpsertAction::Create);
    }

    #[test]
    fn test_plan_creates_on_empty_list() {
        assert_eq!(plan_upsert(&[]), UpsertAction::Create);
    }

    #[test]
    fn test_plan_updates_first_match_in_api_order() {
        let comments = vec![
            comment(10, "User", "LGTM"),
            comment(20, "Bot", "## Black Formatting Report\nold"),
            comment(30, "Bot", "## Black Formatting Report\nolder duplicate"),
        ];
        assert_eq!(
            plan_upsert(&comments),
            UpsertAction::Update { comment_id: 20 }
        );
    }

    #[test]
    fn test_second_run_updates_instead_of_duplicating() {
        // After one run posted the report, planning against the resulting
        // comment list must pick Update, keeping exactly one marker comment.
        let first_run = plan_upsert(&[]);
        assert_eq!(first_run, UpsertAction::Create);

        let after_first = vec![comment(7, "Bot", "## Black Formatting Report\n```\nok\n```")];
        assert_eq!(
            plan_upsert(&after_first),
            UpsertAction::Update { comment_id: 7 }
        );
    }

    #[test]
    fn test_wire_format_deserializes() {
        let json = r###"{
            "id": 123,
            "body": "## Black Formatting Report\n```\n\n```",
            "user": { "login": "github-actions[bot]", "type": "Bot" },
            "created_at": "2024-01-01T00:00:00Z"
        }"###;
        let c: IssueComment = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 123);
        assert_eq!(c.user.kind, "Bot");
        assert!(is_report_comment(&c));
    }
}
