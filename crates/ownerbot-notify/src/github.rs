use serde::Deserialize;

use ownerbot_core::OwnerbotError;

use crate::context::PrContext;

/// A changed file as returned by the PR files endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
    /// Path of the file relative to the repository root.
    pub filename: String,
}

/// An issue comment as returned by the comments endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    /// Comment identifier, used for in-place updates.
    pub id: u64,
    /// Full comment body.
    pub body: String,
    /// Author of the comment.
    pub user: CommentAuthor,
}

/// Author of an issue comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentAuthor {
    /// GitHub login of the author.
    pub login: String,
}

/// GitHub client for the three operations a notify run needs: list a PR's
/// changed files, list its comments, and create or update one comment.
///
/// All calls are sequential and awaited; any API failure is fatal for the
/// invocation and propagates to the caller.
pub struct GitHubClient {
    octocrab: octocrab::Octocrab,
}

impl GitHubClient {
    /// Create a client from an explicit token or the `GITHUB_TOKEN` /
    /// `GH_TOKEN` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Config`] if no token is available, or
    /// [`OwnerbotError::Github`] if the client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ownerbot_notify::github::GitHubClient;
    ///
    /// let client = GitHubClient::new(Some("ghp_xxxx")).unwrap();
    /// ```
    pub fn new(token: Option<&str>) -> Result<Self, OwnerbotError> {
        let token = match token {
            Some(t) => t.to_string(),
            None => std::env::var("GITHUB_TOKEN")
                .or_else(|_| std::env::var("GH_TOKEN"))
                .map_err(|_| {
                    OwnerbotError::Config(
                        "GITHUB_TOKEN not set. Pass --token or set GITHUB_TOKEN env var".into(),
                    )
                })?,
        };

        let octocrab = octocrab::Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| OwnerbotError::Github(format!("failed to create GitHub client: {e}")))?;

        Ok(Self { octocrab })
    }

    /// List the files changed in a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Github`] on network or API errors.
    pub async fn list_changed_files(&self, pr: &PrContext) -> Result<Vec<String>, OwnerbotError> {
        let route = format!(
            "/repos/{}/{}/pulls/{}/files?per_page=100",
            pr.owner, pr.repo, pr.number
        );

        let files: Vec<ChangedFile> = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| OwnerbotError::Github(format!("failed to list PR files: {e}")))?;

        Ok(files.into_iter().map(|f| f.filename).collect())
    }

    /// List the comments on a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Github`] on network or API errors.
    pub async fn list_comments(&self, pr: &PrContext) -> Result<Vec<IssueComment>, OwnerbotError> {
        let route = format!(
            "/repos/{}/{}/issues/{}/comments?per_page=100",
            pr.owner, pr.repo, pr.number
        );

        let comments: Vec<IssueComment> = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| OwnerbotError::Github(format!("failed to list PR comments: {e}")))?;

        Ok(comments)
    }

    /// Create a new comment on a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Github`] on network or API errors.
    pub async fn create_comment(&self, pr: &PrContext, body: &str) -> Result<(), OwnerbotError> {
        let route = format!(
            "/repos/{}/{}/issues/{}/comments",
            pr.owner, pr.repo, pr.number
        );
        let payload = serde_json::json!({ "body": body });

        let _response: serde_json::Value = self
            .octocrab
            .post(route, Some(&payload))
            .await
            .map_err(|e| OwnerbotError::Github(format!("failed to create comment: {e}")))?;

        Ok(())
    }

    /// Replace the body of an existing comment.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Github`] on network or API errors.
    pub async fn update_comment(
        &self,
        pr: &PrContext,
        comment_id: u64,
        body: &str,
    ) -> Result<(), OwnerbotError> {
        let route = format!(
            "/repos/{}/{}/issues/comments/{}",
            pr.owner, pr.repo, comment_id
        );
        let payload = serde_json::json!({ "body": body });

        let _response: serde_json::Value = self
            .octocrab
            .patch(route, Some(&payload))
            .await
            .map_err(|e| OwnerbotError::Github(format!("failed to update comment: {e}")))?;

        Ok(())
    }
}
