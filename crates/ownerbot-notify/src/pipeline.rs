use ownerbot_core::{NotifyConfig, OwnerbotError, OwnersTable};

use crate::comment::{compose_body, reconcile, ReconcileAction};
use crate::context::PrContext;
use crate::github::GitHubClient;
use crate::modules::touched_modules;

/// What a notify run did (or, in dry-run mode, would have done).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No changed file was under the module root.
    NoModulesTouched,
    /// Modules were touched, but none has an owners entry.
    NoOwnersMatched,
    /// A new comment was posted.
    Created {
        /// The body that was posted.
        body: String,
    },
    /// The existing bot comment was updated in place.
    Updated {
        /// Identifier of the updated comment.
        comment_id: u64,
        /// The body that was written.
        body: String,
    },
    /// Dry run: a comment would have been created.
    WouldCreate {
        /// The body that would be posted.
        body: String,
    },
    /// Dry run: the existing bot comment would have been updated.
    WouldUpdate {
        /// Identifier of the comment that would be updated.
        comment_id: u64,
        /// The body that would be written.
        body: String,
    },
}

/// Orchestrates a full notify run against one pull request.
///
/// Lists the PR's changed files, derives touched modules, composes the
/// notification body, and reconciles the single marked bot comment:
/// update it if present, create it otherwise, or do nothing when no owned
/// module was touched.
///
/// At most one comment mutation happens per run, and the marked comment is
/// never deleted. There is no retry around the API calls; a failed call
/// fails the run and the hosting CI reports it.
pub struct NotifyPipeline {
    github: GitHubClient,
    config: NotifyConfig,
}

impl NotifyPipeline {
    /// Create a new pipeline from a GitHub client and notify settings.
    pub fn new(github: GitHubClient, config: NotifyConfig) -> Self {
        Self { github, config }
    }

    /// Run the notification flow for `pr` against `owners`.
    ///
    /// With `dry_run` set, no mutating call is made; the outcome reports
    /// the branch that would have been taken together with the composed
    /// body.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Github`] if any API call fails.
    pub async fn run(
        &self,
        pr: &PrContext,
        owners: &OwnersTable,
        dry_run: bool,
    ) -> Result<NotifyOutcome, OwnerbotError> {
        let changed = self.github.list_changed_files(pr).await?;
        let touched = touched_modules(&self.config.module_root, &changed);
        if touched.is_empty() {
            return Ok(NotifyOutcome::NoModulesTouched);
        }

        let Some(body) = compose_body(&self.config.marker, &touched, owners) else {
            return Ok(NotifyOutcome::NoOwnersMatched);
        };

        let comments = self.github.list_comments(pr).await?;
        let action = reconcile(&comments, &self.config.bot_login, &self.config.marker);

        match (action, dry_run) {
            (ReconcileAction::Create, true) => Ok(NotifyOutcome::WouldCreate { body }),
            (ReconcileAction::Update { comment_id }, true) => {
                Ok(NotifyOutcome::WouldUpdate { comment_id, body })
            }
            (ReconcileAction::Create, false) => {
                self.github.create_comment(pr, &body).await?;
                Ok(NotifyOutcome::Created { body })
            }
            (ReconcileAction::Update { comment_id }, false) => {
                self.github.update_comment(pr, comment_id, &body).await?;
                Ok(NotifyOutcome::Updated { comment_id, body })
            }
        }
    }
}
