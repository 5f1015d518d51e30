use std::path::Path;

use serde::Deserialize;

use ownerbot_core::OwnerbotError;

/// The pull request a notify run targets.
///
/// Resolved either from an explicit `owner/repo#number` reference or from
/// the GitHub Actions event environment. Without one of the two there is
/// nothing to comment on, so resolution failure is fatal.
///
/// # Examples
///
/// ```
/// use ownerbot_notify::context::PrContext;
///
/// let pr = PrContext::parse("rust-lang/rust#12345").unwrap();
/// assert_eq!(pr.owner, "rust-lang");
/// assert_eq!(pr.repo, "rust");
/// assert_eq!(pr.number, 12345);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrContext {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Pull request number.
    pub number: u64,
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestRef>,
}

#[derive(Deserialize)]
struct PullRequestRef {
    number: u64,
}

impl PrContext {
    /// Parse a PR reference string (`owner/repo#number`) into its components.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Config`] if the format is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ownerbot_notify::context::PrContext;
    ///
    /// let pr = PrContext::parse("octocat/hello-world#42").unwrap();
    /// assert_eq!(pr.repo, "hello-world");
    /// ```
    pub fn parse(pr_ref: &str) -> Result<Self, OwnerbotError> {
        let Some((owner_repo, number_str)) = pr_ref.split_once('#') else {
            return Err(OwnerbotError::Config(format!(
                "invalid PR reference '{pr_ref}', expected owner/repo#number"
            )));
        };
        let Some((owner, repo)) = owner_repo.split_once('/') else {
            return Err(OwnerbotError::Config(format!(
                "invalid PR reference '{pr_ref}', expected owner/repo#number"
            )));
        };
        let number: u64 = number_str
            .parse()
            .map_err(|_| OwnerbotError::Config(format!("invalid PR number: {number_str}")))?;
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        })
    }

    /// Build a context from a `owner/repo` slug and a raw event payload.
    ///
    /// The payload is the JSON document GitHub Actions writes to
    /// `GITHUB_EVENT_PATH`; only `pull_request.number` is read from it.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Config`] if the slug is malformed or the
    /// payload carries no pull request, or [`OwnerbotError::Serialization`]
    /// if the payload is not valid JSON.
    pub fn from_event(repository: &str, payload: &str) -> Result<Self, OwnerbotError> {
        let Some((owner, repo)) = repository.split_once('/') else {
            return Err(OwnerbotError::Config(format!(
                "invalid repository slug '{repository}', expected owner/repo"
            )));
        };
        let event: EventPayload = serde_json::from_str(payload)?;
        let Some(pull_request) = event.pull_request else {
            return Err(OwnerbotError::Config(
                "event payload has no pull_request; ownerbot must run on a pull request event"
                    .into(),
            ));
        };
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number: pull_request.number,
        })
    }

    /// Resolve the context from the GitHub Actions environment
    /// (`GITHUB_REPOSITORY` and `GITHUB_EVENT_PATH`).
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Config`] if either variable is missing or
    /// the event payload carries no pull request, and [`OwnerbotError::Io`]
    /// if the event file cannot be read.
    pub fn from_env() -> Result<Self, OwnerbotError> {
        let repository = std::env::var("GITHUB_REPOSITORY").map_err(|_| {
            OwnerbotError::Config(
                "GITHUB_REPOSITORY not set. Pass --pr owner/repo#number or run in GitHub Actions"
                    .into(),
            )
        })?;
        let event_path = std::env::var("GITHUB_EVENT_PATH").map_err(|_| {
            OwnerbotError::Config(
                "GITHUB_EVENT_PATH not set. Pass --pr owner/repo#number or run in GitHub Actions"
                    .into(),
            )
        })?;
        let payload = std::fs::read_to_string(Path::new(&event_path))?;
        Self::from_event(&repository, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_pr_reference() {
        let pr = PrContext::parse("rust-lang/rust#12345").unwrap();
        assert_eq!(pr.owner, "rust-lang");
        assert_eq!(pr.repo, "rust");
        assert_eq!(pr.number, 12345);
    }

    #[test]
    fn parse_pr_reference_missing_hash() {
        assert!(PrContext::parse("owner/repo").is_err());
    }

    #[test]
    fn parse_pr_reference_missing_slash() {
        assert!(PrContext::parse("repo#123").is_err());
    }

    #[test]
    fn parse_pr_reference_invalid_number() {
        assert!(PrContext::parse("owner/repo#abc").is_err());
    }

    #[test]
    fn from_event_reads_pull_request_number() {
        let payload = r#"{"action": "opened", "pull_request": {"number": 7, "title": "x"}}"#;
        let pr = PrContext::from_event("octo/widgets", payload).unwrap();
        assert_eq!(
            pr,
            PrContext {
                owner: "octo".into(),
                repo: "widgets".into(),
                number: 7,
            }
        );
    }

    #[test]
    fn from_event_rejects_non_pr_payload() {
        let payload = r#"{"action": "push"}"#;
        let err = PrContext::from_event("octo/widgets", payload).unwrap_err();
        assert!(err.to_string().contains("pull request"));
    }

    #[test]
    fn from_event_rejects_bad_slug() {
        let payload = r#"{"pull_request": {"number": 7}}"#;
        assert!(PrContext::from_event("not-a-slug", payload).is_err());
    }
}
