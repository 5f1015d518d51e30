use std::collections::BTreeSet;

use ownerbot_core::OwnersTable;

use crate::github::IssueComment;

/// Header line emitted after the marker in every notification comment.
pub const HEADER: &str = "A review is required from the following owners:";

/// Compose the notification comment body.
///
/// The body is the marker line, the header line, and one line per touched
/// module that has an owners entry, in the form `- <module>: <owner1>,
/// <owner2>, …`. Touched modules without an entry are skipped. Module lines
/// follow the sorted order of `touched`, so identical inputs always produce
/// an identical body.
///
/// Returns `None` when no touched module resolved to any owners; an empty
/// notification is never posted.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use ownerbot_core::OwnersTable;
/// use ownerbot_notify::comment::compose_body;
///
/// let owners = OwnersTable::from_json(r#"{"foo": ["alice"]}"#).unwrap();
/// let touched: BTreeSet<String> = ["foo".to_string()].into();
/// let body = compose_body("<!-- owners -->", &touched, &owners).unwrap();
/// assert_eq!(
///     body,
///     "<!-- owners -->\nA review is required from the following owners:\n- foo: alice"
/// );
/// ```
pub fn compose_body(
    marker: &str,
    touched: &BTreeSet<String>,
    owners: &OwnersTable,
) -> Option<String> {
    let mut lines = vec![marker.to_string(), HEADER.to_string()];
    for module in touched {
        if let Some(module_owners) = owners.owners_of(module) {
            lines.push(format!("- {}: {}", module, module_owners.join(", ")));
        }
    }
    if lines.len() == 2 {
        return None;
    }
    Some(lines.join("\n"))
}

/// The comment mutation a notify run will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// No bot comment exists yet; create one.
    Create,
    /// A bot comment exists; update it in place.
    Update {
        /// Identifier of the existing comment.
        comment_id: u64,
    },
}

/// Decide whether to create a new comment or update an existing one.
///
/// Scans `comments` for one authored by `bot_login` whose body starts with
/// `marker`. At most one such comment exists per pull request; the first
/// match wins. Searching before creating is what keeps the run idempotent.
pub fn reconcile(comments: &[IssueComment], bot_login: &str, marker: &str) -> ReconcileAction {
    match comments
        .iter()
        .find(|c| c.user.login == bot_login && c.body.starts_with(marker))
    {
        Some(existing) => ReconcileAction::Update {
            comment_id: existing.id,
        },
        None => ReconcileAction::Create,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::CommentAuthor;

    fn table() -> OwnersTable {
        OwnersTable::from_json(r#"{"foo": ["alice"], "bar": ["bob", "carol"]}"#).unwrap()
    }

    fn touched(modules: &[&str]) -> BTreeSet<String> {
        modules.iter().map(|m| m.to_string()).collect()
    }

    fn comment(id: u64, login: &str, body: &str) -> IssueComment {
        IssueComment {
            id,
            body: body.into(),
            user: CommentAuthor {
                login: login.into(),
            },
        }
    }

    const MARKER: &str = "<!-- owners-notification-bot -->";

    #[test]
    fn body_lists_owned_modules_in_sorted_order() {
        let body = compose_body(MARKER, &touched(&["foo", "bar", "baz"]), &table()).unwrap();
        assert_eq!(
            body,
            format!("{MARKER}\n{HEADER}\n- bar: bob, carol\n- foo: alice")
        );
    }

    #[test]
    fn owners_keep_stored_order_within_a_line() {
        let body = compose_body(MARKER, &touched(&["bar"]), &table()).unwrap();
        assert!(body.ends_with("- bar: bob, carol"));
    }

    #[test]
    fn all_unowned_modules_yield_no_body() {
        assert!(compose_body(MARKER, &touched(&["baz", "qux"]), &table()).is_none());
    }

    #[test]
    fn empty_touched_set_yields_no_body() {
        assert!(compose_body(MARKER, &BTreeSet::new(), &table()).is_none());
    }

    #[test]
    fn identical_inputs_produce_identical_bodies() {
        let a = compose_body(MARKER, &touched(&["foo", "bar"]), &table());
        let b = compose_body(MARKER, &touched(&["bar", "foo"]), &table());
        assert_eq!(a, b);
    }

    #[test]
    fn reconcile_finds_marked_bot_comment() {
        let comments = vec![
            comment(1, "human", "looks good"),
            comment(2, "github-actions[bot]", "some other bot output"),
            comment(3, "github-actions[bot]", &format!("{MARKER}\nold body")),
        ];
        let action = reconcile(&comments, "github-actions[bot]", MARKER);
        assert_eq!(action, ReconcileAction::Update { comment_id: 3 });
    }

    #[test]
    fn reconcile_ignores_marker_from_other_authors() {
        let comments = vec![comment(1, "human", &format!("{MARKER}\nquoted marker"))];
        let action = reconcile(&comments, "github-actions[bot]", MARKER);
        assert_eq!(action, ReconcileAction::Create);
    }

    #[test]
    fn reconcile_creates_when_no_comments_exist() {
        let action = reconcile(&[], "github-actions[bot]", MARKER);
        assert_eq!(action, ReconcileAction::Create);
    }
}
