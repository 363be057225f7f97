use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SearchUsers {
    pub items: Vec<User>,
}

#[derive(Deserialize, Debug)]
pub struct User {
    pub login: String,
}

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub name: String,
}

/// One entry of a repository's event stream. Everything below `type` is
/// optional so partially populated records deserialize instead of failing
/// the whole page.
#[derive(Deserialize, Debug)]
pub struct Event {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub payload: Option<EventPayload>,
}

#[derive(Deserialize, Debug)]
pub struct EventPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Deserialize, Debug)]
pub struct PullRequest {
    #[serde(default)]
    pub merged: Option<bool>,
}

impl Event {
    /// `PullRequestEvent` closed with the merge flag set. A missing field
    /// anywhere in the chain makes the event non-matching, never an error.
    pub(crate) fn is_merged_pull(&self) -> bool {
        if self.kind.as_deref() != Some("PullRequestEvent") {
            return false;
        }
        self.payload.as_ref().map_or(false, |payload| {
            payload.action.as_deref() == Some("closed")
                && payload.pull_request.as_ref().and_then(|pull| pull.merged) == Some(true)
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct RateLimit {
    pub rate: RateLimitRate,
}

#[derive(Deserialize, Debug)]
pub struct RateLimitRate {
    pub remaining: u32,
}

#[derive(Deserialize, Debug)]
pub struct GithubError {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Event;

    fn event(json: &str) -> Event {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn merged_closed_pull_matches() {
        let event = event(
            r#"{ "type": "PullRequestEvent", "payload": { "action": "closed", "pull_request": { "merged": true } } }"#,
        );
        assert!(event.is_merged_pull());
    }

    #[test]
    fn closed_but_unmerged_pull_does_not_match() {
        let event = event(
            r#"{ "type": "PullRequestEvent", "payload": { "action": "closed", "pull_request": { "merged": false } } }"#,
        );
        assert!(!event.is_merged_pull());
    }

    #[test]
    fn open_pull_does_not_match() {
        let event = event(
            r#"{ "type": "PullRequestEvent", "payload": { "action": "opened", "pull_request": { "merged": true } } }"#,
        );
        assert!(!event.is_merged_pull());
    }

    #[test]
    fn other_event_kind_does_not_match() {
        let event = event(r#"{ "type": "PushEvent", "payload": { "action": "closed" } }"#);
        assert!(!event.is_merged_pull());
    }

    #[test]
    fn missing_merge_flag_is_non_matching_not_an_error() {
        let event = event(r#"{ "type": "PullRequestEvent", "payload": { "action": "closed" } }"#);
        assert!(!event.is_merged_pull());
    }

    #[test]
    fn malformed_record_still_deserializes() {
        let event = event(r#"{ "id": "12345" }"#);
        assert!(!event.is_merged_pull());
    }
}
