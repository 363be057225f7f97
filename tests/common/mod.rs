use merge_count_app::Args;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn args(server: &MockServer, location: Option<&str>, user_count: u32) -> Args {
    Args {
        location: location.map(str::to_string),
        user_count,
        api_token: None,
        api_url: server.uri(),
        approach_limit: 2000,
        remaining: location.is_none(),
    }
}

pub fn rate_limit_body(remaining: u32) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!(r#"{{ "rate": {{ "limit": 5000, "remaining": {} }} }}"#, remaining),
        "application/json",
    )
}

pub async fn mock_rate_limit(server: &MockServer, remaining: u32) {
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(rate_limit_body(remaining))
        .mount(server)
        .await;
}

pub async fn mock_users(server: &MockServer, location: &str, per_page: u32, logins: &[&str]) {
    let items = logins
        .iter()
        .map(|login| format!(r#"{{ "login": "{}" }}"#, login))
        .collect::<Vec<_>>()
        .join(",");
    let body = format!(
        r#"{{ "total_count": {}, "incomplete_results": false, "items": [{}] }}"#,
        logins.len(),
        items
    );
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", format!("location:{} type:user sort:repositories", location)))
        .and(query_param("per_page", per_page.to_string()))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

pub async fn mock_repos(server: &MockServer, login: &str, names: &[&str]) {
    let body = format!(
        "[{}]",
        names
            .iter()
            .map(|name| format!(r#"{{ "name": "{}" }}"#, name))
            .collect::<Vec<_>>()
            .join(",")
    );
    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", login)))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

pub async fn mock_events(server: &MockServer, login: &str, name: &str, merged: u32) {
    // merged closed pulls plus noise that must not be counted
    let mut events: Vec<String> = (0..merged)
        .map(|_| {
            r#"{ "type": "PullRequestEvent", "payload": { "action": "closed", "pull_request": { "merged": true } } }"#
                .to_string()
        })
        .collect();
    events.push(r#"{ "type": "PushEvent" }"#.to_string());
    events.push(
        r#"{ "type": "PullRequestEvent", "payload": { "action": "opened", "pull_request": { "merged": true } } }"#
            .to_string(),
    );
    events.push(
        r#"{ "type": "PullRequestEvent", "payload": { "action": "closed", "pull_request": { "merged": false } } }"#
            .to_string(),
    );
    let body = format!("[{}]", events.join(","));
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/events", login, name)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}
