use std::fmt::Display;

use clients::api::RepoRef;
use clients::api::UserId;
use derive_more::Constructor;

/// Per-user aggregate over one scan.
#[derive(Debug, PartialEq, Eq, Constructor)]
pub struct UserSummary {
    pub user: UserId,
    pub repo_count: u32,
    pub merged_count: u32,
}

impl Display for UserSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "user: {}\trepos: {}\tmerged pulls: {}",
            self.user, self.repo_count, self.merged_count
        ))
    }
}

/// Folds per-repository merge counts into per-user summaries.
///
/// Users with the most repositories come first. Ties keep the order in which
/// the users' repositories were first seen in `counts`; the sort must stay
/// stable for that reason.
pub fn build(counts: Vec<(RepoRef, u32)>) -> Vec<UserSummary> {
    let mut summaries: Vec<UserSummary> = Vec::new();
    for (repo, merged) in counts {
        match summaries.iter_mut().find(|summary| summary.user == repo.owner) {
            Some(summary) => {
                summary.repo_count += 1;
                summary.merged_count += merged;
            }
            None => summaries.push(UserSummary::new(repo.owner, 1, merged)),
        }
    }
    summaries.sort_by(|left, right| right.repo_count.cmp(&left.repo_count));
    summaries
}

/// Tests

#[test]
fn groups_and_sums_per_user() {
    let counts = vec![
        (RepoRef::new(UserId::new("a"), "r1".to_string()), 2),
        (RepoRef::new(UserId::new("a"), "r2".to_string()), 3),
        (RepoRef::new(UserId::new("b"), "r3".to_string()), 1),
    ];
    let report = build(counts);
    assert_eq!(
        report,
        vec![
            UserSummary::new(UserId::new("a"), 2, 5),
            UserSummary::new(UserId::new("b"), 1, 1),
        ]
    );
}

#[test]
fn ties_keep_first_seen_order() {
    let counts = vec![
        (RepoRef::new(UserId::new("a"), "r1".to_string()), 0),
        (RepoRef::new(UserId::new("a"), "r2".to_string()), 0),
        (RepoRef::new(UserId::new("b"), "r3".to_string()), 9),
        (RepoRef::new(UserId::new("b"), "r4".to_string()), 9),
        (RepoRef::new(UserId::new("c"), "r5".to_string()), 9),
    ];
    let report = build(counts);
    assert_eq!(
        report,
        vec![
            UserSummary::new(UserId::new("a"), 2, 0),
            UserSummary::new(UserId::new("b"), 2, 18),
            UserSummary::new(UserId::new("c"), 1, 9),
        ]
    );
}

#[test]
fn empty_counts_build_empty_report() {
    assert_eq!(build(Vec::new()), Vec::<UserSummary>::new());
}
