//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::{Oid, Sort};
use tracing::debug;

use shiplog_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Get commits since a revision (tag name, hash, or refspec),
    /// newest first, merge commits skipped
    pub fn commits_since(&self, since: &str) -> Result<Vec<CommitInfo>> {
        let since_oid = self
            .repo
            .revparse_single(since)
            .map_err(|_| GitError::UnknownRevision(since.to_string()))?
            .peel_to_commit()
            .map_err(GitError::Git2)?
            .id();
        self.walk(Some(since_oid))
    }

    /// Get commits since a tag
    pub fn commits_since_tag(&self, tag_name: &str) -> Result<Vec<CommitInfo>> {
        let tag_ref = format!("refs/tags/{}", tag_name);
        let reference = self
            .repo
            .find_reference(&tag_ref)
            .map_err(|_| GitError::UnknownRevision(tag_name.to_string()))?;
        let target = reference.peel_to_commit().map_err(GitError::Git2)?;

        self.walk(Some(target.id()))
    }

    /// Get all commits on the current branch
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        self.walk(None)
    }

    fn walk(&self, hide: Option<Oid>) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        if let Some(oid) = hide {
            revwalk.hide(oid)?;
        }

        let mut commits = Vec::new();
        let mut skipped_merges = 0usize;

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            // Input contract: one-line subjects, no merge commits
            if commit.parent_count() > 1 {
                skipped_merges += 1;
                continue;
            }

            commits.push(commit_to_info(&commit));
        }

        debug!(
            count = commits.len(),
            skipped_merges, "collected commit subjects"
        );

        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let author = commit.author();

    let subject = commit.summary().unwrap_or("(no message)").to_string();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(
        hash,
        subject,
        author.name().unwrap_or("Unknown"),
        timestamp,
    )
}
