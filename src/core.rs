//! Command execution for groupctl
//!
//! This module ties the pieces together for each operation:
//! - create: parse a contact file, sample it, upload the group
//! - list: summarize every group on the instance
//! - show: print one group's targets
//! - search: find a contact across all groups
//! - delete: remove a group by id
//!
//! Each operation issues at most one request to the server. Rendering is
//! kept in plain functions returning `String` so the output format can be
//! tested without a server.

use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, warn};

use crate::{
    config::Config,
    contact::NewGroup,
    groups::{find_by_name, list_summaries, search_with, GroupSummary, RemoteGroup, SearchCriteria, SearchHit},
    http::{CreateOutcome, DeleteOutcome, GophishClient},
    ingest::{parse_file, RowError},
    sample::{sample, SampleRequest},
    sanitize::{sanitize_contact, sanitize_text},
};

const SEPARATOR: &str = "----";

/// Runs group operations against one GoPhish instance
///
/// # Examples
///
/// ```no_run
/// use groupctl::config::Config;
/// use groupctl::core::GroupManager;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::new("phish.example.com", "api-key".to_string(), 10_000, false)?;
/// let manager = GroupManager::new(&config)?;
/// manager.list_groups().await?;
/// # Ok(())
/// # }
/// ```
pub struct GroupManager {
    client: GophishClient,
}

impl GroupManager {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: GophishClient::new(config)?,
        })
    }

    /// Parses `path`, samples the contacts and creates group `name`
    ///
    /// Rows that fail to parse are reported on stderr and skipped. A file
    /// that yields no contacts at all is refused rather than creating an
    /// empty group.
    pub async fn create_group(
        &self,
        path: &Path,
        name: &str,
        delimiter: u8,
        request: &SampleRequest,
    ) -> Result<()> {
        let outcome = parse_file(path, delimiter)
            .with_context(|| format!("Failed to load contacts from {}", path.display()))?;

        if !outcome.is_clean() {
            eprint!("{}", render_row_errors(&outcome.errors));
        }

        let targets = sample(outcome.contacts, request);
        if targets.is_empty() {
            bail!("No contacts to upload from {}", path.display());
        }
        info!("Selected {} targets for group '{}'", targets.len(), name);

        println!("Creating group: {}", name);
        let group = NewGroup {
            name: name.to_string(),
            targets,
        };

        match self.client.create_group(&group).await? {
            CreateOutcome::Created => {
                println!(
                    "Group created successfully with the name: {} ({} targets)",
                    name,
                    group.targets.len()
                );
            }
            CreateOutcome::AlreadyExists => {
                warn!("Group '{}' already exists", name);
                println!(
                    "The group {} already exists. Please rerun the command with a new group name",
                    name
                );
            }
        }

        Ok(())
    }

    /// Prints a summary of every group
    pub async fn list_groups(&self) -> Result<()> {
        let groups = self.client.list_groups().await?;
        print!("{}", render_summaries(&list_summaries(&groups)));
        Ok(())
    }

    /// Prints the targets of the group called `name`
    pub async fn show_group(&self, name: &str) -> Result<()> {
        println!("Details for target group: {}", name);
        let groups = self.client.list_groups().await?;

        match find_by_name(&groups, name) {
            Some(group) => print!("{}", render_group_detail(group)?),
            None => println!("Group '{}' not found", name),
        }
        Ok(())
    }

    /// Prints every group membership of the contact described by `criteria`
    pub async fn search_contacts(&self, criteria: &SearchCriteria) -> Result<()> {
        println!("Searching groups for: {}", describe_criteria(criteria));
        let groups = self.client.list_groups().await?;
        let hits = search_with(&groups, criteria);
        info!("Search matched {} targets", hits.len());

        print!("{}", render_search_hits(&hits));
        Ok(())
    }

    pub async fn delete_group(&self, id: i64) -> Result<()> {
        match self.client.delete_group(id).await? {
            DeleteOutcome::Deleted => println!("Group {} has been successfully deleted.", id),
            DeleteOutcome::NotFound => println!(
                "The group {} does not exist on this instance. Use the list command to see existing groups",
                id
            ),
        }
        Ok(())
    }
}

/// Lists each group's id, name, modification date and unique target count
pub fn render_summaries(summaries: &[GroupSummary]) -> String {
    let mut out = String::from("Existing Groups:\n");
    for summary in summaries {
        let _ = writeln!(out, "{}", SEPARATOR);
        let _ = writeln!(out, "id:{}", summary.id);
        let _ = writeln!(out, "Group Name: {}", sanitize_text(&summary.name));
        let _ = writeln!(out, "Last Modified: {}", sanitize_text(&summary.modified_date));
        let _ = writeln!(out, "Number of Unique Targets: {}", summary.unique_target_count);
    }
    let _ = writeln!(out, "{}", SEPARATOR);
    out
}

/// Header lines followed by the targets as pretty JSON
pub fn render_group_detail(group: &RemoteGroup) -> Result<String> {
    let targets: Vec<_> = group.targets.iter().map(sanitize_contact).collect();
    let targets = serde_json::to_string_pretty(&targets).context("Failed to encode targets")?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", SEPARATOR);
    let _ = writeln!(out, "id:{}", group.id);
    let _ = writeln!(out, "Group Name: {}", sanitize_text(&group.name));
    let _ = writeln!(out, "Last Modified: {}", sanitize_text(&group.modified_date));
    let _ = writeln!(out, "Targets:");
    let _ = writeln!(out, "{}", targets);
    let _ = writeln!(out, "{}", SEPARATOR);
    Ok(out)
}

pub fn render_search_hits(hits: &[SearchHit<'_>]) -> String {
    if hits.is_empty() {
        return "No contact matching the target given.\n".to_string();
    }

    let mut out = String::new();
    for hit in hits {
        let contact = sanitize_contact(hit.contact);
        let _ = writeln!(
            out,
            "Found target in Group: {} (ID: {})",
            sanitize_text(hit.group_name),
            hit.group_id
        );
        let _ = writeln!(
            out,
            "- Email: {}, First Name: {}, Last Name: {}",
            contact.email, contact.first_name, contact.last_name
        );
    }
    out
}

pub fn render_row_errors(errors: &[RowError]) -> String {
    let mut out = String::new();
    for error in errors {
        let _ = writeln!(out, "Skipped line {}: {}", error.line, error.detail);
    }
    let _ = writeln!(out, "{} rows skipped", errors.len());
    out
}

fn describe_criteria(criteria: &SearchCriteria) -> String {
    match (criteria.email(), criteria.name()) {
        (Some(email), Some((first, last))) => format!("{} or {} {}", email, first, last),
        (Some(email), None) => email.to_string(),
        (None, Some((first, last))) => format!("{} {}", first, last),
        (None, None) => String::new(),
    }
}
