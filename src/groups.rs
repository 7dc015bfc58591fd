//! Queries over the groups fetched from the server
//!
//! Everything here is read-only: the transport fetches the full group listing
//! once and these functions filter and summarize it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::contact::Contact;
use crate::error::SearchError;

/// A group as returned by `GET /api/groups/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub modified_date: String,
    #[serde(default)]
    pub targets: Vec<Contact>,
}

/// Listing view of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
    pub modified_date: String,
    /// Distinct non-empty email addresses among the targets
    pub unique_target_count: usize,
}

/// Summarizes every group, counting each email address once
pub fn list_summaries(groups: &[RemoteGroup]) -> Vec<GroupSummary> {
    groups
        .iter()
        .map(|group| GroupSummary {
            id: group.id,
            name: group.name.clone(),
            modified_date: group.modified_date.clone(),
            unique_target_count: unique_emails(&group.targets),
        })
        .collect()
}

fn unique_emails(targets: &[Contact]) -> usize {
    targets
        .iter()
        .map(|t| t.email.as_str())
        .filter(|email| !email.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Exact, case-sensitive lookup; the first group with that name wins
pub fn find_by_name<'a>(groups: &'a [RemoteGroup], name: &str) -> Option<&'a RemoteGroup> {
    groups.iter().find(|group| group.name == name)
}

/// What to look for in a contact search
///
/// Either an email address, a complete first/last name pair, or both.
/// Empty strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    email: Option<String>,
    name: Option<(String, String)>,
}

impl SearchCriteria {
    /// # Errors
    ///
    /// [`SearchError::InvalidCriteria`] when neither an email nor both name
    /// parts are supplied.
    pub fn new(
        email: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Self, SearchError> {
        let present = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(String::from);

        let email = present(email);
        let name = present(first_name).zip(present(last_name));

        if email.is_none() && name.is_none() {
            return Err(SearchError::InvalidCriteria);
        }

        Ok(Self { email, name })
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn name(&self) -> Option<(&str, &str)> {
        self.name.as_ref().map(|(f, l)| (f.as_str(), l.as_str()))
    }

    pub fn matches(&self, target: &Contact) -> bool {
        let by_email = self.email().is_some_and(|email| target.email == email);
        let by_name = self
            .name()
            .is_some_and(|(first, last)| target.first_name == first && target.last_name == last);
        by_email || by_name
    }
}

/// One matching target and the group it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub group_id: i64,
    pub group_name: &'a str,
    pub contact: &'a Contact,
}

/// Finds targets matching the criteria across all groups
///
/// Each matching (group, target) pair produces one hit, so a contact present
/// in two groups is reported twice. No match is an empty result, not an error.
pub fn search<'a>(
    groups: &'a [RemoteGroup],
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Vec<SearchHit<'a>>, SearchError> {
    let criteria = SearchCriteria::new(email, first_name, last_name)?;
    Ok(search_with(groups, &criteria))
}

pub fn search_with<'a>(groups: &'a [RemoteGroup], criteria: &SearchCriteria) -> Vec<SearchHit<'a>> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .targets
                .iter()
                .filter(move |target| criteria.matches(target))
                .map(move |contact| SearchHit {
                    group_id: group.id,
                    group_name: &group.name,
                    contact,
                })
        })
        .collect()
}
