//! HTTP client for the GoPhish admin API
//!
//! This module wraps the handful of group endpoints the tool needs:
//! - `GET /api/groups/` to fetch every group with its targets
//! - `POST /api/groups/` to create a group
//! - `DELETE /api/groups/{id}` to remove one
//!
//! Requests are authenticated with the API key as a bearer token. Each
//! command issues its requests sequentially and a failed request is reported
//! as is; nothing is retried.

use anyhow::{bail, Context, Result};
use reqwest::{Client, ClientBuilder, Response, StatusCode, Url};
use tracing::{debug, info};

use crate::config::Config;
use crate::contact::NewGroup;
use crate::groups::RemoteGroup;

/// Result of a create request the server understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// A group with that name exists already (HTTP 409)
    AlreadyExists,
}

/// Result of a delete request the server understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No group with that id (HTTP 404)
    NotFound,
}

/// Client bound to one GoPhish instance
///
/// # Examples
///
/// ```no_run
/// use groupctl::config::Config;
/// use groupctl::http::GophishClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::new("phish.example.com", "api-key".to_string(), 10_000, false)?;
/// let client = GophishClient::new(&config)?;
/// let groups = client.list_groups().await?;
/// println!("{} groups", groups.len());
/// # Ok(())
/// # }
/// ```
pub struct GophishClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl GophishClient {
    /// Creates a client from the runtime configuration
    ///
    /// # Arguments
    /// * `config` - Instance URL, API key, timeout and certificate policy
    ///
    /// # Returns
    /// * `Result<Self>` - A configured client or error if initialization failed
    pub fn new(config: &Config) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(concat!("groupctl/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Resolves an API path against the instance root
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for {}", path))
    }

    /// Fetches every group, including its targets
    pub async fn list_groups(&self) -> Result<Vec<RemoteGroup>> {
        let url = self.endpoint("api/groups/")?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to send group listing request")?;

        if response.status() != StatusCode::OK {
            bail!("Failed to fetch groups: {}", describe_failure(response).await);
        }

        let groups: Vec<RemoteGroup> = response
            .json()
            .await
            .context("Failed to decode group listing")?;

        debug!("Fetched {} groups", groups.len());
        Ok(groups)
    }

    /// Creates a group with the given targets
    pub async fn create_group(&self, group: &NewGroup) -> Result<CreateOutcome> {
        let url = self.endpoint("api/groups/")?;
        info!("Creating group '{}' with {} targets", group.name, group.targets.len());

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(group)
            .send()
            .await
            .context("Failed to send create group request")?;

        match response.status() {
            StatusCode::CREATED => Ok(CreateOutcome::Created),
            StatusCode::CONFLICT => Ok(CreateOutcome::AlreadyExists),
            _ => bail!(
                "Failed to create group '{}': {}",
                group.name,
                describe_failure(response).await
            ),
        }
    }

    /// Deletes a group by id
    pub async fn delete_group(&self, id: i64) -> Result<DeleteOutcome> {
        let url = self.endpoint(&format!("api/groups/{}", id))?;
        info!("Deleting group {}", id);

        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to send delete group request")?;

        match response.status() {
            StatusCode::OK => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::NotFound),
            _ => bail!("Failed to delete group {}: {}", id, describe_failure(response).await),
        }
    }
}

async fn describe_failure(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => format!("{} - {}", status, body.trim()),
        _ => status.to_string(),
    }
}
