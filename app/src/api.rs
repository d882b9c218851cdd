//! The host side of the client: executes requests built by `TeamsClient`
//! over reqwest and hands the responses back for parsing.
//!
//! One attempt per call. No retries, and no timeout unless configured.

use std::time::Duration;

use reqwest::{Client, Method};
use teams_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Team, TeamsClient};

const USER_AGENT: &str = concat!("teams/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct TeamsApi {
    client: TeamsClient,
    http: Client,
}

impl TeamsApi {
    pub fn new(collection_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let client = TeamsClient::new(collection_url)?;
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, http })
    }

    pub fn collection_url(&self) -> &str {
        self.client.collection_url()
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{} {}", req.method, req.path);
        let method = match req.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut request = self.http.request(method, req.path.as_str());
        for (key, value) in &req.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        log::debug!("-> {status}");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Every team, in the order the server lists them.
    pub async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        let response = self.execute(self.client.build_list_teams()).await;
        let result = response.and_then(|r| self.client.parse_list_teams(r));
        if let Err(e) = &result {
            log::warn!("listing teams failed: {e}");
        }
        result
    }

    /// `Ok(None)` when no team has this id.
    pub async fn get_team(&self, id: &str) -> Result<Option<Team>, ApiError> {
        let result = async {
            let request = self.client.build_get_team(id)?;
            self.client.parse_get_team(self.execute(request).await?)
        }
        .await;
        match &result {
            Ok(None) => log::debug!("team {id} not found"),
            Err(e) => log::warn!("fetching team {id} failed: {e}"),
            Ok(Some(_)) => {}
        }
        result
    }

    /// Create `team` under its client-chosen id. The response body is not
    /// read, so callers refresh their listing afterwards.
    pub async fn add_team(&self, team: &Team) -> Result<(), ApiError> {
        let result = async {
            let request = self.client.build_create_team(team)?;
            self.client.parse_create_team(self.execute(request).await?)
        }
        .await;
        match &result {
            Ok(()) => log::info!("team {} added", team.id),
            Err(e) => log::warn!("adding team {} failed: {e}", team.id),
        }
        result
    }

    pub async fn delete_team(&self, id: &str) -> Result<(), ApiError> {
        let result = async {
            let request = self.client.build_delete_team(id)?;
            self.client.parse_delete_team(self.execute(request).await?)
        }
        .await;
        match &result {
            Ok(()) => log::info!("team {id} deleted"),
            Err(e) => log::warn!("deleting team {id} failed: {e}"),
        }
        result
    }

    /// Replace the whole record at `id` with `team`.
    pub async fn update_team(&self, id: &str, team: &Team) -> Result<(), ApiError> {
        let result = async {
            let request = self.client.build_update_team(id, team)?;
            self.client.parse_update_team(self.execute(request).await?)
        }
        .await;
        match &result {
            Ok(()) => log::info!("team {id} updated"),
            Err(e) => log::warn!("updating team {id} failed: {e}"),
        }
        result
    }
}
