use crate::domain::model::{Candidate, InvitationBatch, InviteRequest, LookingForPartyResponse};
use crate::utils::error::{PartyUpError, Result};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Thin wrapper over the two Habitica endpoints this tool talks to.
#[derive(Debug, Clone)]
pub struct HabiticaClient {
    client: Client,
    base_url: String,
    api_user: String,
    api_key: String,
}

impl HabiticaClient {
    pub fn new(base_url: &str, api_user: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_user: api_user.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("content-type", "application/json")
            .header("x-client", format!("{}-PartyUp", self.api_user))
            .header("x-api-user", &self.api_user)
            .header("x-api-key", &self.api_key)
    }

    /// GET /api/v3/looking-for-party. Candidates come back in service order.
    pub async fn looking_for_party(&self) -> Result<Vec<Candidate>> {
        let url = format!("{}/api/v3/looking-for-party", self.base_url);
        tracing::debug!("Fetching candidates from {}", url);

        let response = self.authed(self.client.get(&url)).send().await?;
        tracing::debug!("Fetch response status: {}", response.status());

        let body: LookingForPartyResponse = response.json().await?;
        if !body.success {
            return Err(PartyUpError::ProtocolError {
                message: "Request failed, please check your API user and key".to_string(),
            });
        }

        Ok(body.data)
    }

    /// POST /api/v3/groups/party/invite. The response body is read but not
    /// interpreted; transport-level success counts as full success.
    pub async fn invite_to_party(&self, batch: &InvitationBatch) -> Result<()> {
        let url = format!("{}/api/v3/groups/party/invite", self.base_url);
        tracing::debug!("Inviting {} users via {}", batch.len(), url);

        let request = InviteRequest {
            uuids: batch.uuids.clone(),
        };
        let response = self
            .authed(self.client.post(&url))
            .json(&request)
            .send()
            .await?;
        tracing::debug!("Invite response status: {}", response.status());

        let _ = response.bytes().await?;
        Ok(())
    }
}
