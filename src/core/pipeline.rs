use crate::adapters::http::HabiticaClient;
use crate::core::{Candidate, ConfigProvider, InvitationBatch, Pipeline};
use crate::domain::services::select_eligible;
use crate::utils::error::Result;
use chrono::Utc;

pub struct InvitePipeline<C: ConfigProvider> {
    api: HabiticaClient,
    config: C,
}

impl<C: ConfigProvider> InvitePipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        let api = HabiticaClient::new(config.base_url(), config.api_user(), config.api_key())?;
        Ok(Self { api, config })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for InvitePipeline<C> {
    async fn fetch(&self) -> Result<Vec<Candidate>> {
        self.api.looking_for_party().await
    }

    fn filter(&self, candidates: Vec<Candidate>) -> InvitationBatch {
        select_eligible(&candidates, &self.config.criteria(), Utc::now())
    }

    async fn invite(&self, batch: InvitationBatch) -> Result<usize> {
        if batch.is_empty() {
            tracing::debug!("Empty batch, skipping invite request");
            return Ok(0);
        }

        let count = batch.len();
        self.api.invite_to_party(&batch).await?;
        Ok(count)
    }
}
