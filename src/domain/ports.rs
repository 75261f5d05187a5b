use crate::domain::model::{Candidate, EligibilityCriteria, InvitationBatch};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_user(&self) -> &str;
    fn api_key(&self) -> &str;
    fn criteria(&self) -> EligibilityCriteria;
    fn fetch_interval(&self) -> Duration;
    fn max_cycles(&self) -> i64;
    fn single_run(&self) -> bool;
}

/// One fetch-filter-invite pass. Filtering is pure; the other two phases hit
/// the remote API.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Candidate>>;
    fn filter(&self, candidates: Vec<Candidate>) -> InvitationBatch;
    async fn invite(&self, batch: InvitationBatch) -> Result<usize>;
}
