pub mod pipeline;
pub mod runner;

pub use crate::domain::model::{Candidate, EligibilityCriteria, InvitationBatch};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
