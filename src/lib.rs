pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::pipeline::InvitePipeline;
pub use core::runner::{CycleRunner, CycleSchedule, RunSummary};
pub use domain::model::{Candidate, EligibilityCriteria, InvitationBatch};
pub use utils::error::{PartyUpError, Result};
