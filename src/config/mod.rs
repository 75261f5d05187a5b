use crate::domain::model::EligibilityCriteria;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "party-up")]
#[command(about = "Fetch Habitica users looking for a party and invite them in batches")]
pub struct CliConfig {
    /// Habitica API user id
    #[arg(long, default_value = "")]
    pub api_user: String,

    /// Habitica API key
    #[arg(long, default_value = "")]
    pub api_key: String,

    /// Minimum level of users to invite
    #[arg(long, default_value_t = 0)]
    pub min_lvl: i64,

    /// Seconds to wait between cycles
    #[arg(long, default_value_t = 120)]
    pub fetch_interval: u64,

    /// Only invite users with this preferred language (empty = all languages)
    #[arg(long, default_value = "")]
    pub language: String,

    /// Only invite users active recently on accounts older than a month
    #[arg(long)]
    pub only_active: bool,

    /// Number of fetch-filter-invite cycles to run
    #[arg(long, default_value_t = 1)]
    pub max_cycles: i64,

    /// Run exactly one cycle and exit (overrides --max-cycles)
    #[arg(long)]
    pub single_run: bool,

    #[arg(long, default_value = "https://habitica.com")]
    pub base_url: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_user(&self) -> &str {
        &self.api_user
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn criteria(&self) -> EligibilityCriteria {
        EligibilityCriteria {
            min_level: self.min_lvl,
            language: if self.language.is_empty() {
                None
            } else {
                Some(self.language.clone())
            },
            only_active: self.only_active,
        }
    }

    fn fetch_interval(&self) -> Duration {
        Duration::from_secs(self.fetch_interval)
    }

    fn max_cycles(&self) -> i64 {
        self.max_cycles
    }

    fn single_run(&self) -> bool {
        self.single_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("Habitica API user (--api-user)", &self.api_user)?;
        validate_non_empty_string("Habitica API key (--api-key)", &self.api_key)?;
        validate_url("base_url", &self.base_url)?;
        Ok(())
    }
}
