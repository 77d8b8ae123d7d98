use crate::consts::{DEFAULT_PLATEAU_LIMIT, DEFAULT_RESTARTS};
use crate::error::{BreakError, BreakResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Maximum number of random-restart trials
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,
    /// Stop once the best score has been matched this many times
    #[arg(long, default_value_t = DEFAULT_PLATEAU_LIMIT)]
    pub plateau_limit: usize,
    /// Worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
    /// Wall-clock budget in seconds
    #[arg(long)]
    pub max_time_secs: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            plateau_limit: DEFAULT_PLATEAU_LIMIT,
            threads: 0,
            max_time_secs: None,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BreakResult<Self> {
        let content = fs::read_to_string(path)?;
        let params: SearchParams = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> BreakResult<()> {
        if self.restarts == 0 {
            return Err(BreakError::Config("restarts must be at least 1".into()));
        }
        if self.plateau_limit == 0 {
            return Err(BreakError::Config("plateau_limit must be at least 1".into()));
        }
        Ok(())
    }

    /// Overwrites fields the user typed on the command line, leaving values
    /// loaded from a file in place for everything else.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(restarts, "restarts");
        update_if_present!(plateau_limit, "plateau_limit");
        update_if_present!(threads, "threads");
        update_if_present!(max_time_secs, "max_time_secs");
    }
}
