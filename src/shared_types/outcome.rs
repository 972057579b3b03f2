use std::fmt::Display;

use clap::ValueEnum;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{status}")]
    Status {
        status: StatusCode,
        body: Option<String>,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("field '{0}' is missing")]
    MissingField(&'static str),

    #[error("not a key record: {0}")]
    Shape(#[from] serde_json::Error),
}

/// what to do when a source record can't be turned into a user payload
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone, Copy, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// stop the whole migration at the first malformed record
    #[default]
    Halt,
    /// report it and carry on with the next record
    Skip,
}

impl Display for MalformedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Halt => write!(f, "halt"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

#[derive(Debug)]
pub enum RecordOutcome {
    Created,
    Failed(ApiError),
    Malformed(TransformError),
    /// dry run, payload was built but never sent
    Skipped,
}

#[derive(Debug)]
pub struct RecordReport {
    pub id: u32,
    pub name: Option<String>,
    pub outcome: RecordOutcome,
}

#[derive(Debug, Default)]
pub struct MigrationReport {
    pub records: Vec<RecordReport>,
}

impl MigrationReport {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::Created))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::Failed(_)))
    }

    pub fn malformed(&self) -> usize {
        self.count(|o| matches!(o, RecordOutcome::Malformed(_)))
    }

    fn count<F>(&self, f: F) -> usize
    where
        F: Fn(&RecordOutcome) -> bool,
    {
        self.records.iter().filter(|r| f(&r.outcome)).count()
    }
}
