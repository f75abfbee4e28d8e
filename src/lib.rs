// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod registry;
pub mod risk;

// Re-export commonly used types
pub use crate::core::{ContactRecord, Error, ErrorCode, Person, PersonId, Result, StreamRole};

pub use crate::config::{SpreaderConfig, OUTPUT_FILE};

pub use crate::io::{parse_person, ContactStream, ReportWriter, TextReportWriter};

pub use crate::pipeline::{run_files, run_streams, RunSummary};

pub use crate::registry::PersonRegistry;

pub use crate::risk::{
    propagate, sort_descending, ExposureModel, PropagationStats, RiskTier, TierClassifier,
    TierDistribution,
};
