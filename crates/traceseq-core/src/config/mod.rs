//! Configuration system for traceseq.
//! TOML-based, 3-layer resolution: env > project `traceseq.toml` > defaults.

pub mod environment_config;
pub mod ontology_config;
pub mod storage_config;
pub mod traceseq_config;

pub use environment_config::EnvironmentConfig;
pub use ontology_config::OntologyConfig;
pub use storage_config::StorageConfig;
pub use traceseq_config::TraceseqConfig;
