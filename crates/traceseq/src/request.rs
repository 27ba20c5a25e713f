use std::collections::BTreeMap;
use std::path::PathBuf;

use traceseq_core::constants::DEFAULT_DATA_CLASS;
use traceseq_core::types::TraceId;

/// Everything the caller states about one transformation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateRequest {
    pub input: PathBuf,
    /// Produced artifact. When absent the output digest is the input digest.
    pub output: Option<PathBuf>,
    pub op_class: String,
    pub method: String,
    pub parameters: BTreeMap<String, String>,
    pub assumptions: Vec<String>,
    pub parent: Option<TraceId>,
    pub data_class: String,
    pub output_data_class: String,
    pub unit: String,
    pub shape: String,
}

impl AnnotateRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        op_class: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: None,
            op_class: op_class.into(),
            method: method.into(),
            parameters: BTreeMap::new(),
            assumptions: Vec::new(),
            parent: None,
            data_class: DEFAULT_DATA_CLASS.to_string(),
            output_data_class: DEFAULT_DATA_CLASS.to_string(),
            unit: String::new(),
            shape: String::new(),
        }
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn parent(mut self, trace_id: impl Into<TraceId>) -> Self {
        self.parent = Some(trace_id.into());
        self
    }

    pub fn assumption(mut self, assumption: impl Into<String>) -> Self {
        self.assumptions.push(assumption.into());
        self
    }

    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn data_class(mut self, data_class: impl Into<String>) -> Self {
        self.data_class = data_class.into();
        self
    }

    pub fn output_data_class(mut self, data_class: impl Into<String>) -> Self {
        self.output_data_class = data_class.into();
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = shape.into();
        self
    }
}
