//! The four provenance commands over one project directory.

use std::path::{Path, PathBuf};

use traceseq_core::config::TraceseqConfig;
use traceseq_core::errors::{TraceseqError, TraceseqResult, ValidationError};
use traceseq_core::traits::{
    ChecksumProvider, Clock, IdGenerator, Sha256FileChecksum, SystemClock, UuidGenerator,
};
use traceseq_core::types::{
    Environment, InputDescriptor, Operation, OutputDescriptor, TraceId, TraceNode,
};
use traceseq_core::{annotate_span, diff_span, explain_span, validate_span};
use traceseq_lineage::{diff_lineages, resolve, Lineage, LineageDiff};
use traceseq_storage::{ChecksumIndex, NodeStore, ProjectLayout};
use traceseq_validation::{validate_node, validate_resolved, LineageReport, Ontology};

use crate::request::AnnotateRequest;

/// Provenance commands for the project rooted at one directory.
///
/// The ontology and the checksum index are read fresh on every call.
pub struct TraceEngine {
    root: PathBuf,
    config: TraceseqConfig,
    store: NodeStore,
    checksum: Box<dyn ChecksumProvider>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl TraceEngine {
    /// Open the project at `root` with its layered configuration and the
    /// default SHA-256, system clock and UUID collaborators.
    pub fn open(root: impl Into<PathBuf>) -> TraceseqResult<Self> {
        let root = root.into();
        let config = TraceseqConfig::load(&root)?;
        Ok(Self::new(
            root,
            config,
            Box::new(Sha256FileChecksum::new()),
            Box::new(SystemClock),
            Box::new(UuidGenerator),
        ))
    }

    pub fn new(
        root: impl Into<PathBuf>,
        config: TraceseqConfig,
        checksum: Box<dyn ChecksumProvider>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let root = root.into();
        let store = NodeStore::new(ProjectLayout::new(root.clone(), &config.storage));
        Self {
            root,
            config,
            store,
            checksum,
            clock,
            ids,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &TraceseqConfig {
        &self.config
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn load_ontology(&self) -> TraceseqResult<Ontology> {
        Ok(Ontology::load_for_project(&self.root, &self.config)?)
    }

    /// Record one transformation step and index its input and output digests.
    ///
    /// Unknown operation or assumption terms reject the request before
    /// anything is written, as does a node that would fail its own
    /// validation (an empty method, say). A named parent must already be
    /// stored.
    pub fn annotate(&self, request: &AnnotateRequest) -> TraceseqResult<TraceNode> {
        let _span = annotate_span!(request.input.display(), request.op_class).entered();

        let input_digest = self.checksum.checksum(&request.input)?;
        let output_digest = match &request.output {
            Some(path) => self.checksum.checksum(path)?,
            None => input_digest.clone(),
        };

        let ontology = self.load_ontology()?;
        let issues = vocabulary_issues(request, &ontology);
        if !issues.is_empty() {
            tracing::warn!(issues = issues.len(), "annotation rejected");
            return Err(TraceseqError::Rejected { issues });
        }

        if let Some(parent) = &request.parent {
            self.require_parent(parent)?;
        }

        let mut node = TraceNode {
            trace_id: self.ids.generate(),
            parent: request.parent.clone(),
            timestamp: self.clock.now_timestamp(),
            data_class: request.data_class.clone(),
            operation: Operation {
                op_class: request.op_class.clone(),
                method: request.method.clone(),
                parameters: request.parameters.clone(),
            },
            assumptions: request.assumptions.clone(),
            input: InputDescriptor {
                shape: request.shape.clone(),
                checksum: input_digest.clone(),
            },
            output: OutputDescriptor {
                data_class: request.output_data_class.clone(),
                unit: request.unit.clone(),
                checksum: output_digest.clone(),
            },
            environment: Environment {
                language: self.config.environment.language.clone(),
                tool: self.config.environment.tool.clone(),
                version: self.config.environment.version.clone(),
            },
            ontology_version: ontology.version().to_string(),
        };

        let report = validate_node(&node, &ontology);
        if !report.passed() {
            tracing::warn!(issues = report.issues.len(), "annotation rejected");
            return Err(TraceseqError::Rejected {
                issues: report.issues,
            });
        }

        self.store.save(
            &mut node,
            &input_digest,
            &output_digest,
            &request.output_data_class,
        )?;
        tracing::info!(
            trace_id = %node.trace_id,
            parent = ?node.parent.as_ref().map(TraceId::as_str),
            "annotated"
        );
        Ok(node)
    }

    /// Lineage of the artifact at `path`, root first. `None` when the
    /// artifact's digest is not indexed.
    pub fn explain(&self, path: &Path) -> TraceseqResult<Option<Lineage>> {
        let _span = explain_span!(path.display()).entered();
        self.lineage_of(path)
    }

    /// Compare the lineages of two artifacts. An artifact without
    /// provenance compares as an empty lineage; a truncated side is carried
    /// into the result.
    pub fn diff(&self, left: &Path, right: &Path) -> TraceseqResult<LineageDiff> {
        let _span = diff_span!(left.display(), right.display()).entered();
        let left = self.lineage_of(left)?.unwrap_or_else(empty_lineage);
        let right = self.lineage_of(right)?.unwrap_or_else(empty_lineage);
        Ok(diff_lineages(&left, &right))
    }

    /// Validate the lineage of the artifact at `path`. `None` when the
    /// artifact has no provenance.
    pub fn validate(&self, path: &Path) -> TraceseqResult<Option<LineageReport>> {
        let _span = validate_span!(path.display()).entered();
        let Some(lineage) = self.lineage_of(path)? else {
            return Ok(None);
        };
        let ontology = self.load_ontology()?;
        let report = validate_resolved(&lineage, &ontology);
        tracing::info!(summary = %report.summary(), "validated");
        Ok(Some(report))
    }

    fn lineage_of(&self, path: &Path) -> TraceseqResult<Option<Lineage>> {
        let digest = self.checksum.checksum(path)?;
        let index = ChecksumIndex::load(self.store.layout())?;
        let Some(trace_id) = index.lookup(&digest) else {
            tracing::debug!(digest = %digest, "no provenance recorded");
            return Ok(None);
        };
        Ok(Some(resolve(trace_id, &self.store)))
    }

    fn require_parent(&self, parent: &TraceId) -> TraceseqResult<()> {
        match self.store.load(parent.as_str()) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(TraceseqError::ParentNotFound {
                trace_id: parent.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

fn empty_lineage() -> Lineage {
    Lineage::Complete { nodes: Vec::new() }
}

fn vocabulary_issues(request: &AnnotateRequest, ontology: &Ontology) -> Vec<ValidationError> {
    ontology
        .check_operation(&request.op_class)
        .err()
        .into_iter()
        .chain(
            request
                .assumptions
                .iter()
                .filter_map(|a| ontology.check_assumption(a).err()),
        )
        .collect()
}
