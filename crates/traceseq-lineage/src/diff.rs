//! Step-by-step comparison of two lineages.
//!
//! Steps are aligned by position, root first. Only the operation class,
//! the method, and the assumption sequence are compared; checksums,
//! timestamps and ids are expected to differ between any two runs.

use serde::Serialize;
use traceseq_core::types::{TraceId, TraceNode};

use crate::resolver::Lineage;

/// One differing field at one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDiff {
    pub field: &'static str,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDiff {
    Identical { step: usize },
    Changed { step: usize, fields: Vec<FieldDiff> },
}

impl StepDiff {
    pub fn step(&self) -> usize {
        match self {
            Self::Identical { step } | Self::Changed { step, .. } => *step,
        }
    }

    pub fn fields(&self) -> &[FieldDiff] {
        match self {
            Self::Identical { .. } => &[],
            Self::Changed { fields, .. } => fields,
        }
    }

    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical { .. })
    }
}

/// Which side has steps beyond the common prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trailing {
    None,
    Left(usize),
    Right(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineageDiff {
    /// `(left_len, right_len)` when the lineages differ in length.
    pub length_mismatch: Option<(usize, usize)>,
    /// One entry per step of the common prefix.
    pub steps: Vec<StepDiff>,
    pub trailing: Trailing,
    /// Id at which the left lineage was truncated, if it was.
    pub left_missing: Option<TraceId>,
    /// Id at which the right lineage was truncated, if it was.
    pub right_missing: Option<TraceId>,
}

impl LineageDiff {
    /// Never true when either side is truncated.
    pub fn is_identical(&self) -> bool {
        !self.is_truncated()
            && self.length_mismatch.is_none()
            && self.steps.iter().all(StepDiff::is_identical)
    }

    pub fn is_truncated(&self) -> bool {
        self.left_missing.is_some() || self.right_missing.is_some()
    }

    pub fn differing_field_count(&self) -> usize {
        self.steps.iter().map(|s| s.fields().len()).sum()
    }

    pub fn changed_steps(&self) -> impl Iterator<Item = &StepDiff> {
        self.steps.iter().filter(|s| !s.is_identical())
    }
}

/// Compare `left` and `right` position by position.
///
/// A length difference is recorded but does not stop the comparison of
/// the overlapping prefix.
pub fn diff(left: &[TraceNode], right: &[TraceNode]) -> LineageDiff {
    let length_mismatch = (left.len() != right.len()).then_some((left.len(), right.len()));

    let steps = left
        .iter()
        .zip(right)
        .enumerate()
        .map(|(step, (a, b))| {
            let fields = compare_step(a, b);
            if fields.is_empty() {
                StepDiff::Identical { step }
            } else {
                StepDiff::Changed { step, fields }
            }
        })
        .collect();

    let trailing = match left.len().cmp(&right.len()) {
        std::cmp::Ordering::Greater => Trailing::Left(left.len() - right.len()),
        std::cmp::Ordering::Less => Trailing::Right(right.len() - left.len()),
        std::cmp::Ordering::Equal => Trailing::None,
    };

    let result = LineageDiff {
        length_mismatch,
        steps,
        trailing,
        left_missing: None,
        right_missing: None,
    };
    tracing::debug!(
        left = left.len(),
        right = right.len(),
        differing_fields = result.differing_field_count(),
        "lineages compared"
    );
    result
}

/// Compare two resolved lineages, carrying over where either was truncated.
pub fn diff_lineages(left: &Lineage, right: &Lineage) -> LineageDiff {
    let mut result = diff(left.nodes(), right.nodes());
    result.left_missing = left.missing().cloned();
    result.right_missing = right.missing().cloned();
    if result.is_truncated() {
        tracing::warn!(
            left_missing = ?result.left_missing.as_ref().map(TraceId::as_str),
            right_missing = ?result.right_missing.as_ref().map(TraceId::as_str),
            "diffing a truncated lineage"
        );
    }
    result
}

fn compare_step(a: &TraceNode, b: &TraceNode) -> Vec<FieldDiff> {
    let mut fields = Vec::new();
    if a.operation.op_class != b.operation.op_class {
        fields.push(FieldDiff {
            field: "operation.op_class",
            left: a.operation.op_class.clone(),
            right: b.operation.op_class.clone(),
        });
    }
    if a.operation.method != b.operation.method {
        fields.push(FieldDiff {
            field: "operation.method",
            left: a.operation.method.clone(),
            right: b.operation.method.clone(),
        });
    }
    if a.assumptions != b.assumptions {
        fields.push(FieldDiff {
            field: "assumptions",
            left: render_list(&a.assumptions),
            right: render_list(&b.assumptions),
        });
    }
    fields
}

fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assumption_lists_render_in_brackets() {
        assert_eq!(render_list(&[]), "[]");
        assert_eq!(
            render_list(&["log_scaled".into(), "batch_corrected:combat".into()]),
            "[log_scaled, batch_corrected:combat]"
        );
    }
}
