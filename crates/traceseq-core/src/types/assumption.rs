//! Parsing of assumption strings: a bare class (`batch_corrected`) or a
//! qualified `class:value` pair (`batch_corrected:combat`).

use crate::constants::ASSUMPTION_VALUE_SEPARATOR;

/// A borrowed view of one assumption string, split on the first `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssumptionRef<'a> {
    pub class: &'a str,
    /// `Some` whenever a separator is present, even if the value is empty.
    pub value: Option<&'a str>,
}

impl<'a> AssumptionRef<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(ASSUMPTION_VALUE_SEPARATOR) {
            Some((class, value)) => Self {
                class,
                value: Some(value),
            },
            None => Self {
                class: raw,
                value: None,
            },
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_class_has_no_value() {
        let a = AssumptionRef::parse("log_scaled");
        assert_eq!(a.class, "log_scaled");
        assert_eq!(a.value, None);
        assert!(!a.is_qualified());
    }

    #[test]
    fn splits_on_first_separator_only() {
        let a = AssumptionRef::parse("reference:GRCh38:p14");
        assert_eq!(a.class, "reference");
        assert_eq!(a.value, Some("GRCh38:p14"));
    }

    #[test]
    fn trailing_separator_yields_empty_value() {
        let a = AssumptionRef::parse("batch_corrected:");
        assert_eq!(a.class, "batch_corrected");
        assert_eq!(a.value, Some(""));
    }
}
