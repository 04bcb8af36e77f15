use anyhow::Result;

use crate::source::ExpressionSource;

/// Demonstration expressions compiled into the binary.
const BUILTIN_EXPRESSIONS: &[&str] = &[
    "*/5 * * * *",
    "0 * * * *",
    "30 2 * * *",
    "0 9-17 * * 1-5",
    "0 0 1 * *",
    "15 14 * * SUN",
];

pub struct BuiltinSource;

impl BuiltinSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuiltinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionSource for BuiltinSource {
    fn load(&self) -> Result<Vec<String>> {
        Ok(BUILTIN_EXPRESSIONS.iter().map(|s| s.to_string()).collect())
    }

    fn source_name(&self) -> &'static str {
        "Builtin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleExpression;

    #[test]
    fn test_builtin_list_is_not_empty() {
        assert!(!BuiltinSource::new().load().unwrap().is_empty());
    }

    #[test]
    fn test_every_builtin_expression_parses() {
        for text in BuiltinSource::new().load().unwrap() {
            assert!(text.parse::<ScheduleExpression>().is_ok(), "{}", text);
        }
    }
}
