use anyhow::Result;

use crate::source::ExpressionSource;

/// Expressions passed directly on the command line.
pub struct ArgsSource {
    expressions: Vec<String>,
}

impl ArgsSource {
    pub fn new(expressions: Vec<String>) -> Self {
        Self { expressions }
    }
}

impl ExpressionSource for ArgsSource {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.expressions.clone())
    }

    fn source_name(&self) -> &'static str {
        "Arguments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_passed_through() {
        let source = ArgsSource::new(vec!["0 2 * * *".to_string(), "* * * * *".to_string()]);
        let loaded = source.load().unwrap();
        assert_eq!(loaded, vec!["0 2 * * *", "* * * * *"]);
    }

    #[test]
    fn test_empty_args() {
        let source = ArgsSource::new(Vec::new());
        assert!(source.load().unwrap().is_empty());
    }
}
