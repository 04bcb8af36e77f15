use std::path::Path;

use anyhow::Result;

pub mod args;
pub mod builtin;
pub mod file;

/// Trait for the different places expressions can come from (arguments,
/// input file, built-in list).
pub trait ExpressionSource {
    /// Load every expression this source provides.
    fn load(&self) -> Result<Vec<String>>;

    /// Get a human-readable name for this source
    fn source_name(&self) -> &'static str;
}

/// Pick the source matching the command-line flags. The built-in list wins
/// over the file, the file over the arguments.
pub fn create_source(
    use_builtin: bool,
    use_file: bool,
    input: &Path,
    expressions: &[String],
) -> Box<dyn ExpressionSource> {
    if use_builtin {
        Box::new(builtin::BuiltinSource::new())
    } else if use_file {
        Box::new(file::FileSource::new(input.to_path_buf()))
    } else {
        Box::new(args::ArgsSource::new(expressions.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_create_source_precedence() {
        let input = PathBuf::from("cron_expressions.txt");
        let expressions = vec!["* * * * *".to_string()];

        let source = create_source(true, true, &input, &expressions);
        assert_eq!(source.source_name(), "Builtin");

        let source = create_source(false, true, &input, &expressions);
        assert_eq!(source.source_name(), "File");

        let source = create_source(false, false, &input, &expressions);
        assert_eq!(source.source_name(), "Arguments");
    }
}
