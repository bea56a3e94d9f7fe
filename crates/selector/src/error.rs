use thiserror::Error;

/// Error produced when a selector cannot be constructed from its patterns.
///
/// Every variant carries the offending pattern so configuration mistakes can
/// be reported verbatim.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// The prefix before `:` names a syntax no dialect implements.
    #[error("unsupported pattern syntax '{syntax}' in '{pattern}'")]
    UnsupportedSyntax {
        /// The unrecognized syntax name.
        syntax: String,
        /// The full pattern as supplied.
        pattern: String,
    },
    /// The glob engine rejected the expression.
    #[error("failed to compile glob pattern '{pattern}'")]
    Glob {
        /// The full pattern as supplied.
        pattern: String,
        /// The engine's rejection.
        source: globset::Error,
    },
    /// The regular-expression engine rejected the expression.
    #[error("failed to compile regex pattern '{pattern}'")]
    Regex {
        /// The full pattern as supplied.
        pattern: String,
        /// The engine's rejection.
        source: regex::Error,
    },
}

impl SelectorError {
    /// Returns the pattern that caused the failure.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::UnsupportedSyntax { pattern, .. }
            | Self::Glob { pattern, .. }
            | Self::Regex { pattern, .. } => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectorError;
    use std::error::Error as _;

    #[test]
    fn glob_error_preserves_pattern_and_source() {
        let glob_err = globset::GlobBuilder::new("[").build().unwrap_err();
        let error = SelectorError::Glob {
            pattern: "[".into(),
            source: glob_err,
        };

        assert_eq!(error.pattern(), "[");
        assert!(error.to_string().contains("failed to compile"));
        assert!(error.source().is_some());
    }

    #[test]
    fn unsupported_syntax_names_the_syntax() {
        let error = SelectorError::UnsupportedSyntax {
            syntax: "ant".into(),
            pattern: "ant:**/*.java".into(),
        };

        assert_eq!(error.pattern(), "ant:**/*.java");
        assert!(error.to_string().contains("'ant'"));
        assert!(error.source().is_none());
    }
}
