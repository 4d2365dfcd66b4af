use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SnipError {
    #[error("I/O error while {operation} '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid version pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("No version found in {}", format_searched(.searched))]
    VersionNotFound { searched: Vec<PathBuf> },
}

impl SnipError {
    pub(crate) fn io(path: impl Into<PathBuf>, operation: &'static str, source: std::io::Error) -> Self {
        SnipError::Io {
            path: path.into(),
            operation,
            source,
        }
    }
}

fn format_searched(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(no sources configured)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_found_lists_every_source() {
        let err = SnipError::VersionNotFound {
            searched: vec![
                PathBuf::from("library/build.gradle.kts"),
                PathBuf::from("gradle/libs.versions.toml"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "No version found in library/build.gradle.kts, gradle/libs.versions.toml"
        );
    }

    #[test]
    fn io_error_names_path_and_operation() {
        let err = SnipError::io(
            "build.log",
            "reading",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error while reading 'build.log': denied");
    }
}
