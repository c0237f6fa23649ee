//! The narrow emission seam between generation and persistence.

use crate::error::EmitError;
use crate::types::{GeneratedType, to_snake_case};
use std::fs;
use std::path::PathBuf;

/// Consumes generated-type descriptions and persists them as source text.
///
/// Failures are per-artifact; the pipeline reports them and continues with
/// the rest of the batch.
pub trait SourceWriter {
    /// Writes one generated type.
    ///
    /// # Errors
    /// Returns `EmitError` if the artifact could not be persisted.
    fn write(&mut self, artifact: &GeneratedType) -> Result<(), EmitError>;
}

/// Writes each artifact to `{dir}/{snake_case(name)}.rs`.
#[derive(Debug)]
pub struct FsWriter {
    dir: PathBuf,
}

impl FsWriter {
    /// Creates a writer targeting the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the output path for an artifact name.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.rs", to_snake_case(name)))
    }
}

impl SourceWriter for FsWriter {
    fn write(&mut self, artifact: &GeneratedType) -> Result<(), EmitError> {
        fs::write(self.path_for(&artifact.name), artifact.render()).map_err(|source| {
            EmitError::Io {
                artifact: artifact.name.clone(),
                source,
            }
        })
    }
}

/// Collects rendered artifacts in memory.
#[derive(Debug, Default)]
pub struct BufferWriter {
    artifacts: Vec<(String, String)>,
}

impl BufferWriter {
    /// Creates an empty buffer writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected (name, source) pairs in write order.
    #[must_use]
    pub fn artifacts(&self) -> &[(String, String)] {
        &self.artifacts
    }

    /// Returns the rendered source of a named artifact.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|(artifact, _)| artifact == name)
            .map(|(_, source)| source.as_str())
    }
}

impl SourceWriter for BufferWriter {
    fn write(&mut self, artifact: &GeneratedType) -> Result<(), EmitError> {
        self.artifacts
            .push((artifact.name.clone(), artifact.render()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedType {
        GeneratedType::new("ImmutableEndpoint")
    }

    #[test]
    fn test_fs_writer_names_artifacts_snake_case() {
        let writer = FsWriter::new("/tmp/out");
        assert_eq!(
            writer.path_for("ImmutableEndpoint"),
            PathBuf::from("/tmp/out/immutable_endpoint.rs")
        );
    }

    #[test]
    fn test_fs_writer_persists_rendered_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FsWriter::new(dir.path());

        writer.write(&sample()).unwrap();

        let written = fs::read_to_string(dir.path().join("immutable_endpoint.rs")).unwrap();
        assert!(written.contains("pub struct ImmutableEndpoint"));
    }

    #[test]
    fn test_fs_writer_reports_artifact_on_failure() {
        let mut writer = FsWriter::new("/definitely/not/a/directory");

        let err = writer.write(&sample()).unwrap_err();
        assert!(err.to_string().contains("ImmutableEndpoint"));
    }

    #[test]
    fn test_buffer_writer_collects_in_order() {
        let mut writer = BufferWriter::new();
        writer.write(&GeneratedType::new("A")).unwrap();
        writer.write(&GeneratedType::new("B")).unwrap();

        let names: Vec<&str> = writer.artifacts().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(writer.source("A").is_some());
        assert!(writer.source("C").is_none());
    }
}
