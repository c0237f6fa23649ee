//! The per-spec generation pipeline.
//!
//! Validation of one spec must complete before that spec generates; specs
//! are otherwise independent. One bad spec skips only itself, and a failed
//! artifact write is recorded without aborting the batch.

use crate::builder::BuilderGenerator;
use crate::error::EmitError;
use crate::object::ObjectGenerator;
use crate::plan::ObligationPlan;
use crate::writer::SourceWriter;
use immutix_schema::{Registry, ValidationResult, resolve_properties, validate_object};

/// Outcome of one spec's validation and generation.
#[derive(Debug)]
pub struct SpecOutcome {
    /// Spec name.
    pub spec: String,
    /// Aggregated validation findings.
    pub validation: ValidationResult,
    /// Names of artifacts successfully written.
    pub artifacts: Vec<String>,
    /// Per-artifact emission failures.
    pub emit_failures: Vec<EmitError>,
}

impl SpecOutcome {
    /// True if validation passed and every artifact was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.validation.is_success() && self.emit_failures.is_empty()
    }
}

/// Report over a whole generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-spec outcomes, in registry order.
    pub outcomes: Vec<SpecOutcome>,
}

impl RunReport {
    /// True if every spec validated and emitted cleanly.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(SpecOutcome::is_success)
    }

    /// Returns the outcome for a spec by name.
    #[must_use]
    pub fn outcome(&self, spec: &str) -> Option<&SpecOutcome> {
        self.outcomes.iter().find(|o| o.spec == spec)
    }
}

/// Drives validation and generation over every spec in a registry.
pub struct Pipeline<'a> {
    registry: &'a Registry,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline over a registry.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Validates every spec and generates artifacts for the valid,
    /// object-role ones.
    pub fn run(&self, writer: &mut dyn SourceWriter) -> RunReport {
        let mut report = RunReport::default();

        for spec in self.registry.objects() {
            tracing::debug!(spec = %spec.name, "validating spec");
            let validation = validate_object(spec, self.registry);

            if !validation.warnings.is_empty() {
                tracing::warn!(spec = %spec.name, "{}", validation.warnings.join("\n"));
            }

            let mut outcome = SpecOutcome {
                spec: spec.name.clone(),
                validation,
                artifacts: Vec::new(),
                emit_failures: Vec::new(),
            };

            if !outcome.validation.is_success() {
                tracing::error!(spec = %spec.name, "{}", outcome.validation.errors.join("\n"));
                report.outcomes.push(outcome);
                continue;
            }

            if spec.role.generates() {
                let properties = resolve_properties(spec, self.registry);
                let plan = ObligationPlan::plan(&properties);

                let object = ObjectGenerator::new(spec, &properties).generate();
                let builder = BuilderGenerator::new(spec, &properties, &plan).generate();

                for artifact in [object, builder] {
                    match writer.write(&artifact) {
                        Ok(()) => outcome.artifacts.push(artifact.name),
                        Err(error) => {
                            tracing::error!(artifact = %artifact.name, "{error}");
                            outcome.emit_failures.push(error);
                        }
                    }
                }
            }

            report.outcomes.push(outcome);
        }

        report
    }
}
