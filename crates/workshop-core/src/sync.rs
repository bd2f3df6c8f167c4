//! Reconciliation orchestration
//!
//! One pass: name every manifest-bearing project, then mirror solution
//! tests into every problem variant. All naming runs before any mirroring
//! so a failure during the destructive directory work never leaves
//! manifests half-renamed.

use serde::{Deserialize, Serialize};

use crate::classify::WorkshopLayout;
use crate::mirror::MirrorOutcome;
use crate::{NormalizedPath, Result, manifest, mirror};

/// Options for a reconciliation run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// If true, report what would change without touching the filesystem.
    pub dry_run: bool,
}

/// Report from a reconciliation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Root-relative paths of manifests whose name field changed.
    pub updated: Vec<String>,
    /// Root-relative paths of problem variants whose tests were mirrored.
    pub mirrored: Vec<String>,
}

/// Engine for one-pass workshop reconciliation
///
/// Processing is fully sequential, one project or variant at a time. A
/// fatal error on any of them aborts before later ones are touched; reruns
/// are safe because both operations are idempotent in observable content.
pub struct SyncEngine {
    root: NormalizedPath,
}

impl SyncEngine {
    /// Create an engine for the workshop repository at `root`.
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    /// Get the workshop root path.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Run the full reconciliation pass.
    ///
    /// Names every project first, then mirrors tests for every problem
    /// variant. An absent `examples/` or `exercises/` root is a valid,
    /// empty workshop and yields an empty report.
    ///
    /// # Errors
    ///
    /// Propagates the first manifest parse error or filesystem error and
    /// stops there; there is no partial-success accounting.
    pub fn run(&self, options: SyncOptions) -> Result<SyncReport> {
        let layout = WorkshopLayout::discover(&self.root)?;
        let mut report = SyncReport::default();

        for project in layout.projects() {
            let outcome = if options.dry_run {
                manifest::preview_name(&self.root, &project)?
            } else {
                manifest::apply_name(&self.root, &project)?
            };
            if outcome.changed {
                report.updated.push(self.relative_label(&project.manifest_path()));
            }
        }

        for variant in layout.problem_variants() {
            let outcome = if options.dry_run {
                if mirror::solution_for(&variant.path)
                    .join(mirror::TESTS_DIR)
                    .is_dir()
                {
                    MirrorOutcome::Mirrored
                } else {
                    MirrorOutcome::NoSolutionTests
                }
            } else {
                mirror::mirror_tests(&variant.path)?
            };
            if outcome == MirrorOutcome::Mirrored {
                report.mirrored.push(self.relative_label(&variant.path));
            }
        }

        Ok(report)
    }

    fn relative_label(&self, path: &NormalizedPath) -> String {
        path.relative_to(&self.root)
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| path.as_str().to_string())
    }
}
