//! Workshop layout discovery
//!
//! Walks the `examples/` and `exercises/` roots and classifies what it
//! finds: standalone example projects, exercise containers, and the
//! problem/solution variant directories inside each container.

use std::sync::LazyLock;

use regex::Regex;

use crate::manifest::MANIFEST_FILE;
use crate::{NormalizedPath, Result, io};

/// Directory name pattern that marks an exercise variant.
static VARIANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(problem|solution)").unwrap());

/// Whether a variant is the learner-facing problem or the finished solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Problem,
    Solution,
}

/// A problem or solution directory inside an exercise container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub path: NormalizedPath,
    pub kind: VariantKind,
}

/// An exercise container grouping zero or more variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub path: NormalizedPath,
    pub variants: Vec<Variant>,
}

/// A directory that carries a manifest and therefore participates in
/// package naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub path: NormalizedPath,
}

impl Project {
    /// Path to this project's manifest file.
    pub fn manifest_path(&self) -> NormalizedPath {
        self.path.join(MANIFEST_FILE)
    }
}

/// Everything discovered under a workshop repository root.
#[derive(Debug, Clone)]
pub struct WorkshopLayout {
    pub examples: Vec<NormalizedPath>,
    pub exercises: Vec<Exercise>,
}

impl WorkshopLayout {
    /// Discover the layout under `root`.
    ///
    /// A missing `examples/` or `exercises/` root is a valid, empty
    /// workshop. Only directory entries are considered; variant
    /// directories must match the `(problem|solution)` pattern.
    pub fn discover(root: &NormalizedPath) -> Result<Self> {
        let examples = io::list_subdirectories(&root.join("examples"))?;

        let mut exercises = Vec::new();
        for exercise_path in io::list_subdirectories(&root.join("exercises"))? {
            let variants = io::list_subdirectories(&exercise_path)?
                .into_iter()
                .filter_map(|path| {
                    let kind = classify_variant(path.file_name()?)?;
                    Some(Variant { path, kind })
                })
                .collect();
            exercises.push(Exercise {
                path: exercise_path,
                variants,
            });
        }

        tracing::debug!(
            examples = examples.len(),
            exercises = exercises.len(),
            "Discovered workshop layout"
        );

        Ok(Self {
            examples,
            exercises,
        })
    }

    /// All discovered variant directories across every exercise.
    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.exercises.iter().flat_map(|e| e.variants.iter())
    }

    /// All problem variants, in discovery order.
    pub fn problem_variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants().filter(|v| v.kind == VariantKind::Problem)
    }

    /// The examples and variants that actually contain a manifest file.
    ///
    /// Documentation-only folders and other non-project directories are
    /// silently skipped here and by every later step.
    pub fn projects(&self) -> Vec<Project> {
        self.examples
            .iter()
            .chain(self.variants().map(|v| &v.path))
            .filter(|path| path.join(MANIFEST_FILE).is_file())
            .map(|path| Project { path: path.clone() })
            .collect()
    }
}

/// Classify a directory name as a variant, if it matches the pattern.
///
/// The first match decides the kind when a name happens to contain both
/// tokens.
fn classify_variant(name: &str) -> Option<VariantKind> {
    match VARIANT_PATTERN.find(name)?.as_str() {
        "problem" => Some(VariantKind::Problem),
        _ => Some(VariantKind::Solution),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_variant_problem() {
        assert_eq!(
            classify_variant("problem.01-great"),
            Some(VariantKind::Problem)
        );
    }

    #[test]
    fn test_classify_variant_solution() {
        assert_eq!(
            classify_variant("solution.01-great"),
            Some(VariantKind::Solution)
        );
    }

    #[test]
    fn test_classify_variant_other() {
        assert_eq!(classify_variant("notes"), None);
    }

    #[test]
    fn test_classify_variant_first_match_wins() {
        assert_eq!(
            classify_variant("problem-solution"),
            Some(VariantKind::Problem)
        );
    }
}
