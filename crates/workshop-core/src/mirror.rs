//! Test-suite mirroring between paired variants
//!
//! A problem variant must stay runnable against exactly the test suite its
//! solution ships. The problem side's `tests/` directory is disposable:
//! each run replaces it wholesale with a fresh copy of the solution's.

use crate::{NormalizedPath, Result, io};

/// Test directory name inside a variant.
pub const TESTS_DIR: &str = "tests";

/// Result of one mirroring pass over a problem variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// The solution's tests were copied over the problem's.
    Mirrored,
    /// The paired solution has no `tests/` directory; nothing was touched.
    NoSolutionTests,
}

/// Derive the paired solution path for a problem variant.
///
/// Substitutes the first occurrence of the literal `problem` with
/// `solution`. When a path contains the substring more than once, only the
/// first is substituted; the result need not exist.
pub fn solution_for(problem: &NormalizedPath) -> NormalizedPath {
    NormalizedPath::new(problem.as_str().replacen("problem", "solution", 1))
}

/// Replace the problem variant's `tests/` directory with a fresh copy of
/// its paired solution's.
///
/// If the solution has no `tests/` directory the problem side is left
/// untouched, existing tests included. Otherwise any problem-side `tests/`
/// is removed entirely before the copy, so stale files never survive.
///
/// # Errors
///
/// Any filesystem error during removal or copy is fatal: a partial mirror
/// would leave the problem variant with a mix of old and new tests.
pub fn mirror_tests(problem: &NormalizedPath) -> Result<MirrorOutcome> {
    let solution_tests = solution_for(problem).join(TESTS_DIR);
    if !solution_tests.is_dir() {
        return Ok(MirrorOutcome::NoSolutionTests);
    }

    let problem_tests = problem.join(TESTS_DIR);
    if problem_tests.is_dir() {
        io::remove_dir_recursive(&problem_tests)?;
    }
    io::copy_dir_recursive(&solution_tests, &problem_tests)?;

    tracing::info!(variant = %problem, "Mirrored solution tests");
    Ok(MirrorOutcome::Mirrored)
}
