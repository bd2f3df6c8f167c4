use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use workshop_core::{NormalizedPath, VariantKind, WorkshopLayout};

fn write_manifest(dir: &Path, name: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("package.json"),
        format!("{{\n  \"name\": \"{}\"\n}}\n", name),
    )
    .unwrap();
}

#[test]
fn test_discover_missing_roots_yields_empty_layout() {
    let temp = TempDir::new().unwrap();
    let layout = WorkshopLayout::discover(&NormalizedPath::new(temp.path())).unwrap();

    assert_eq!(layout.examples.len(), 0);
    assert_eq!(layout.exercises.len(), 0);
}

#[test]
fn test_discover_lists_example_directories_sorted() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("examples/zeta")).unwrap();
    fs::create_dir_all(temp.path().join("examples/alpha")).unwrap();

    let layout = WorkshopLayout::discover(&NormalizedPath::new(temp.path())).unwrap();

    let names: Vec<_> = layout
        .examples
        .iter()
        .map(|p| p.file_name().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[test]
fn test_discover_skips_plain_files() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("exercises/01-goo")).unwrap();
    fs::write(temp.path().join("exercises/README.md"), "notes").unwrap();
    fs::write(temp.path().join("exercises/01-goo/problem.txt"), "stray").unwrap();

    let layout = WorkshopLayout::discover(&NormalizedPath::new(temp.path())).unwrap();

    assert_eq!(layout.exercises.len(), 1);
    assert_eq!(layout.exercises[0].variants.len(), 0);
}

#[test]
fn test_discover_classifies_variants_by_pattern() {
    let temp = TempDir::new().unwrap();
    let exercise = temp.path().join("exercises/01-goo");
    fs::create_dir_all(exercise.join("problem.01-great")).unwrap();
    fs::create_dir_all(exercise.join("solution.01-great")).unwrap();
    fs::create_dir_all(exercise.join("notes")).unwrap();

    let layout = WorkshopLayout::discover(&NormalizedPath::new(temp.path())).unwrap();

    let variants = &layout.exercises[0].variants;
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].kind, VariantKind::Problem);
    assert_eq!(variants[1].kind, VariantKind::Solution);
}

#[test]
fn test_projects_filters_to_manifest_bearing_directories() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp.path().join("examples/demo"), "demo");
    fs::create_dir_all(temp.path().join("examples/docs-only")).unwrap();
    let exercise = temp.path().join("exercises/01-goo");
    write_manifest(&exercise.join("problem.01-great"), "p");
    fs::create_dir_all(exercise.join("solution.01-great")).unwrap();

    let layout = WorkshopLayout::discover(&NormalizedPath::new(temp.path())).unwrap();
    let projects = layout.projects();

    let names: Vec<_> = projects
        .iter()
        .map(|p| p.path.file_name().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["demo", "problem.01-great"]);
}

#[test]
fn test_problem_variants_excludes_solutions() {
    let temp = TempDir::new().unwrap();
    let exercise = temp.path().join("exercises/01-goo");
    fs::create_dir_all(exercise.join("problem.01-great")).unwrap();
    fs::create_dir_all(exercise.join("solution.01-great")).unwrap();

    let layout = WorkshopLayout::discover(&NormalizedPath::new(temp.path())).unwrap();

    let problems: Vec<_> = layout.problem_variants().collect();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].path.file_name(), Some("problem.01-great"));
}
