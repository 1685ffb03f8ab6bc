//! End-to-end scaffolding through the real adapters.

use std::path::{Path, PathBuf};

use strata_adapters::{LocalFilesystem, MemoryFilesystem};
use strata_core::prelude::*;

#[test]
fn memory_scaffold_writes_three_files() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let spec = ComponentSpec::new("Button", DesignLevel::Atoms);

    let report = service.scaffold(&spec).unwrap();

    assert_eq!(report.output_dir, PathBuf::from("components/01-atoms/Button"));
    assert!(!report.dry_run);
    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("components/01-atoms/Button/Button.stories.js"),
            PathBuf::from("components/01-atoms/Button/Button.twig"),
            PathBuf::from("components/01-atoms/Button/Button.yml"),
        ]
    );
    for file in fs.list_files() {
        assert_eq!(fs.mode(&file), Some(0o644));
    }
    assert_eq!(
        fs.read_file(Path::new("components/01-atoms/Button/Button.twig"))
            .as_deref(),
        Some("<div class=\"button\">{{ text }}</div>\n")
    );
}

#[test]
fn preview_leaves_filesystem_untouched() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let spec = ComponentSpec::new("Hero", DesignLevel::Organisms).with_child("Heading");

    let report = service.preview(&spec).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.files.len(), 3);
    assert!(fs.list_files().is_empty());
}

#[test]
fn local_scaffold_overwrites_and_reuses_directory() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("components");
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new())).with_root(&root);

    let first = ComponentSpec::new("NameTitleBlock", DesignLevel::Organisms)
        .with_children(["Heading", "Subheading"]);
    service.scaffold(&first).unwrap();

    let second = ComponentSpec::new("NameTitleBlock", DesignLevel::Organisms);
    let report = service.scaffold(&second).unwrap();

    let dir = root.join("03-organisms/NameTitleBlock");
    assert_eq!(report.output_dir, dir);
    assert_eq!(
        std::fs::read_to_string(dir.join("NameTitleBlock.twig")).unwrap(),
        "<div class=\"nametitleblock\">{{ text }}</div>\n"
    );
    let story = std::fs::read_to_string(dir.join("NameTitleBlock.stories.js")).unwrap();
    assert!(!story.contains("Heading"));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 3);
}

#[cfg(unix)]
#[test]
fn local_scaffold_sets_0644() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .with_root(temp.path().join("components"));

    let report = service
        .scaffold(&ComponentSpec::new("Heading", DesignLevel::Molecules))
        .unwrap();

    for file in &report.files {
        let mode = std::fs::metadata(file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644, "{}", file.display());
    }
}

#[test]
fn invalid_child_name_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let spec = ComponentSpec::new("Card", DesignLevel::Molecules).with_child("../Escape");

    let err = service.scaffold(&spec).unwrap_err();

    assert!(matches!(err, StrataError::Domain(_)));
    assert!(fs.list_files().is_empty());
}
