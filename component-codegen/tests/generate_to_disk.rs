//! Tests that write component directories to a temporary output directory.

use std::fs;

use create_component_codegen::{FileKind, Options, Scaffold, plan};
use create_component_core::Error;
use tempfile::TempDir;

#[test]
fn test_generate_full_component() {
    let temp = TempDir::new().unwrap();
    let options = Options {
        add_parts_folder: true,
        use_defaults: true,
        ..Options::default()
    };

    let result = Scaffold::new("foo-bar", options)
        .generate(temp.path())
        .unwrap();

    let dir = temp.path().join("foo-bar");
    assert_eq!(result.directory, dir);
    assert!(result.parts_folder);
    assert_eq!(result.written.len(), 6);
    for name in &result.written {
        assert!(dir.join(name).is_file(), "{} not written", name);
    }
    assert!(dir.join("parts").is_dir());
    assert_eq!(fs::read_dir(dir.join("parts")).unwrap().count(), 0);
}

#[test]
fn test_generate_minimal_component() {
    let temp = TempDir::new().unwrap();

    let result = Scaffold::new("user-card", Options::default())
        .generate(temp.path())
        .unwrap();

    assert_eq!(result.written, ["user-card.component.tsx", "index.ts"]);
    assert!(!result.parts_folder);

    let dir = temp.path().join("user-card");
    assert!(!dir.join("parts").exists());
    assert_eq!(
        fs::read_to_string(dir.join("index.ts")).unwrap(),
        "export * from \"./user-card.component\""
    );
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);
}

#[test]
fn test_written_content_matches_preview() {
    let temp = TempDir::new().unwrap();
    let scaffold = Scaffold::new("user-card", Options::defaults());

    scaffold.generate(temp.path()).unwrap();

    for file in scaffold.preview() {
        let on_disk = fs::read_to_string(temp.path().join(&file.path)).unwrap();
        assert_eq!(on_disk, file.content, "{} differs", file.path);
    }
}

#[test]
fn test_existing_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let scaffold = Scaffold::new("user-card", Options::default());

    scaffold.generate(temp.path()).unwrap();
    let err = scaffold.generate(temp.path()).unwrap_err();

    assert!(matches!(*err, Error::DirectoryAlreadyExists { .. }));
}

#[test]
fn test_existing_directory_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("user-card");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("index.ts"), "keep me").unwrap();

    let result = Scaffold::new("user-card", Options::defaults()).generate(temp.path());

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(dir.join("index.ts")).unwrap(), "keep me");
}

#[test]
fn test_missing_output_directory() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let err = Scaffold::new("user-card", Options::default())
        .generate(&missing)
        .unwrap_err();

    assert!(matches!(*err, Error::Unknown { .. }));
}

#[cfg(unix)]
#[test]
fn test_failed_write_keeps_earlier_files() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("user-card");
    fs::create_dir(&dir).unwrap();
    // A directory where index.ts should go makes the last write fail.
    fs::create_dir(dir.join("index.ts")).unwrap();

    let plan = plan("user-card", &Options::defaults());
    let err = plan.write(&dir).unwrap_err();

    assert!(matches!(*err, Error::FileWriteFailure { .. }));
    for file in plan.files.iter().filter(|f| f.kind != FileKind::Index) {
        let on_disk = fs::read_to_string(dir.join(&file.relative_path)).unwrap();
        assert_eq!(on_disk, file.content, "{} missing", file.relative_path);
    }
}

#[test]
fn test_failed_parts_folder_keeps_files() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("user-card");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("parts"), "").unwrap();

    let options = Options {
        add_parts_folder: true,
        ..Options::default()
    };
    let err = plan("user-card", &options).write(&dir).unwrap_err();

    assert!(matches!(*err, Error::DirectoryAlreadyExists { .. }));
    assert!(dir.join("user-card.component.tsx").is_file());
    assert!(dir.join("index.ts").is_file());
}
