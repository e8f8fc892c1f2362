use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use dirbatch::errors::Error;
use dirbatch::folder_set::{FolderInput, FolderSet};
use dirbatch::output::Logger;

fn quiet() -> Logger {
    Logger::new(false)
}

#[test]
fn test_resolve_inline_paths_preserves_order() -> Result<()> {
    let temp = TempDir::new()?;
    let b = temp.path().join("b");
    let a = temp.path().join("a");
    fs::create_dir(&b)?;
    fs::create_dir(&a)?;

    let input = FolderInput::from_paths(vec![b.clone(), a.clone()]);
    let set = FolderSet::resolve(&input, &quiet())?;

    let resolved: Vec<_> = set.iter().cloned().collect();
    assert_eq!(resolved, vec![b, a]);
    Ok(())
}

#[test]
fn test_resolve_drops_missing_and_non_directory_entries() -> Result<()> {
    let temp = TempDir::new()?;
    let exists = temp.path().join("a");
    fs::create_dir(&exists)?;
    let missing = temp.path().join("missing");
    let file = temp.path().join("plain.txt");
    fs::write(&file, "not a directory")?;

    let input = FolderInput::from_paths(vec![exists.clone(), missing, file]);
    let set = FolderSet::resolve(&input, &quiet())?;

    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next(), Some(&exists));
    Ok(())
}

#[test]
fn test_resolve_from_list_file() -> Result<()> {
    let temp = TempDir::new()?;
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    fs::create_dir(&a)?;
    fs::create_dir(&b)?;

    // Whitespace and blank lines are tolerated; a missing entry is dropped
    let list = temp.path().join("folders.txt");
    fs::write(
        &list,
        format!(
            "  {}  \n\n{}\n{}\n",
            a.display(),
            b.display(),
            temp.path().join("missing").display()
        ),
    )?;

    let input = FolderInput {
        list_file: Some(list),
        paths: vec![],
    };
    let set = FolderSet::resolve(&input, &quiet())?;

    let resolved: Vec<_> = set.iter().cloned().collect();
    assert_eq!(resolved, vec![a, b]);
    Ok(())
}

#[test]
fn test_unreadable_list_file_is_fatal() {
    let input = FolderInput {
        list_file: Some(PathBuf::from("/nonexistent/folders.txt")),
        paths: vec![],
    };
    let err = FolderSet::resolve(&input, &quiet()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_list_file_and_inline_paths_are_mutually_exclusive() -> Result<()> {
    let temp = TempDir::new()?;
    let list = temp.path().join("folders.txt");
    fs::write(&list, "")?;

    let input = FolderInput {
        list_file: Some(list),
        paths: vec![temp.path().to_path_buf()],
    };
    let err = FolderSet::resolve(&input, &quiet()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    Ok(())
}

#[test]
fn test_no_input_at_all_is_a_configuration_error() {
    let err = FolderSet::resolve(&FolderInput::default(), &quiet()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_all_entries_filtered_leaves_an_empty_set() -> Result<()> {
    let temp = TempDir::new()?;
    let input = FolderInput::from_paths(vec![temp.path().join("nope")]);
    let set = FolderSet::resolve(&input, &quiet())?;
    assert!(set.is_empty());
    Ok(())
}
