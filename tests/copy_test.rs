use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use dirbatch::output::Logger;
use dirbatch::tree_copy::copy_tree;

fn quiet() -> Logger {
    Logger::new(false)
}

#[test]
fn test_copy_preserves_relative_structure() -> Result<()> {
    let temp = TempDir::new()?;
    let source = temp.path().join("source");
    let dest = temp.path().join("dest");
    fs::create_dir_all(source.join("nested/deep"))?;
    fs::write(source.join("top.txt"), "top")?;
    fs::write(source.join("nested/deep/leaf.txt"), "leaf")?;

    let outcome = copy_tree(&source, &dest, &quiet())?;

    assert_eq!(outcome.files_copied, 2);
    assert!(outcome.is_clean());
    assert_eq!(fs::read_to_string(dest.join("top.txt"))?, "top");
    assert_eq!(fs::read_to_string(dest.join("nested/deep/leaf.txt"))?, "leaf");
    Ok(())
}

#[test]
fn test_destination_is_created_with_parents() -> Result<()> {
    let temp = TempDir::new()?;
    let source = temp.path().join("source");
    fs::create_dir(&source)?;
    fs::write(source.join("a.txt"), "a")?;
    let dest = temp.path().join("does/not/exist/yet");

    let outcome = copy_tree(&source, &dest, &quiet())?;

    assert_eq!(outcome.files_copied, 1);
    assert_eq!(fs::read_to_string(dest.join("a.txt"))?, "a");
    Ok(())
}

#[test]
fn test_copy_is_an_additive_merge() -> Result<()> {
    let temp = TempDir::new()?;
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    let dest = temp.path().join("dest");
    fs::create_dir(&a)?;
    fs::create_dir(&b)?;
    fs::write(a.join("only-a.txt"), "from a")?;
    fs::write(b.join("only-b.txt"), "from b")?;

    // Pre-existing unrelated files at the destination are left alone
    fs::create_dir(&dest)?;
    fs::write(dest.join("existing.txt"), "untouched")?;

    copy_tree(&a, &dest, &quiet())?;
    copy_tree(&b, &dest, &quiet())?;

    assert_eq!(fs::read_to_string(dest.join("only-a.txt"))?, "from a");
    assert_eq!(fs::read_to_string(dest.join("only-b.txt"))?, "from b");
    assert_eq!(fs::read_to_string(dest.join("existing.txt"))?, "untouched");
    Ok(())
}

#[test]
fn test_later_source_wins_on_shared_relative_path() -> Result<()> {
    let temp = TempDir::new()?;
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    let dest = temp.path().join("dest");
    fs::create_dir(&a)?;
    fs::create_dir(&b)?;
    fs::write(a.join("shared.txt"), "first")?;
    fs::write(b.join("shared.txt"), "second")?;

    copy_tree(&a, &dest, &quiet())?;
    copy_tree(&b, &dest, &quiet())?;

    assert_eq!(fs::read_to_string(dest.join("shared.txt"))?, "second");
    Ok(())
}

#[test]
fn test_empty_source_copies_nothing() -> Result<()> {
    let temp = TempDir::new()?;
    let source = temp.path().join("empty");
    let dest = temp.path().join("dest");
    fs::create_dir(&source)?;

    let outcome = copy_tree(&source, &dest, &quiet())?;

    assert_eq!(outcome.files_copied, 0);
    assert!(outcome.is_clean());
    assert!(dest.is_dir());
    Ok(())
}
