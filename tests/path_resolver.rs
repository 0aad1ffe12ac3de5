// tests/path_resolver.rs

use std::error::Error;
use std::path::PathBuf;

use gwatch::fs::RealFileSystem;
use gwatch::fs::mock::MockFileSystem;
use gwatch::watch::resolve_paths;
use gwatch_test_utils::canonical_tempdir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn mock_resolves_symlinks_then_absolutizes_then_keeps() {
    let fs = MockFileSystem::with_cwd("/work");
    fs.add_dir("/real/target");
    fs.add_dir("/work/src");
    fs.add_symlink("/work/build", "/real/target");

    let resolved = resolve_paths(
        &fs,
        [
            "build",
            "src",
            "/work/src",
            "missing/dir",
            "/abs/missing",
            "./build/debug",
        ],
    );

    assert_eq!(
        resolved,
        vec![
            PathBuf::from("/real/target"),
            PathBuf::from("/work/src"),
            PathBuf::from("/work/src"),
            PathBuf::from("/work/missing/dir"),
            PathBuf::from("/abs/missing"),
            // Not existing below the symlink, so only made absolute.
            PathBuf::from("/work/build/debug"),
        ]
    );
}

#[test]
fn mock_keeps_unresolvable_path_unchanged() {
    let fs = MockFileSystem::new();

    // An empty path can be neither canonicalized nor made absolute.
    let resolved = resolve_paths(&fs, [""]);
    assert_eq!(resolved, vec![PathBuf::from("")]);
}

#[test]
fn preserves_length_and_order() {
    let fs = MockFileSystem::new();
    let input = ["/c", "/a", "/b", "/a"];

    let resolved = resolve_paths(&fs, input);
    assert_eq!(
        resolved,
        input.iter().map(PathBuf::from).collect::<Vec<_>>()
    );
}

#[test]
fn real_fs_absolute_symlink_free_path_is_unchanged() -> TestResult {
    let (_dir, canonical) = canonical_tempdir()?;

    let resolved = resolve_paths(&RealFileSystem, [canonical.clone()]);
    assert_eq!(resolved, vec![canonical]);
    Ok(())
}

#[test]
fn real_fs_relative_path_is_absolutized() -> TestResult {
    let cwd = std::env::current_dir()?;

    // Exists in the package root, so it resolves through canonicalize.
    let resolved = resolve_paths(&RealFileSystem, ["src"]);
    assert_eq!(resolved, vec![std::fs::canonicalize("src")?]);

    // Does not exist, so it is only made absolute.
    let resolved = resolve_paths(&RealFileSystem, ["no/such/relative/path"]);
    assert_eq!(resolved, vec![cwd.join("no/such/relative/path")]);
    Ok(())
}

#[test]
fn real_fs_non_existent_absolute_path_is_unchanged() -> TestResult {
    let (_dir, root) = canonical_tempdir()?;
    let missing = root.join("gone");

    let resolved = resolve_paths(&RealFileSystem, [missing.clone()]);
    assert_eq!(resolved, vec![missing]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn real_fs_symlink_resolves_to_target() -> TestResult {
    let (_dir, root) = canonical_tempdir()?;
    let target = root.join("target");
    let link = root.join("link");
    std::fs::create_dir(&target)?;
    std::os::unix::fs::symlink(&target, &link)?;

    let resolved = resolve_paths(&RealFileSystem, [link]);
    assert_eq!(resolved, vec![target]);
    Ok(())
}
