use std::process::Command;

#[test]
fn init_creates_valid_owners_json() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ownerbot"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "ownerbot init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let owners_path = dir.path().join(".github/owners.json");
    assert!(owners_path.exists(), ".github/owners.json should exist");

    // Verify the starter file parses as an owners table
    let table = ownerbot_core::OwnersTable::from_file(&owners_path).unwrap();
    assert!(!table.is_empty());
}

#[test]
fn init_refuses_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join(".github")).unwrap();
    std::fs::write(dir.path().join(".github/owners.json"), "{}").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ownerbot"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn notify_fails_without_pr_context() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ownerbot"))
        .arg("notify")
        .current_dir(dir.path())
        .env_remove("GITHUB_REPOSITORY")
        .env_remove("GITHUB_EVENT_PATH")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("GITHUB_REPOSITORY") || stderr.contains("--pr"),
        "error should point at the missing PR context: {stderr}"
    );
}

#[test]
fn notify_rejects_malformed_pr_reference() {
    let output = Command::new(env!("CARGO_BIN_EXE_ownerbot"))
        .args(["notify", "--pr", "not-a-reference"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("owner/repo#number"), "got: {stderr}");
}
