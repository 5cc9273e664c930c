use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_root() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("tddgen_cli_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn tddgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tddgen"))
}

#[test]
fn test_cli_model_writes_test_file() {
    let root = temp_root();

    let status = tddgen()
        .arg("--root")
        .arg(&root)
        .arg("model")
        .arg("Post")
        .status()
        .expect("run cli");

    assert!(status.success());
    let content = fs::read_to_string(root.join("tests/Unit/PostTest.php")).unwrap();
    assert!(content.contains("class PostTest"));
}

#[test]
fn test_cli_module_writes_all_four_files() {
    let root = temp_root();

    let status = tddgen()
        .arg("--root")
        .arg(&root)
        .arg("module")
        .arg("Order")
        .status()
        .expect("run cli");

    assert!(status.success());
    assert!(root.join("tests/Unit/OrderTest.php").exists());
    assert!(root.join("tests/Feature/OrderTest.php").exists());
    assert!(root.join("tests/Unit/OrdersMigrationTest.php").exists());
    assert!(root.join("tests/Feature/OrderRouteTest.php").exists());
}

#[test]
fn test_cli_module_type_flags_limit_generation() {
    let root = temp_root();

    let status = tddgen()
        .arg("--root")
        .arg(&root)
        .arg("module")
        .arg("Order")
        .arg("--migration")
        .status()
        .expect("run cli");

    assert!(status.success());
    assert!(root.join("tests/Unit/OrdersMigrationTest.php").exists());
    assert!(!root.join("tests/Unit/OrderTest.php").exists());
    assert!(!root.join("tests/Feature").exists());
}

#[test]
fn test_cli_invalid_name_exits_nonzero_with_message() {
    let root = temp_root();

    let output = tddgen()
        .arg("--root")
        .arg(&root)
        .arg("model")
        .arg("!!!")
        .output()
        .expect("run cli");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid subject name"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_cli_stubs_override_is_used() {
    let root = temp_root();
    let stub_dir = root.join("custom_stubs");
    fs::create_dir_all(&stub_dir).unwrap();
    fs::write(
        stub_dir.join("model.test.stub"),
        "custom {{ModelName}} stub\n",
    )
    .unwrap();

    let status = tddgen()
        .arg("--root")
        .arg(&root)
        .arg("--stubs")
        .arg("custom_stubs")
        .arg("model")
        .arg("Post")
        .status()
        .expect("run cli");

    assert!(status.success());
    let content = fs::read_to_string(root.join("tests/Unit/PostTest.php")).unwrap();
    assert_eq!(content, "custom Post stub\n");
}
