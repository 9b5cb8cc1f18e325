//! Integration test: load configuration files from disk through the full
//! pipeline and check each failure kind surfaces distinctly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lgen_config::{load, ConfigError, ConfigLoader, ErrorKind};
use lgen_core::{HttpMethod, Scheme};
use serde_json::{json, Value};
use tempfile::TempDir;

fn example() -> Value {
    json!({
        "host": "h",
        "port": 80,
        "scheme": "http",
        "tasks": {
            "a": {"method": "GET", "endpoint": "/a"},
            "b": {"method": "POST", "endpoint": "/b"}
        },
        "users": {
            "u1": {"tasks": ["a", "b"], "rate": 2}
        }
    })
}

/// Write `contents` to `lgen.json` inside a fresh temp dir.
fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("lgen.json");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}

fn write_json(value: &Value) -> (TempDir, PathBuf) {
    write_config(&serde_json::to_string_pretty(value).unwrap())
}

fn load_err(path: &Path) -> ConfigError {
    match load(path) {
        Ok(config) => panic!("expected load of {} to fail, got {config:?}", path.display()),
        Err(e) => e,
    }
}

#[test]
fn test_example_scenario_loads() {
    let (_dir, path) = write_json(&example());
    let config = load(&path).unwrap();

    assert_eq!(config.host(), "h");
    assert_eq!(config.port(), 80);
    assert_eq!(config.scheme(), Scheme::Http);
    assert_eq!(config.base_url(), "http://h:80");

    let keys: Vec<&str> = config.task_dict().keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);

    let u1 = &config.user_dict()["u1"];
    assert_eq!(u1.rate(), 2.0);
    let list: Vec<(&str, HttpMethod)> = u1
        .task_list()
        .iter()
        .map(|t| (t.name(), t.method()))
        .collect();
    assert_eq!(list, [("a", HttpMethod::Get), ("b", HttpMethod::Post)]);
}

#[test]
fn test_example_failure_names_task_and_user() {
    let mut doc = example();
    doc["users"]["u1"]["tasks"] = json!(["a", "c"]);
    let (_dir, path) = write_json(&doc);

    match load_err(&path) {
        ConfigError::UnresolvedTask { user, task } => {
            assert_eq!(user, "u1");
            assert_eq!(task, "c");
        }
        other => panic!("Expected UnresolvedTask, got: {other}"),
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_err(&path);
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_directory_is_not_found_not_parse_error() {
    let dir = TempDir::new().unwrap();
    let err = load_err(dir.path());
    assert!(
        matches!(err, ConfigError::FileNotFound { ref path } if path == dir.path()),
        "Expected FileNotFound, got: {err}"
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_io_error() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = write_json(&example());
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users read through mode bits; nothing to check then.
    if std::fs::read(&path).is_ok() {
        return;
    }

    let err = load_err(&path);
    assert_eq!(err.kind(), ErrorKind::Io, "got {err}");
    assert!(
        matches!(err, ConfigError::Io { path: ref p, .. } if p == &path),
        "Expected Io for {}, got: {err}",
        path.display()
    );
}

#[test]
fn test_malformed_json_is_parse_error() {
    let (_dir, path) = write_config(r#"{"host": "h", "port": 80,"#);
    let err = load_err(&path);
    match &err {
        ConfigError::Parse { path: p, source } => {
            assert_eq!(p, &path);
            assert!(source.is_eof());
        }
        other => panic!("Expected Parse, got: {other}"),
    }
}

#[test]
fn test_trailing_comma_is_parse_error() {
    let (_dir, path) = write_config(
        r#"{"host": "h", "port": 80, "scheme": "http", "tasks": {}, "users": {},}"#,
    );
    assert_eq!(load_err(&path).kind(), ErrorKind::Parse);
}

#[test]
fn test_each_constraint_fails_independently() {
    let cases: Vec<(&str, Box<dyn Fn(&mut Value)>)> = vec![
        ("port high", Box::new(|d: &mut Value| d["port"] = json!(65536))),
        ("port negative", Box::new(|d: &mut Value| d["port"] = json!(-1))),
        ("scheme", Box::new(|d: &mut Value| d["scheme"] = json!("ws"))),
        ("method", Box::new(|d: &mut Value| d["tasks"]["a"]["method"] = json!("PUT"))),
        ("endpoint", Box::new(|d: &mut Value| d["tasks"]["a"]["endpoint"] = json!(""))),
        ("rate", Box::new(|d: &mut Value| d["users"]["u1"]["rate"] = json!(-2))),
        ("one task", Box::new(|d: &mut Value| d["users"]["u1"]["tasks"] = json!(["a"]))),
        ("no host", Box::new(|d: &mut Value| {
            d.as_object_mut().unwrap().remove("host");
        })),
    ];

    for (label, mutate) in cases {
        let mut doc = example();
        mutate(&mut doc);
        let (_dir, path) = write_json(&doc);
        let err = load_err(&path);
        assert_eq!(err.kind(), ErrorKind::Validation, "{label}: got {err}");
    }
}

#[test]
fn test_validation_error_locates_field() {
    let mut doc = example();
    doc["tasks"]["b"]["endpoint"] = json!("");
    let (_dir, path) = write_json(&doc);

    let err = load_err(&path);
    let ConfigError::Validation(inner) = &err else {
        panic!("Expected Validation, got: {err}");
    };
    let first = inner.violations().and_then(|v| v.first()).unwrap();
    assert_eq!(first.instance_path, "/tasks/b/endpoint");
    assert!(err.to_string().contains("/tasks/b/endpoint"));
}

#[test]
fn test_loading_twice_gives_equal_configs() {
    let mut doc = example();
    doc["tasks"]["a"]["headers"] = json!({"Accept": "application/json"});
    doc["tasks"]["b"]["payload"] = json!({"name": "x", "n": [1, 2, 3]});
    let (_dir, path) = write_json(&doc);

    let first = load(&path).unwrap();
    let second = load(&path).unwrap();
    assert_eq!(first, second);

    // Equal by value, never shared between loads.
    assert!(!Arc::ptr_eq(
        first.get_task("a").unwrap(),
        second.get_task("a").unwrap()
    ));
}

#[test]
fn test_loader_exposes_path_and_lookup() {
    let (_dir, path) = write_json(&example());
    let loader = ConfigLoader::load(&path).unwrap();
    assert_eq!(loader.path(), path.as_path());
    assert_eq!(loader.get_task("b").unwrap().method(), HttpMethod::Post);
    assert!(loader.get_task("c").is_none());
}

#[test]
fn test_shared_across_threads() {
    let (_dir, path) = write_json(&example());
    let config = Arc::new(load(&path).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || config.get_user("u1").map(|u| u.task_list().len()))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Some(2));
    }
}
