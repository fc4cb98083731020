//! Headless-core enforcement
//!
//! The driver core must compile and run anywhere: no terminal backend, no
//! async runtime, no rendering crate may leak into it. Surfaces own all of
//! that. These tests scan the source tree so a stray `use ratatui::...`
//! fails CI instead of quietly coupling the core to one surface.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Crates the driver core must never import.
const FORBIDDEN_IN_CORE: &[&str] = &["ratatui", "crossterm", "tokio", "futures"];

fn workspace_root() -> PathBuf {
    // tests/architectural-enforcement -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[test]
fn core_has_no_ui_or_runtime_imports() {
    let core_src = workspace_root().join("driver/core/src");
    let sources = rust_sources(&core_src);
    assert!(!sources.is_empty(), "no sources under {core_src:?}");

    let mut violations = Vec::new();
    for path in sources {
        let text = fs::read_to_string(&path).unwrap();
        for line in text.lines() {
            let trimmed = line.trim_start();
            if !(trimmed.starts_with("use ") || trimmed.starts_with("pub use ")) {
                continue;
            }
            for forbidden in FORBIDDEN_IN_CORE {
                if trimmed.contains(&format!("{forbidden}::"))
                    || trimmed.contains(&format!("use {forbidden};"))
                {
                    violations.push(format!("{}: {}", path.display(), trimmed));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "core imports surface crates:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_sleep_in_production_code() {
    let root = workspace_root();
    let mut violations = Vec::new();
    for dir in ["driver/core/src", "tui/src"] {
        for path in rust_sources(&root.join(dir)) {
            let text = fs::read_to_string(&path).unwrap();
            let mut in_tests = false;
            for line in text.lines() {
                if line.contains("#[cfg(test)]") {
                    // Everything after the test module marker is test code.
                    in_tests = true;
                }
                if in_tests {
                    continue;
                }
                if line.contains("thread::sleep") || line.contains("std::thread::sleep") {
                    violations.push(format!("{}: {}", path.display(), line.trim()));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "blocking sleep in production code:\n{}",
        violations.join("\n")
    );
}

#[test]
fn core_manifest_stays_headless() {
    let manifest = workspace_root().join("driver/core/Cargo.toml");
    let text = fs::read_to_string(&manifest).unwrap();
    for forbidden in FORBIDDEN_IN_CORE {
        assert!(
            !text.contains(&format!("{forbidden} =")),
            "driver/core/Cargo.toml depends on {forbidden}"
        );
    }
}
