//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Async production code in the HUD core and the TUI MUST NOT
//! use blocking I/O. The whole point of the orchestrator is that the clock
//! keeps ticking while the answer engine is slow; one blocking read on the
//! runtime defeats that.
//!
//! **Required**: `tokio::fs`, `tokio::net`, `reqwest` async - not
//! `std::fs`, `std::net`, `reqwest::blocking`.
//!
//! **Acceptable**: non-async functions (config load before the runtime is
//! hot, sysfs probing at construction), test code.

use std::fs;
use std::path::{Path, PathBuf};

/// Test that production code does not use blocking I/O
#[test]
fn test_no_blocking_io_in_production_code() {
    let violations = find_blocking_io_violations();

    if !violations.is_empty() {
        eprintln!("\n❌ Blocking I/O calls found in async production code!\n");

        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }

        eprintln!("\n❌ FORBIDDEN blocking I/O:");
        eprintln!("  - std::fs::read(), std::fs::write(), std::fs::File");
        eprintln!("  - std::net::TcpStream, std::net::TcpListener");
        eprintln!("  - reqwest::blocking::*");
        eprintln!("\n✅ REQUIRED async I/O:");
        eprintln!("  - tokio::fs::read().await, tokio::fs::write().await");
        eprintln!("  - tokio::net::TcpStream::connect().await");
        eprintln!("  - reqwest async client");
        eprintln!("\n✅ ACCEPTABLE blocking I/O:");
        eprintln!("  - Non-async functions (config load, construction-time probes)");
        eprintln!("  - Test code");

        panic!(
            "\nFound {} blocking I/O violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

/// Find all blocking I/O calls in async production code
fn find_blocking_io_violations() -> Vec<String> {
    let mut violations = Vec::new();
    let root = workspace_root();

    check_directory(&root.join("visor/core/src"), &mut violations);
    check_directory(&root.join("tui/src"), &mut violations);

    violations
}

fn workspace_root() -> PathBuf {
    // This package lives at <root>/tests/architectural-enforcement
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn check_directory(dir: &Path, violations: &mut Vec<String>) {
    assert!(
        dir.exists(),
        "expected production directory {} to exist",
        dir.display()
    );

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            check_file(entry.path(), violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    let lines: Vec<&str> = content.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;

        // Skip comments
        let code_part = line.split("//").next().unwrap_or(line);

        // Test code is exempt
        if is_in_test_function(&lines, idx) {
            continue;
        }

        // Non-async functions run before or beside the runtime
        if !is_in_async_function(&lines, idx) {
            // ...but a blocking HTTP client is never acceptable
            if code_part.contains("reqwest::blocking") {
                violations.push(format!(
                    "{}:{} - Blocking HTTP client: {}",
                    path.display(),
                    line_number,
                    line.trim()
                ));
            }
            continue;
        }

        if code_part.contains("std::fs::") {
            violations.push(format!(
                "{}:{} - Blocking file I/O in async fn: {}",
                path.display(),
                line_number,
                line.trim()
            ));
        }

        if code_part.contains("std::net::") {
            violations.push(format!(
                "{}:{} - Blocking network I/O in async fn: {}",
                path.display(),
                line_number,
                line.trim()
            ));
        }

        if code_part.contains("reqwest::blocking") {
            violations.push(format!(
                "{}:{} - Blocking HTTP client: {}",
                path.display(),
                line_number,
                line.trim()
            ));
        }
    }
}

/// Check if line is inside a test function
fn is_in_test_function(lines: &[&str], current_idx: usize) -> bool {
    // Scan backwards to find the enclosing function
    let mut found_fn_idx = None;
    for i in (0..current_idx).rev() {
        let line = lines[i].trim();

        if line.starts_with("fn ") || line.contains(" fn ") {
            found_fn_idx = Some(i);
            break;
        }

        // Stop at module boundaries
        if line.starts_with("mod ") || (line.starts_with("impl ") && line.contains('{')) {
            return false;
        }
    }

    // If we found a function, check if it has a test marker
    if let Some(fn_idx) = found_fn_idx {
        for i in (0..fn_idx).rev() {
            let line = lines[i].trim();

            if line.starts_with("#[test]")
                || line.starts_with("#[tokio::test")
                || line.starts_with("#[cfg(test)]")
            {
                return true;
            }

            if line.starts_with("fn ") || line.starts_with("mod ") || line.starts_with("impl ") {
                break;
            }
        }
    }

    false
}

/// Check if line is inside an async function
fn is_in_async_function(lines: &[&str], current_idx: usize) -> bool {
    for i in (0..=current_idx).rev() {
        let line = lines[i].trim();

        if line.contains("async fn ") || line.contains("async move") {
            return true;
        }

        if (line.starts_with("fn ") || line.starts_with("pub fn ")) && !line.contains("async") {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_fn_detection() {
        let test_code = vec![
            "pub async fn read_state(path: &Path) {",
            "    let data = std::fs::read_to_string(path);",
            "}",
        ];

        assert!(
            is_in_async_function(&test_code, 1),
            "Should detect async context"
        );
    }

    #[test]
    fn test_sync_fn_is_exempt() {
        let test_code = vec![
            "pub fn load_config(path: &Path) {",
            "    let data = std::fs::read_to_string(path);",
            "}",
        ];

        assert!(
            !is_in_async_function(&test_code, 1),
            "Sync functions may block"
        );
    }

    #[test]
    fn test_spawned_block_counts_as_async() {
        let test_code = vec![
            "tokio::spawn(async move {",
            "    let data = std::fs::read_to_string(&path);",
            "});",
        ];

        assert!(
            is_in_async_function(&test_code, 1),
            "async move blocks run on the runtime"
        );
    }
}
