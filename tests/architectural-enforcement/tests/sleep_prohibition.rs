//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code in the HUD core and the TUI MUST NOT call
//! sleep methods. Every periodic job in this codebase is an interval ticker
//! or an awaited I/O completion; a sleep in production code is either a
//! polling loop or poor man's synchronization, both of which accumulate
//! drift across the one-second display slots.
//!
//! **Exceptions**: frame rate limiting (TUI event loop only),
//! `tokio::time::interval` tick loops, test code.

use std::fs;
use std::path::{Path, PathBuf};

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let violations = find_sleep_violations();

    if !violations.is_empty() {
        eprintln!("\n❌ Sleep calls found in production code!\n");

        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }

        eprintln!("\n✅ ACCEPTABLE sleep uses:");
        eprintln!("  - Frame rate limiting in the TUI event loop");
        eprintln!("  - Periodic tasks using tokio::time::interval()");
        eprintln!("  - Test code (#[test] or #[tokio::test] functions)");
        eprintln!("\n❌ FORBIDDEN:");
        eprintln!("  - Sleep in polling loops");
        eprintln!("  - Sleep to 'wait' for events (use async I/O!)");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

/// Find all sleep() calls in production code
fn find_sleep_violations() -> Vec<String> {
    let mut violations = Vec::new();
    let root = workspace_root();

    // HUD core: no sleep, full stop
    check_directory(
        &root.join("visor/core/src"),
        &mut violations,
        &SleepPolicy {
            allow_frame_limiting: false,
        },
    );

    // TUI: frame cap in the event loop is the one legitimate sleep
    check_directory(
        &root.join("tui/src"),
        &mut violations,
        &SleepPolicy {
            allow_frame_limiting: true,
        },
    );

    violations
}

fn workspace_root() -> PathBuf {
    // This package lives at <root>/tests/architectural-enforcement
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

struct SleepPolicy {
    allow_frame_limiting: bool,
}

fn check_directory(dir: &Path, violations: &mut Vec<String>, policy: &SleepPolicy) {
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
            check_file(entry.path(), violations, policy);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>, policy: &SleepPolicy) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    let lines: Vec<&str> = content.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;

        // Skip comments
        let code_part = line.split("//").next().unwrap_or(line);

        if !code_part.contains("::sleep(") && !code_part.contains(".sleep(") {
            continue;
        }

        // Test code is exempt
        if is_in_test_function(&lines, idx) {
            continue;
        }

        // Frame cap in the TUI event loop
        if policy.allow_frame_limiting
            && path.ends_with("tui/src/app.rs")
            && is_frame_limiting_context(&lines, idx)
        {
            continue;
        }

        // interval.tick() loops are the sanctioned periodic pattern
        if is_interval_pattern(&lines, idx) {
            continue;
        }

        violations.push(format!(
            "{}:{} - {}",
            path.display(),
            line_number,
            line.trim()
        ));
    }
}

/// Check if line is inside a test function
fn is_in_test_function(lines: &[&str], current_idx: usize) -> bool {
    // Scan backwards for #[test] or #[tokio::test]
    for i in (0..current_idx).rev() {
        let line = lines[i].trim();

        if line.starts_with("fn ") && !line.contains("test") {
            return false; // Found a non-test function first
        }

        if line.starts_with("#[test]") || line.starts_with("#[tokio::test") {
            return true;
        }

        // Stop at module boundaries
        if line.starts_with("mod ") || line.starts_with("impl ") {
            return false;
        }
    }
    false
}

/// Check if sleep is used for frame rate limiting (acceptable in the TUI)
fn is_frame_limiting_context(lines: &[&str], current_idx: usize) -> bool {
    // Look for frame/FPS vocabulary in nearby lines
    let context_range = current_idx.saturating_sub(10)..std::cmp::min(current_idx + 5, lines.len());

    for i in context_range {
        let line = lines[i].to_lowercase();
        if line.contains("frame") || line.contains("fps") || line.contains("tick_rate") {
            return true;
        }
    }
    false
}

/// Check if this is a tokio::time::interval pattern (acceptable for periodic tasks)
fn is_interval_pattern(lines: &[&str], current_idx: usize) -> bool {
    // let mut interval = tokio::time::interval(...); loop { interval.tick().await; }
    let context_range = current_idx.saturating_sub(20)..current_idx;

    for i in context_range {
        let line = lines[i];
        if line.contains("interval.tick()") || line.contains("tokio::time::interval") {
            return true;
        }
    }

    let forward_range = current_idx..std::cmp::min(current_idx + 5, lines.len());
    for i in forward_range {
        if lines[i].contains("interval.tick()") {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_violation_detection() {
        let test_code = vec![
            "fn bad_function() {",
            "    tokio::time::sleep(Duration::from_millis(10)).await;",
            "}",
        ];

        assert!(
            !is_in_test_function(&test_code, 1),
            "Should detect this is not a test"
        );
    }

    #[test]
    fn test_frame_limiting_detection() {
        let test_code = vec![
            "fn render_loop() {",
            "    let frame_duration = Duration::from_millis(100); // 10 FPS",
            "    loop {",
            "        render();",
            "        tokio::time::sleep(frame_duration).await;",
            "    }",
            "}",
        ];

        assert!(
            is_frame_limiting_context(&test_code, 4),
            "Should detect frame rate limiting"
        );
    }

    #[test]
    fn test_interval_pattern_detection() {
        let test_code = vec![
            "let mut interval = tokio::time::interval(period);",
            "loop {",
            "    interval.tick().await;",
            "}",
        ];

        assert!(
            is_interval_pattern(&test_code, 2),
            "Should accept interval tick loops"
        );
    }
}
