//! Integration Test: UI Isolation
//!
//! **Policy**: The core crate is headless. It must not import a terminal or
//! UI framework, and its manifest must not depend on one. Any surface
//! (TUI, web, headless test harness) talks to the core through
//! `SurfaceEvent` and `HudMessage` only.

use std::fs;
use std::path::{Path, PathBuf};

const UI_CRATES: &[&str] = &["ratatui", "crossterm", "unicode_width", "textwrap"];

#[test]
fn test_core_has_no_ui_imports() {
    let core_src = workspace_root().join("visor/core/src");
    assert!(core_src.exists(), "expected {} to exist", core_src.display());

    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(&core_src)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let content = match fs::read_to_string(entry.path()) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for (idx, line) in content.lines().enumerate() {
            let code_part = line.split("//").next().unwrap_or(line);
            for ui_crate in UI_CRATES {
                if code_part.contains(&format!("use {ui_crate}"))
                    || code_part.contains(&format!("{ui_crate}::"))
                {
                    violations.push(format!(
                        "{}:{} - UI crate reference: {}",
                        entry.path().display(),
                        idx + 1,
                        line.trim()
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "\nThe core crate must stay UI-free:\n  {}\n",
        violations.join("\n  ")
    );
}

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest_path = workspace_root().join("visor/core/Cargo.toml");
    let manifest = fs::read_to_string(&manifest_path)
        .unwrap_or_else(|e| panic!("reading {}: {e}", manifest_path.display()));

    for ui_crate in ["ratatui", "crossterm"] {
        assert!(
            !manifest.contains(ui_crate),
            "visor-core's manifest must not depend on {ui_crate}"
        );
    }
}

fn workspace_root() -> PathBuf {
    // This package lives at <root>/tests/architectural-enforcement
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}
