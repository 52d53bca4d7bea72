//! Hygiene checks that enforce coding standards at test time.
//!
//! Scans the production sources under `src/` (sibling `*_test.rs` files are
//! skipped) for antipatterns. Each pattern has a budget, ideally zero. The
//! budget never grows: fix an existing hit before adding a new one.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics: a pointer tick must never crash the host page.
    Budget { pattern: ".unwrap()", max: 0, why: "panics" },
    Budget { pattern: ".expect(", max: 0, why: "panics" },
    Budget { pattern: "panic!(", max: 0, why: "panics" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics" },
    Budget { pattern: "todo!(", max: 0, why: "stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "discards a value unseen" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error unseen" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

/// Files allowed to read the process environment.
const ENV_READERS: &[&str] = &["config.rs"];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[test]
fn scanner_sees_the_crate() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "no sources found under src/");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            let where_ = found.iter().map(|(p, n)| format!("    {p}: {n}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("{} ({}): found {count}, max {}\n{where_}", budget.pattern, budget.why, budget.max));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn environment_is_read_only_by_config() {
    let files = source_files();
    let offenders: Vec<String> = hits(&files, "std::env::var")
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| !ENV_READERS.iter().any(|allowed| path.ends_with(allowed)))
        .collect();
    assert!(offenders.is_empty(), "environment read outside config: {offenders:?}");
}
