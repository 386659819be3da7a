//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for panic and silent-loss patterns.
//! Each pattern has a budget; a budget only ever ratchets down. If a change
//! needs a new occurrence, an existing one has to go first.

use std::fs;
use std::path::Path;

/// (needle, budget) over everything under `src/` except `*_test.rs` files.
const BUDGETS: &[(&str, usize)] = &[
    // Panics crash the embedding page.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss.
    ("let _ =", 0),
    (".ok()", 2),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn pattern_budgets_hold() {
    let mut sources = Vec::new();
    production_sources(Path::new("src"), &mut sources);
    assert!(!sources.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (needle, budget) in BUDGETS {
        let mut hits = Vec::new();
        let mut total = 0;
        for (path, content) in &sources {
            let count = content.lines().filter(|line| line.contains(needle)).count();
            if count > 0 {
                hits.push(format!("  {path}: {count}"));
                total += count;
            }
        }
        if total > *budget {
            violations.push(format!(
                "`{needle}` budget exceeded: found {total}, max {budget}\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(violations.is_empty(), "{}", violations.join("\n\n"));
}
