use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

#[derive(Clone, Debug)]
pub struct Candidate {
    pub path: PathBuf,
    pub size_kb: f64,
    pub modified: Option<SystemTime>,
}

/// Conventional directories the inventory export tends to land in.
fn search_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("."), std::env::temp_dir()];
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    if let Some(h) = home {
        let h = PathBuf::from(h);
        roots.push(h.join("Downloads"));
        roots.push(h.join("Desktop"));
        roots.push(h.join("Documents"));
    }
    roots
}

/// Flat scan of the search roots for `*.json`, deduped, newest first.
pub fn find_json_files() -> Vec<Candidate> {
    let mut seen: std::collections::HashSet<PathBuf> = std::collections::HashSet::new();
    let mut out: Vec<Candidate> = vec![];
    for root in search_roots() {
        let entries = match std::fs::read_dir(&root) { Ok(e) => e, Err(_) => continue };
        for de in entries.filter_map(Result::ok) {
            let p = de.path();
            if !p.is_file() { continue; }
            if !p.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) { continue; }
            let canon = p.canonicalize().unwrap_or_else(|_| p.clone());
            if !seen.insert(canon) { continue; }
            let meta = de.metadata().ok();
            out.push(Candidate {
                path: p,
                size_kb: meta.as_ref().map(|m| m.len() as f64 / 1024.0).unwrap_or(0.0),
                modified: meta.and_then(|m| m.modified().ok()),
            });
        }
    }
    out.sort_by(|a, b| b.modified.cmp(&a.modified));
    out
}

/// Default destination: `<stem>_report.html` beside the source.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "report".to_string());
    input.with_file_name(format!("{}_report.html", stem))
}

fn prompt(question: &str) -> Option<String> {
    print!("{}", question);
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().trim_matches('"').to_string()),
    }
}

/// Interactive source selection: list up to 10 discovered files, accept a
/// number or a typed path, re-prompt on anything else. Returns None when the
/// prompt is interrupted.
pub fn prompt_input_file() -> Option<PathBuf> {
    println!("🔍 Looking for JSON files...");
    let found = find_json_files();
    if found.is_empty() {
        println!("📁 No JSON files found in common locations.");
        println!("💡 Enter the full path to your JSON file:");
        loop {
            let input = prompt("📥 JSON file path: ")?;
            let p = PathBuf::from(&input);
            if p.exists() && input.to_lowercase().ends_with(".json") { return Some(p); }
            println!("❌ File not found or not a JSON file. Please try again.");
        }
    }
    let shown = found.len().min(10);
    println!("\n📁 Found {} JSON files:", found.len());
    for (i, c) in found.iter().take(10).enumerate() {
        let modified = c
            .modified
            .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let name = c.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        println!("  {}. {} ({:.1} KB, {})", i + 1, name, c.size_kb, modified);
        println!("     📂 {}", c.path.parent().unwrap_or(Path::new(".")).display());
    }
    if found.len() > 10 {
        println!("     ... and {} more files", found.len() - 10);
    }
    println!("\n💡 You can:");
    println!("   • Enter a number (1-{}) to select from the list above", shown);
    println!("   • Enter the full path to any JSON file");
    loop {
        let input = prompt("\n📥 Select JSON file: ")?;
        if let Ok(n) = input.parse::<usize>() {
            if (1..=shown).contains(&n) {
                return Some(found[n - 1].path.clone());
            }
            println!("❌ Please enter a number between 1 and {}", shown);
            continue;
        }
        let p = PathBuf::from(&input);
        if p.exists() && input.to_lowercase().ends_with(".json") { return Some(p); }
        println!("❌ File not found or not a JSON file. Please try again.");
    }
}

/// Destination prompt with a computed default; a custom path without an
/// `.html` extension gets one appended.
pub fn prompt_output_file(input: &Path) -> Option<PathBuf> {
    let suggested = default_output_path(input);
    println!("\n💾 Output HTML file:");
    println!("📋 Suggested: {}", suggested.display());
    let typed = prompt("📤 Output file [Enter for default]: ")?;
    if typed.is_empty() {
        return Some(suggested);
    }
    if typed.to_lowercase().ends_with(".html") {
        Some(PathBuf::from(typed))
    } else {
        Some(PathBuf::from(format!("{}.html", typed)))
    }
}

/// Post-conversion y/n prompt, defaulting to yes.
pub fn prompt_open_report() -> Option<bool> {
    let answer = prompt("\n🌐 Would you like to open the HTML file now? (y/n): ")?;
    Some(matches!(answer.to_lowercase().as_str(), "y" | "yes" | ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_beside_source() {
        let p = Path::new("/data/inventory.json");
        assert_eq!(default_output_path(p), PathBuf::from("/data/inventory_report.html"));
    }

    #[test]
    fn default_output_handles_nested_stem() {
        let p = Path::new("scan.2026.json");
        assert_eq!(default_output_path(p), PathBuf::from("scan.2026_report.html"));
    }

    #[test]
    fn discovery_sorts_newest_first() {
        let dir = std::env::temp_dir();
        let old = dir.join("sysreport_discover_old.json");
        let new = dir.join("sysreport_discover_new.json");
        std::fs::write(&old, "{}").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        std::fs::write(&new, "{}").unwrap();
        let found = find_json_files();
        let pos = |p: &Path| found.iter().position(|c| c.path.file_name() == p.file_name());
        if let (Some(a), Some(b)) = (pos(&new), pos(&old)) {
            assert!(a < b);
        }
        let _ = std::fs::remove_file(&old);
        let _ = std::fs::remove_file(&new);
    }

    #[test]
    fn discovery_only_yields_json() {
        let dir = std::env::temp_dir();
        let txt = dir.join("sysreport_discover_note.txt");
        std::fs::write(&txt, "hi").unwrap();
        let found = find_json_files();
        assert!(found.iter().all(|c| c.path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"))));
        let _ = std::fs::remove_file(&txt);
    }
}
