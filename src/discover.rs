//! Source discovery and tree listing — the traversal side of the pipeline.
//!
//! Everything here is driven by an explicit [`ScanConfig`] rather than
//! process-wide state, and output order is sorted so repeated runs over the
//! same tree are deterministic.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions handed to the extractor.
const SOURCE_EXTENSIONS: &[&str] = &["c", "asm"];

/// Suffixes shown in the project-structure listing (matched against the end
/// of the file name, so `Makefile` covers `GNUmakefile`-style names too).
const TREE_SUFFIXES: &[&str] = &[".c", ".asm", ".py", ".ld", ".sh", "Makefile"];

/// Traversal configuration, owned by the caller and passed through the
/// pipeline explicitly.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Project root to scan.
    pub root: PathBuf,
    /// Extensions (no dot) collected for extraction.
    pub source_extensions: Vec<String>,
    /// File-name suffixes listed in the project tree.
    pub tree_suffixes: Vec<String>,
    /// File names excluded from extraction (e.g. the tool's own artifacts).
    pub exclude: Vec<String>,
}

impl ScanConfig {
    pub fn new(root: PathBuf) -> Self {
        ScanConfig {
            root,
            source_extensions: SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            tree_suffixes: TREE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
        }
    }
}

/// Collect all extractable source files under the root, sorted.
///
/// Exclusion is by file name, applied here so the extractor never sees the
/// files at all.
pub fn source_files(config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for ext in &config.source_extensions {
        let pattern = format!("{}/**/*.{}", config.root.display(), ext);
        let matches = glob::glob(&pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .filter(|p| !is_excluded(p, &config.exclude));
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_excluded(path: &Path, exclude: &[String]) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => exclude.iter().any(|e| e == name),
        None => false,
    }
}

/// Render the indented project tree: directories suffixed with `/`, two
/// spaces per level, only recognized file types listed.
pub fn tree_listing(config: &ScanConfig) -> Result<String> {
    let mut lines = vec!["./".to_string()];
    walk(&config.root, &config.tree_suffixes, 1, &mut lines)?;
    Ok(lines.join("\n"))
}

fn walk(dir: &Path, suffixes: &[String], depth: usize, lines: &mut Vec<String>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    let mut subdirs: Vec<PathBuf> = Vec::new();
    let mut files: Vec<String> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if path.is_dir() {
            // Hidden directories (.git and friends) never carry sources.
            if !name.starts_with('.') {
                subdirs.push(path);
            }
        } else if suffixes.iter().any(|s| name.ends_with(s)) {
            files.push(name);
        }
    }
    subdirs.sort();
    files.sort();

    let indent = "  ".repeat(depth);
    for name in files {
        lines.push(format!("{}{}", indent, name));
    }
    for subdir in subdirs {
        let name = subdir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        lines.push(format!("{}{}/", indent, name));
        walk(&subdir, suffixes, depth + 1, lines)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_sources_recursively_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("kernel")).unwrap();
        touch(&dir.path().join("kernel/kernel.c"));
        touch(&dir.path().join("boot.asm"));
        touch(&dir.path().join("notes.txt"));

        let files = source_files(&ScanConfig::new(dir.path().to_path_buf())).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["boot.asm", "kernel.c"]);
    }

    #[test]
    fn exclusion_is_by_file_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("kernel.c"));
        touch(&dir.path().join("memory_check.c"));

        let mut cfg = ScanConfig::new(dir.path().to_path_buf());
        cfg.exclude.push("memory_check.c".to_string());
        let files = source_files(&cfg).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("kernel.c"));
    }

    #[test]
    fn tree_indents_and_filters() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        touch(&dir.path().join("Makefile"));
        touch(&dir.path().join("src/io.c"));
        touch(&dir.path().join("src/io.o"));

        let tree = tree_listing(&ScanConfig::new(dir.path().to_path_buf())).unwrap();
        assert_eq!(tree, "./\n  Makefile\n  src/\n    io.c");
    }

    #[test]
    fn tree_skips_hidden_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        touch(&dir.path().join(".git/config.c"));
        touch(&dir.path().join("main.c"));

        let tree = tree_listing(&ScanConfig::new(dir.path().to_path_buf())).unwrap();
        assert!(!tree.contains(".git"));
        assert!(tree.contains("main.c"));
    }
}
