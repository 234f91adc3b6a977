//! File Context
//!
//! Finds file paths mentioned in a task description and loads them from the
//! project root so handlers can embed them in prompts.

use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

/// Per-file character cap applied to embedded contents
pub const DEFAULT_MAX_FILE_CHARS: usize = 5000;

/// Path-looking tokens ending in a source, style, or config extension.
const FILE_REFERENCE_PATTERNS: &[&str] = &[
    r"(?:[\w@.-]+/)*[\w@.-]+\.(?:tsx|ts|jsx|js|mjs|cjs|json|css|scss|html|md|rs|toml|yaml|yml)\b",
];

fn file_reference_patterns() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        FILE_REFERENCE_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
    })
}

/// Extract file references from free text, deduplicated in first-seen order.
///
/// A leading `./` is dropped so `./src/App.tsx` and `src/App.tsx` are the
/// same reference.
pub fn extract_file_references(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for pattern in file_reference_patterns() {
        for m in pattern.find_iter(text) {
            let mut reference = m.as_str();
            while let Some(rest) = reference.strip_prefix("./") {
                reference = rest;
            }
            if reference.is_empty() || found.iter().any(|f| f == reference) {
                continue;
            }
            found.push(reference.to_string());
        }
    }
    found
}

/// Cut `content` to at most `max_chars` characters.
///
/// Returns the (possibly shortened) text and whether anything was cut.
pub fn truncate_chars(content: &str, max_chars: usize) -> (&str, bool) {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&content[..byte_idx], true),
        None => (content, false),
    }
}

/// A file loaded for inclusion in a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    /// Project-relative path as it appeared in the task
    pub path: String,
    /// Content, truncated to the loader's cap
    pub content: String,
    pub truncated: bool,
}

/// Loads referenced files from a fixed project root.
#[derive(Debug, Clone)]
pub struct FileContextLoader {
    project_root: PathBuf,
    max_chars: usize,
}

impl FileContextLoader {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            max_chars: DEFAULT_MAX_FILE_CHARS,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Load every file referenced in `text`, one at a time.
    ///
    /// Files that cannot be read, and paths that would escape the project
    /// root, are skipped without error.
    pub async fn load_referenced(&self, text: &str) -> Vec<FileContext> {
        let mut files = Vec::new();
        for reference in extract_file_references(text) {
            if let Some(file) = self.load(&reference).await {
                files.push(file);
            }
        }
        tracing::debug!(
            loaded = files.len(),
            root = %self.project_root.display(),
            "Loaded referenced files"
        );
        files
    }

    async fn load(&self, reference: &str) -> Option<FileContext> {
        let relative = Path::new(reference);
        let escapes_root = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes_root {
            tracing::debug!("Skipping file reference outside project root: {}", reference);
            return None;
        }

        let full_path = self.project_root.join(relative);
        match tokio::fs::read_to_string(&full_path).await {
            Ok(content) => {
                let (kept, truncated) = truncate_chars(&content, self.max_chars);
                Some(FileContext {
                    path: reference.to_string(),
                    content: kept.to_string(),
                    truncated,
                })
            }
            Err(e) => {
                tracing::debug!("Skipping unreadable file {}: {}", full_path.display(), e);
                None
            }
        }
    }
}
