use anyhow::{Context, Result};
use core::search::top_search;
use core::tokenizer::{normalize, NoiseWords};
use core::KeywordIndex;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct QueryOutcome {
    pub keywords: [String; 2],
    /// False only when neither keyword exists in the index.
    pub matched: bool,
    pub documents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IndexStats {
    pub num_docs: usize,
    pub num_keywords: usize,
}

/// Read whitespace-separated noise words from a file, or fall back to the
/// built-in list when no file is given.
pub fn load_noise_words(path: Option<&Path>) -> Result<NoiseWords> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("cannot open noise word file {}", p.display()))?;
            Ok(NoiseWords::from_words(text.split_whitespace()))
        }
        None => Ok(NoiseWords::standard()),
    }
}

/// Build the index from a manifest listing document paths, whitespace
/// separated. Relative document paths resolve against the manifest's
/// directory. A missing manifest or document file aborts the build; a
/// manifest entry repeated verbatim is skipped so each document is merged
/// exactly once.
pub fn build_index(manifest: &Path, noise: &NoiseWords) -> Result<KeywordIndex> {
    let listing = fs::read_to_string(manifest)
        .with_context(|| format!("cannot open manifest {}", manifest.display()))?;
    let base = manifest.parent().unwrap_or_else(|| Path::new("."));

    let mut index = KeywordIndex::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for doc in listing.split_whitespace() {
        if !seen.insert(doc) {
            tracing::warn!(document = doc, "duplicate manifest entry skipped");
            continue;
        }
        let path = resolve(base, doc);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("cannot open document {}", path.display()))?;
        let num_keywords = index.index_document(doc, text.split_whitespace(), noise)?;
        tracing::debug!(document = doc, num_keywords, "indexed document");
    }
    tracing::info!(
        num_docs = index.document_count(),
        num_keywords = index.keyword_count(),
        "index build complete"
    );
    Ok(index)
}

/// Run a two-keyword OR query. Raw query words go through the same
/// normalizer as document tokens; a word the normalizer rejects is looked up
/// as its lowercased self and will simply find nothing.
pub fn run_query(index: &KeywordIndex, raw1: &str, raw2: &str, noise: &NoiseWords) -> QueryOutcome {
    let kw1 = query_keyword(raw1, noise);
    let kw2 = query_keyword(raw2, noise);
    let hits = top_search(index, &kw1, &kw2);
    QueryOutcome {
        keywords: [kw1, kw2],
        matched: hits.is_some(),
        documents: hits.unwrap_or_default(),
    }
}

pub fn stats(index: &KeywordIndex) -> IndexStats {
    IndexStats {
        num_docs: index.document_count(),
        num_keywords: index.keyword_count(),
    }
}

fn query_keyword(raw: &str, noise: &NoiseWords) -> String {
    normalize(raw, noise).unwrap_or_else(|| raw.to_lowercase())
}

fn resolve(base: &Path, doc: &str) -> PathBuf {
    let p = Path::new(doc);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}
