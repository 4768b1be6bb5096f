use crate::tokenizer::{normalize, NoiseWords};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// One document's frequency count for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// The global keyword index. Each keyword maps to its occurrence list, kept
/// in non-increasing frequency order after every merge. The postings map is
/// private so the ordering invariant cannot be broken from outside.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    postings: HashMap<String, Vec<Occurrence>>,
    indexed: HashSet<String>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize-free entry point: aggregate a document's tokens into keyword
    /// counts and merge them in. Each document may be indexed at most once;
    /// a repeated identifier is an error rather than a silent re-merge.
    /// Returns the number of distinct keywords merged.
    pub fn index_document<I, S>(&mut self, document: &str, tokens: I, noise: &NoiseWords) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.indexed.contains(document) {
            bail!("document already indexed: {document}");
        }
        let kws = load_keywords(tokens, document, noise);
        let num_keywords = kws.len();
        self.merge(kws);
        self.indexed.insert(document.to_string());
        tracing::debug!(document, num_keywords, "merged document");
        Ok(num_keywords)
    }

    /// Fold one document's keyword map into the index. Absent keywords get a
    /// fresh single-element list; present ones get the occurrence appended
    /// and moved to its ranked position. The loader already aggregated
    /// within-document counts, so no same-document collision can occur here.
    pub fn merge(&mut self, kws: HashMap<String, Occurrence>) {
        for (keyword, occ) in kws {
            match self.postings.entry(keyword) {
                Entry::Vacant(e) => {
                    e.insert(vec![occ]);
                }
                Entry::Occupied(mut e) => {
                    let occs = e.get_mut();
                    occs.push(occ);
                    insert_last(occs);
                }
            }
        }
    }

    /// The occurrence list for a keyword, descending by frequency.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.postings.get(keyword).map(Vec::as_slice)
    }

    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    pub fn document_count(&self) -> usize {
        self.indexed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Aggregate a document's raw tokens into one `Occurrence` per distinct
/// keyword, with frequency equal to the in-document count. Tokens that fail
/// normalization are skipped.
pub fn load_keywords<I, S>(tokens: I, document: &str, noise: &NoiseWords) -> HashMap<String, Occurrence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kws: HashMap<String, Occurrence> = HashMap::new();
    for token in tokens {
        if let Some(keyword) = normalize(token.as_ref(), noise) {
            match kws.entry(keyword) {
                Entry::Occupied(mut e) => e.get_mut().frequency += 1,
                Entry::Vacant(e) => {
                    e.insert(Occurrence::new(document, 1));
                }
            }
        }
    }
    kws
}

/// Move the just-appended last element of `occs` to its ranked position,
/// given that `occs[0..n-1]` is already in non-increasing frequency order.
/// Binary search over the sorted prefix with ties going right, so an equal
/// frequency lands after the existing ties. Returns the probe midpoints in
/// visit order; callers other than tests ignore them.
pub fn insert_last(occs: &mut Vec<Occurrence>) -> Vec<usize> {
    let n = occs.len();
    let mut midpoints = Vec::new();
    if n < 2 {
        return midpoints;
    }
    let key = occs[n - 1].frequency;
    let mut min: isize = 0;
    let mut max: isize = n as isize - 2;
    while min <= max {
        let mid = (min + max) / 2;
        midpoints.push(mid as usize);
        if occs[mid as usize].frequency >= key {
            min = mid + 1;
        } else {
            max = mid - 1;
        }
    }
    // max + 1 is one past the last element with frequency >= key.
    if let Some(moved) = occs.pop() {
        occs.insert((max + 1) as usize, moved);
    }
    midpoints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(doc: &str, freq: u32) -> Occurrence {
        Occurrence::new(doc, freq)
    }

    #[test]
    fn insert_last_places_by_frequency() {
        let mut occs = vec![occ("a", 9), occ("b", 6), occ("c", 3), occ("d", 7)];
        insert_last(&mut occs);
        let freqs: Vec<u32> = occs.iter().map(|o| o.frequency).collect();
        assert_eq!(freqs, vec![9, 7, 6, 3]);
    }

    #[test]
    fn insert_last_tie_goes_after_existing() {
        let mut occs = vec![occ("a", 5), occ("b", 5), occ("c", 2), occ("d", 5)];
        insert_last(&mut occs);
        let docs: Vec<&str> = occs.iter().map(|o| o.document.as_str()).collect();
        assert_eq!(docs, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn insert_last_short_list_is_untouched() {
        let mut one = vec![occ("a", 1)];
        assert!(insert_last(&mut one).is_empty());
        assert_eq!(one.len(), 1);
        let mut empty: Vec<Occurrence> = Vec::new();
        assert!(insert_last(&mut empty).is_empty());
    }

    #[test]
    fn load_keywords_aggregates_counts() {
        let noise = NoiseWords::from_words(["the"]);
        let kws = load_keywords("The cat saw the cat.".split_whitespace(), "d1", &noise);
        assert_eq!(kws.len(), 2);
        assert_eq!(kws["cat"], occ("d1", 2));
        assert_eq!(kws["saw"], occ("d1", 1));
    }

    #[test]
    fn index_document_rejects_repeat() {
        let noise = NoiseWords::new();
        let mut index = KeywordIndex::new();
        index.index_document("d1", ["alpha"], &noise).unwrap();
        assert!(index.index_document("d1", ["beta"], &noise).is_err());
        assert_eq!(index.document_count(), 1);
    }
}
