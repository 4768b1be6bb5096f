use crate::index::{KeywordIndex, Occurrence};

/// Maximum number of documents a query returns.
pub const RESULT_LIMIT: usize = 5;

/// "kw1 OR kw2" query over a built index. Returns up to [`RESULT_LIMIT`]
/// distinct document names in descending order of occurrence frequency.
///
/// Returns `None` only when neither keyword appears in the index at all;
/// otherwise `Some` of the (possibly empty) result list. Candidates are
/// concatenated kw1-list-then-kw2-list and sorted with a stable sort, so
/// frequency ties favor kw1 and each list's internal order is preserved.
pub fn top_search(index: &KeywordIndex, kw1: &str, kw2: &str) -> Option<Vec<String>> {
    let occs1 = index.occurrences(kw1);
    let occs2 = index.occurrences(kw2);
    if occs1.is_none() && occs2.is_none() {
        return None;
    }

    let mut combined: Vec<&Occurrence> = Vec::new();
    combined.extend(occs1.into_iter().flatten());
    combined.extend(occs2.into_iter().flatten());
    combined.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let mut results: Vec<String> = Vec::new();
    for occ in combined {
        if results.iter().any(|d| d == &occ.document) {
            continue;
        }
        results.push(occ.document.clone());
        if results.len() == RESULT_LIMIT {
            break;
        }
    }
    Some(results)
}
