use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // A candidate keyword is a leading run of letters followed only by
    // trailing non-letters. Letters resuming after a non-letter ("test-case",
    // "can't") disqualify the whole token.
    static ref KEYWORD_RE: Regex = Regex::new(r"(?u)^(\p{L}+)\P{L}*$").expect("valid regex");
}

static STANDARD_NOISE: &[&str] = &[
    "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
    "be","because","been","before","being","below","between","both","but","by",
    "can","cannot","could",
    "did","do","does","doing","down","during",
    "each","few","for","from","further",
    "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
    "i","if","in","into","is","it","its","itself",
    "me","more","most","my","myself",
    "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
    "same","she","should","so","some","such",
    "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
    "under","until","up","very",
    "was","we","were","what","when","where","which","while","who","whom","why","with","would",
    "you","your","yours","yourself","yourselves",
];

/// The set of words excluded from indexing. Membership is always tested on
/// lowercase forms; words are lowercased on the way in.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw words as a provider supplies them (any case).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for w in words {
            set.insert(w.as_ref());
        }
        set
    }

    /// The built-in English noise word list, used when no external list is
    /// supplied. Letters-only by construction; contracted forms can never
    /// pass normalization anyway.
    pub fn standard() -> Self {
        Self::from_words(STANDARD_NOISE.iter())
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Reduce a raw whitespace-delimited token to its canonical keyword, or
/// reject it. The token is NFKC-normalized, then must be a run of letters
/// with at most trailing punctuation; the letter run is lowercased and
/// checked against the noise word set.
pub fn normalize(token: &str, noise: &NoiseWords) -> Option<String> {
    let token = token.nfkc().collect::<String>();
    let caps = KEYWORD_RE.captures(&token)?;
    let keyword = caps[1].to_lowercase();
    if noise.contains(&keyword) {
        return None;
    }
    Some(keyword)
}
