pub mod index;
pub mod search;
pub mod tokenizer;

pub use index::{insert_last, load_keywords, KeywordIndex, Occurrence};
pub use search::{top_search, RESULT_LIMIT};
pub use tokenizer::{normalize, NoiseWords};
