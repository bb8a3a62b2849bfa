//! This crate is a content-based recommender built on TF-IDF vectors and
//! cosine similarity.

pub mod config;
pub mod document;
pub mod error;
pub mod recommender;
pub mod utils;
pub mod vectorizer;

/// Content Recommender
/// The top-level struct of this crate.
/// It owns the loaded documents and the built model, and maps ranked
/// document ids back to titles and descriptions.
///
/// Lifecycle:
/// - `load` / `load_records` / `load_json` / `load_csv` / `load_file`
///   replace the document set
/// - `build` creates the `CorpusModel` and publishes it as `Arc`
/// - `recommend` ranks documents against a free-text query
///
/// Calling `recommend` before `build` returns `Error::ModelNotBuilt`.
pub use recommender::{ContentRecommender, Recommendation};

/// Corpus Model
/// Immutable TF-IDF model of a document collection.
///
/// Internally, it holds:
/// - The frozen vocabulary (term -> index, lexical order, capped)
/// - Per-term document frequency and IDF
/// - One L2-normalized sparse vector per document
///
/// `CorpusModel<N, E>` has the following generic parameters:
/// - `N`: Vector element type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// # Thread Safety
/// The model is never mutated after building. It is `Send + Sync` and
/// queries can run concurrently through a shared `Arc<CorpusModel>`.
pub use vectorizer::CorpusModel;

/// Corpus
/// Document count and per-term document frequency.
/// It does not store document text; it is the base data for IDF.
/// Shards counted separately can be combined with `merge_corpus`.
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Occurrence count of each term within one document or query.
pub use vectorizer::term::TermFrequency;

/// Vocabulary
/// Frozen term -> index mapping, capped to the terms with the largest
/// aggregate TF-IDF mass.
pub use vectorizer::vocabulary::Vocabulary;

/// Text analyzer
/// Lower-casing, `\b\w\w+\b` word tokens, English stop word removal, then
/// unigrams and bigrams.
pub use vectorizer::analyzer::Analyzer;

/// TF-IDF Engine trait and default implementation.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Ranked search results
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

/// Sparse vector
pub use utils::math::vector::ZeroSpVec;

pub use config::RecommenderConfig;
pub use document::{Document, RawRecord};
pub use error::{Error, Result};
