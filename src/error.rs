use thiserror::Error;

/// Errors raised by the recommender.
///
/// "Nothing matched" outcomes (empty vocabulary, a query with no known terms,
/// `top_n == 0`) are not errors; they come back as empty or zero-scored
/// results.
#[derive(Debug, Error)]
pub enum Error {
    /// ranking was requested before a corpus model was built
    #[error("corpus model has not been built; call build() after loading documents")]
    ModelNotBuilt,

    /// a vector refers to an index outside the vocabulary.
    /// `doc` is `None` for a query vector.
    #[error(
        "vector dimension mismatch (doc {doc:?}): \
         index {index} outside vocabulary of size {vocab_size}"
    )]
    DimensionMismatch {
        doc: Option<usize>,
        index: usize,
        vocab_size: usize,
    },

    /// the model ranked a document id that the loaded set does not have
    #[error("ranked document {id} is outside the loaded set of {doc_count} documents")]
    UnknownDocument { id: usize, doc_count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
