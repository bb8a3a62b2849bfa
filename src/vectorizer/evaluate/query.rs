use log::debug;
use num::Float;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{tfidf::TFIDFEngine, term::TermFrequency, CorpusModel},
};

impl<N, E> CorpusModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Term counts of `query` under the model's analyzer
    pub fn query_frequency(&self, query: &str) -> TermFrequency {
        TermFrequency::from(self.analyzer().terms(query).as_slice())
    }

    /// Map a free-text query into the document vector space.
    ///
    /// Terms outside the vocabulary are dropped; a query with no known term
    /// gives the zero vector. The vocabulary is never extended.
    pub fn vectorize_query(&self, query: &str) -> ZeroSpVec<N> {
        let freq = self.query_frequency(query);
        let vec = E::tf_vec(&freq, self.vocabulary(), self.idf());
        debug!(
            "query vectorized: {} terms, {} in vocabulary",
            freq.term_num(),
            vec.nnz()
        );
        vec
    }
}
