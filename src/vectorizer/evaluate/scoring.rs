use std::fmt::Debug;

use num::Float;
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    utils::{math::vector::ZeroSpVec, sort::top_k_desc_stable},
    vectorizer::{tfidf::TFIDFEngine, CorpusModel},
};

/// One ranked document
#[derive(Clone, Copy, PartialEq)]
pub struct HitEntry {
    /// document id
    pub id: usize,
    /// cosine similarity in [0, 1]
    pub score: f64,
}

/// Structure to store search results, best first
#[derive(Clone, Default, PartialEq)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitEntry> {
        self.list.iter()
    }
}

impl IntoIterator for Hits {
    type Item = HitEntry;
    type IntoIter = std::vec::IntoIter<HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl Debug for HitEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:.6})", self.id, self.score)
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6}", hit.id, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<N, E> CorpusModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Cosine similarity of `query` against every document, in document order.
    ///
    /// Both sides are unit or zero vectors, so the dot product is the cosine.
    /// Scores are clamped into [0, 1].
    pub fn scores(&self, query: &ZeroSpVec<N>) -> Result<Vec<f64>> {
        let vocab_size = self.vocab_size();
        if let Some(index) = query.max_index().filter(|&i| i >= vocab_size) {
            return Err(Error::DimensionMismatch { doc: None, index, vocab_size });
        }
        self.doc_vectors()
            .par_iter()
            .enumerate()
            .map(|(doc, vec)| {
                if let Some(index) = vec.max_index().filter(|&i| i >= vocab_size) {
                    return Err(Error::DimensionMismatch { doc: Some(doc), index, vocab_size });
                }
                let s = query.dot(vec);
                Ok(if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) })
            })
            .collect()
    }

    /// Top `top_k` documents for a query vector.
    ///
    /// Descending score; equal scores keep document order. `top_k == 0`
    /// gives no hits and `top_k` beyond the corpus size gives every document.
    pub fn rank(&self, query: &ZeroSpVec<N>, top_k: usize) -> Result<Hits> {
        if top_k == 0 {
            return Ok(Hits::default());
        }
        let scores = self.scores(query)?;
        let list = top_k_desc_stable(&scores, top_k)
            .into_iter()
            .map(|id| HitEntry { id, score: scores[id] })
            .collect();
        Ok(Hits::new(list))
    }

    /// Vectorize `query` and rank it
    pub fn search(&self, query: &str, top_k: usize) -> Result<Hits> {
        let vec = self.vectorize_query(query);
        self.rank(&vec, top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CorpusModel {
        CorpusModel::build(
            &[
                "creamy tomato soup with basil",
                "beef stew with carrots",
                "tomato salsa with chilies",
                "chocolate cake",
            ],
            None,
        )
    }

    #[test]
    fn best_match_first_and_scores_bounded() {
        let m = model();
        let hits = m.search("tomato soup", 10).unwrap();
        assert_eq!(hits.len(), 4);
        assert_eq!(hits.list[0].id, 0);
        assert!(hits.iter().all(|h| (0.0..=1.0).contains(&h.score)));
        assert!(hits.list.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn zero_query_keeps_document_order() {
        let m = model();
        let hits = m.search("xyzzy", 3).unwrap();
        let ids: Vec<usize> = hits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(hits.iter().all(|h| h.score == 0.0));
    }

    #[test]
    fn top_k_bounds() {
        let m = model();
        assert!(m.search("tomato", 0).unwrap().is_empty());
        let mut ids: Vec<usize> = m.search("tomato", 100).unwrap().iter().map(|h| h.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_vocabulary_query_index_is_rejected() {
        let m = model();
        let bad = ZeroSpVec::from_pairs(m.vocab_size() + 1, [(m.vocab_size(), 1.0)]);
        assert!(matches!(
            m.rank(&bad, 3),
            Err(Error::DimensionMismatch { doc: None, .. })
        ));
    }

    #[test]
    fn debug_alternate_lists_hits() {
        let hits = Hits::new(vec![HitEntry { id: 2, score: 0.5 }]);
        assert_eq!(format!("{:#?}", hits), "Hits [\n    2: 0.500000\n]");
        assert_eq!(format!("{:?}", hits), "[(2, 0.500000)]");
    }
}
