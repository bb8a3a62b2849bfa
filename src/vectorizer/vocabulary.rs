use indexmap::IndexSet;
use log::debug;

use crate::{
    utils::sort::top_k_desc_stable,
    vectorizer::{corpus::Corpus, term::TermFrequency},
};

/// Frozen term -> index mapping.
///
/// Indices follow the lexical (byte) order of the retained terms, so the
/// same input always yields the same assignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Build from per-document frequencies and their corpus statistics.
    ///
    /// When the corpus holds more distinct terms than `max_features`, only the
    /// terms with the largest aggregate TF-IDF mass are kept. Equal masses
    /// keep the term seen first. `None` keeps every term.
    ///
    /// `term_idf(n_docs, doc_freq)` must be the IDF the weighting engine uses.
    pub fn build<F>(
        docs: &[TermFrequency],
        corpus: &Corpus,
        max_features: Option<usize>,
        term_idf: F,
    ) -> Self
    where
        F: Fn(u64, u64) -> f64,
    {
        let candidates = corpus.vocab_size();
        let mut retained: Vec<&str> = match max_features {
            Some(cap) if candidates > cap => {
                let mass = Self::tfidf_mass(docs, corpus, term_idf);
                let keep = top_k_desc_stable(&mass, cap);
                debug!("vocabulary capped: {} candidate terms, {} kept", candidates, keep.len());
                keep.into_iter()
                    .filter_map(|i| corpus.term_counts.get_index(i).map(|(t, _)| t.as_ref()))
                    .collect()
            }
            _ => corpus.iter().map(|(t, _)| t).collect(),
        };
        retained.sort_unstable();
        Self {
            terms: retained.into_iter().map(Box::from).collect(),
        }
    }

    /// Σ over documents of raw count × idf, indexed by first-seen position
    fn tfidf_mass<F>(docs: &[TermFrequency], corpus: &Corpus, term_idf: F) -> Vec<f64>
    where
        F: Fn(u64, u64) -> f64,
    {
        let n_docs = corpus.get_doc_num();
        let mut mass = vec![0.0; corpus.vocab_size()];
        for doc in docs {
            for (term, count) in doc.iter() {
                if let Some(i) = corpus.first_seen_index(term) {
                    let idf = term_idf(n_docs, corpus.get_term_count(term));
                    mass[i] += count as f64 * idf;
                }
            }
        }
        mass
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// terms in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::tfidf::smoothed_idf;

    fn stats(docs: &[&[&str]]) -> (Vec<TermFrequency>, Corpus) {
        let freqs: Vec<TermFrequency> = docs.iter().map(|d| TermFrequency::from(*d)).collect();
        let mut corpus = Corpus::new();
        for f in &freqs {
            corpus.add_doc(f);
        }
        (freqs, corpus)
    }

    #[test]
    fn indices_are_lexical() {
        let (freqs, corpus) = stats(&[&["soup", "tomato"], &["basil", "soup"]]);
        let vocab = Vocabulary::build(&freqs, &corpus, None, smoothed_idf);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["basil", "soup", "tomato"]);
        assert_eq!(vocab.index_of("soup"), Some(1));
        assert_eq!(vocab.index_of("xyzzy"), None);
    }

    #[test]
    fn cap_keeps_heaviest_terms() {
        // "rare" は1回だけ、"soup" は全文書に出現するが出現回数が多い
        let (freqs, corpus) = stats(&[
            &["soup", "soup", "soup", "rare"],
            &["soup", "soup", "soup", "bean", "bean"],
            &["soup", "bean", "bean"],
        ]);
        let vocab = Vocabulary::build(&freqs, &corpus, Some(2), smoothed_idf);
        assert_eq!(vocab.len(), 2);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["bean", "soup"]);
        assert_eq!(vocab.index_of("rare"), None);
    }

    #[test]
    fn cap_ties_prefer_first_seen() {
        let (freqs, corpus) = stats(&[&["zeta", "alpha", "mid"]]);
        let vocab = Vocabulary::build(&freqs, &corpus, Some(2), smoothed_idf);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["alpha", "zeta"]);
    }

    #[test]
    fn empty_corpus_gives_empty_vocabulary() {
        let (freqs, corpus) = stats(&[]);
        let vocab = Vocabulary::build(&freqs, &corpus, Some(10), smoothed_idf);
        assert!(vocab.is_empty());
        assert_eq!(vocab.iter().next(), None);
    }

    #[test]
    fn cap_follows_the_given_idf() {
        // "soup" は全文書に出現する
        let (freqs, corpus) = stats(&[&["soup", "bean"], &["soup", "rice"], &["soup", "kale"]]);
        let smoothed = Vocabulary::build(&freqs, &corpus, Some(1), smoothed_idf);
        assert_eq!(smoothed.iter().collect::<Vec<_>>(), vec!["soup"]);

        let rare_only = |_n: u64, df: u64| if df == 1 { 1.0 } else { 0.0 };
        let rare = Vocabulary::build(&freqs, &corpus, Some(1), rare_only);
        assert_eq!(rare.iter().collect::<Vec<_>>(), vec!["bean"]);
    }
}
