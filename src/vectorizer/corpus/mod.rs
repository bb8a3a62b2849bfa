use indexmap::IndexMap;

use crate::TermFrequency;

/// keep document count and per-term document frequency
///
/// Terms are stored in first-seen order, which later serves as the
/// tie-break when the vocabulary is capped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// document frequency per term
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document given its term frequency
    ///
    /// Each distinct term counts once, however often it occurs.
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.doc_num += 1;
        for term in freq.term_set_ref_str() {
            *self.term_counts.entry(term.into()).or_insert(0) += 1;
        }
    }

    /// Merge another corpus into self
    ///
    /// Terms new to self are appended in `other`'s order, so merging shards
    /// in document order keeps the overall first-seen order.
    pub fn merge_corpus(&mut self, other: &Corpus) {
        for (term, &count) in other.term_counts.iter() {
            *self.term_counts.entry(term.clone()).or_insert(0) += count;
        }
        self.doc_num += other.doc_num;
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term, 0 when absent
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// position of `term` in first-seen order
    #[inline]
    pub fn first_seen_index(&self, term: &str) -> Option<usize> {
        self.term_counts.get_index_of(term)
    }

    /// iterate over (term, document frequency) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &count)| (term.as_ref(), count))
    }

    /// Get the current number of unique terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_num == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(corpus: &mut Corpus, terms: &[&str]) {
        corpus.add_doc(&TermFrequency::from(terms));
    }

    #[test]
    fn counts_documents_not_occurrences() {
        let mut corpus = Corpus::new();
        add(&mut corpus, &["soup", "tomato", "soup"]);
        add(&mut corpus, &["soup", "cream"]);
        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("soup"), 2);
        assert_eq!(corpus.get_term_count("tomato"), 1);
        assert_eq!(corpus.get_term_count("basil"), 0);
        assert_eq!(corpus.vocab_size(), 3);
        assert_eq!(corpus.first_seen_index("cream"), Some(2));
    }

    #[test]
    fn merging_shards_equals_sequential_counting() {
        let docs: [&[&str]; 4] = [&["a1", "b2"], &["b2", "c3"], &["c3"], &["d4", "a1"]];

        let mut whole = Corpus::new();
        for doc in docs {
            add(&mut whole, doc);
        }

        let mut left = Corpus::new();
        let mut right = Corpus::new();
        for doc in &docs[..2] {
            add(&mut left, doc);
        }
        for doc in &docs[2..] {
            add(&mut right, doc);
        }
        left.merge_corpus(&right);

        assert_eq!(left, whole);
        let order: Vec<&str> = left.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["a1", "b2", "c3", "d4"]);
    }
}
