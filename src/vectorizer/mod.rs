pub mod analyzer;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;
pub mod vocabulary;

use std::marker::PhantomData;

use log::info;
use num::Float;
use rayon::prelude::*;

use crate::{
    document::Document,
    error::{Error, Result},
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        analyzer::Analyzer,
        corpus::Corpus,
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        vocabulary::Vocabulary,
    },
};

/// documents per document-frequency shard during build
const CORPUS_SHARD_SIZE: usize = 256;

/// Immutable TF-IDF model of a document collection.
///
/// Holds the frozen vocabulary, per-term document frequency and IDF, and one
/// L2-normalized vector per document in input order. Built once, then shared
/// read-only (it is `Send + Sync`, wrap it in an `Arc` to share).
#[derive(Debug, Clone)]
pub struct CorpusModel<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    analyzer: Analyzer,
    vocabulary: Vocabulary,
    /// document frequency, vocabulary index order
    doc_freq: Vec<u64>,
    /// IDF, vocabulary index order
    idf: Vec<f64>,
    doc_vectors: Vec<ZeroSpVec<N>>,
    _marker: PhantomData<E>,
}

impl<N, E> CorpusModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Build from ordered description strings with the default analyzer
    /// (unigrams + bigrams, English stop words removed).
    pub fn build<S>(descriptions: &[S], max_features: Option<usize>) -> Self
    where
        S: AsRef<str> + Sync,
    {
        Self::build_with_analyzer(descriptions, Analyzer::default(), max_features)
    }

    /// Build from documents, vectorizing their descriptions
    pub fn from_documents(docs: &[Document], max_features: Option<usize>) -> Self {
        let descriptions: Vec<&str> = docs.iter().map(|d| d.description.as_str()).collect();
        Self::build(&descriptions, max_features)
    }

    pub fn build_with_analyzer<S>(
        descriptions: &[S],
        analyzer: Analyzer,
        max_features: Option<usize>,
    ) -> Self
    where
        S: AsRef<str> + Sync,
    {
        // 文書ごとの解析は並列、collect は入力順を保つ
        let freqs: Vec<TermFrequency> = descriptions
            .par_iter()
            .map(|text| TermFrequency::from(analyzer.terms(text.as_ref()).as_slice()))
            .collect();

        // シャードごとに df を数え、文書順に merge して初出順を保つ
        let corpus = freqs
            .par_chunks(CORPUS_SHARD_SIZE)
            .map(|shard| {
                let mut corpus = Corpus::new();
                for freq in shard {
                    corpus.add_doc(freq);
                }
                corpus
            })
            .collect::<Vec<Corpus>>()
            .into_iter()
            .fold(Corpus::new(), |mut acc, shard| {
                acc.merge_corpus(&shard);
                acc
            });

        let vocabulary = Vocabulary::build(&freqs, &corpus, max_features, E::term_idf);
        let idf = E::idf_vec(&corpus, &vocabulary);
        let doc_freq: Vec<u64> = vocabulary.iter().map(|t| corpus.get_term_count(t)).collect();

        let doc_vectors: Vec<ZeroSpVec<N>> = freqs
            .par_iter()
            .map(|freq| {
                let mut vec = E::tf_vec(freq, &vocabulary, &idf);
                vec.shrink_to_fit();
                vec
            })
            .collect();

        info!(
            "Built TF-IDF matrix with shape ({}, {})",
            doc_vectors.len(),
            vocabulary.len()
        );

        Self {
            analyzer,
            vocabulary,
            doc_freq,
            idf,
            doc_vectors,
            _marker: PhantomData,
        }
    }

    /// Assemble a model from precomputed parts.
    ///
    /// Fails with `DimensionMismatch` if any vector does not fit the
    /// vocabulary.
    pub fn from_parts(
        analyzer: Analyzer,
        vocabulary: Vocabulary,
        doc_freq: Vec<u64>,
        doc_vectors: Vec<ZeroSpVec<N>>,
    ) -> Result<Self> {
        let corpus = Corpus {
            doc_num: doc_vectors.len() as u64,
            term_counts: vocabulary
                .iter()
                .zip(doc_freq.iter())
                .map(|(term, &df)| (Box::from(term), df))
                .collect(),
        };
        let idf = E::idf_vec(&corpus, &vocabulary);
        let model = Self {
            analyzer,
            vocabulary,
            doc_freq,
            idf,
            doc_vectors,
            _marker: PhantomData,
        };
        model.check_consistency()?;
        Ok(model)
    }

    /// Verify that every document vector lives in the vocabulary's space
    pub fn check_consistency(&self) -> Result<()> {
        let vocab_size = self.vocabulary.len();
        if self.doc_freq.len() != vocab_size {
            return Err(Error::DimensionMismatch {
                doc: None,
                index: self.doc_freq.len(),
                vocab_size,
            });
        }
        for (doc, vec) in self.doc_vectors.iter().enumerate() {
            if let Some(index) = vec.max_index().filter(|&i| i >= vocab_size) {
                return Err(Error::DimensionMismatch { doc: Some(doc), index, vocab_size });
            }
            if vec.len() != vocab_size {
                return Err(Error::DimensionMismatch {
                    doc: Some(doc),
                    index: vec.len(),
                    vocab_size,
                });
            }
        }
        Ok(())
    }
}

impl<N, E> CorpusModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    #[inline]
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF per vocabulary index
    #[inline]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// document frequency of a vocabulary term
    pub fn doc_freq(&self, term: &str) -> Option<u64> {
        self.vocabulary.index_of(term).and_then(|i| self.doc_freq.get(i).copied())
    }

    #[inline]
    pub fn doc_vectors(&self) -> &[ZeroSpVec<N>] {
        &self.doc_vectors
    }

    /// (documents, vocabulary terms)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.doc_vectors.len(), self.vocabulary.len())
    }
}
