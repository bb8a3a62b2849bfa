use num::{Float, NumCast};

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Corpus, term::TermFrequency, vocabulary::Vocabulary},
};

/// Smoothed inverse document frequency
/// `ln((1 + n_docs) / (1 + df)) + 1`, strictly positive
#[inline]
pub fn smoothed_idf(n_docs: u64, doc_freq: u64) -> f64 {
    ((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

pub trait TFIDFEngine<N>
where
    N: Float + Into<f64>,
{
    /// 1語のIDFを計算するメソッド
    /// 語彙の上限選択と重み付けの両方がこの値を使う
    /// # Arguments
    /// * `n_docs` - 文書数
    /// * `doc_freq` - その語を含む文書数
    fn term_idf(n_docs: u64, doc_freq: u64) -> f64 {
        smoothed_idf(n_docs, doc_freq)
    }

    /// IDFベクトルを生成するメソッド
    /// # Arguments
    /// * `corpus` - コーパス
    /// * `vocab` - 語彙 (次元)
    /// # Returns
    /// * `Vec<f64>` - 語彙のインデックス順の IDF
    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary) -> Vec<f64> {
        let doc_num = corpus.get_doc_num();
        vocab
            .iter()
            .map(|term| Self::term_idf(doc_num, corpus.get_term_count(term)))
            .collect()
    }

    /// 重み付きベクトルを生成するメソッド
    /// # Arguments
    /// * `freq` - 文書またはクエリの出現回数
    /// * `vocab` - 語彙
    /// * `idf` - `idf_vec` の結果
    /// # Returns
    /// * `ZeroSpVec<N>` - 次元 `vocab.len()` のベクトル
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[f64]) -> ZeroSpVec<N>;
}

/// デフォルトのTF-IDFエンジン
/// raw tf × smoothed idf を L2 正規化する
/// `f32`、`f64`の型に対応
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float + Into<f64>,
{
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[f64]) -> ZeroSpVec<N> {
        let weights = freq.iter().filter_map(|(term, count)| {
            let idx = vocab.index_of(term)?;
            let w = idf.get(idx).copied()?;
            <N as NumCast>::from(count as f64 * w).map(|v| (idx, v))
        });
        let mut vec = ZeroSpVec::from_pairs(vocab.len(), weights);
        vec.l2_normalize();
        vec
    }
}
