use std::{path::Path, sync::Arc};

use log::{debug, info};

use crate::{
    config::RecommenderConfig,
    document::{self, Document, RawRecord},
    error::{Error, Result},
    vectorizer::CorpusModel,
};

/// One recommended item
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: usize,
    pub title: String,
    pub description: String,
    /// cosine similarity in [0, 1]
    pub score: f64,
}

/// Load -> build -> recommend.
///
/// Loading replaces the document set and drops any previous model. The
/// model is published once as an `Arc`, so clones of it can serve queries
/// from other threads.
#[derive(Debug, Clone, Default)]
pub struct ContentRecommender {
    config: RecommenderConfig,
    documents: Arc<Vec<Document>>,
    model: Option<Arc<CorpusModel>>,
}

impl ContentRecommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            documents: Arc::new(Vec::new()),
            model: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Replace the document set with already filtered documents
    pub fn load(&mut self, documents: Vec<Document>) -> &mut Self {
        info!("Loaded dataset with {} items", documents.len());
        self.documents = Arc::new(documents);
        self.model = None;
        self
    }

    /// Filter, deduplicate and load raw records
    pub fn load_records<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        self.load(Document::from_records(records))
    }

    /// Load a JSON array of records from disk
    pub fn load_json<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let docs = document::load_json(path)?;
        Ok(self.load(docs))
    }

    /// Load a CSV file with `title` and `description` columns
    pub fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let docs = document::load_csv(path)?;
        Ok(self.load(docs))
    }

    /// Load CSV or JSON, chosen by file extension
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let docs = document::load_path(path)?;
        Ok(self.load(docs))
    }

    /// Build the corpus model from the loaded documents.
    ///
    /// An empty document set gives an empty model, not an error.
    pub fn build(&mut self) -> Arc<CorpusModel> {
        let model = Arc::new(CorpusModel::from_documents(
            &self.documents,
            self.config.feature_cap(),
        ));
        self.model = Some(Arc::clone(&model));
        model
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.model.is_some()
    }

    /// The published model
    pub fn model(&self) -> Result<Arc<CorpusModel>> {
        self.model.clone().ok_or(Error::ModelNotBuilt)
    }

    /// Up to `top_n` documents most similar to `query`, best first.
    ///
    /// Documents that share no term with the query still appear with score 0
    /// when fewer than `top_n` documents match. A hit that does not map back
    /// to a loaded document fails with `UnknownDocument`.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        let model = self.model.as_ref().ok_or(Error::ModelNotBuilt)?;
        let hits = model.search(query, top_n)?;
        debug!("query {:?}: {:?}", query, hits);
        hits.into_iter()
            .map(|hit| -> Result<Recommendation> {
                let doc = self.documents.get(hit.id).ok_or(Error::UnknownDocument {
                    id: hit.id,
                    doc_count: self.documents.len(),
                })?;
                Ok(Recommendation {
                    id: doc.id,
                    title: doc.title.clone(),
                    description: doc.description.clone(),
                    score: hit.score,
                })
            })
            .collect()
    }

    /// `recommend` with the configured `top_n`
    pub fn recommend_default(&self, query: &str) -> Result<Vec<Recommendation>> {
        self.recommend(query, self.config.top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommender() -> ContentRecommender {
        let mut r = ContentRecommender::new(RecommenderConfig::default());
        r.load_records(vec![
            RawRecord::new("Tomato Soup", "creamy tomato soup with basil"),
            RawRecord::new("Beef Stew", "hearty beef stew with carrots"),
            RawRecord::new("Salsa", "fresh tomato salsa"),
        ]);
        r
    }

    #[test]
    fn recommend_before_build_fails() {
        let r = recommender();
        assert!(matches!(r.recommend("tomato", 3), Err(Error::ModelNotBuilt)));
        assert!(matches!(r.model(), Err(Error::ModelNotBuilt)));
    }

    #[test]
    fn recommend_after_build() {
        let mut r = recommender();
        r.build();
        let recs = r.recommend("tomato soup", 2).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Tomato Soup");
        assert_eq!(r.recommend_default("tomato").unwrap().len(), 3);
    }

    #[test]
    fn hit_outside_loaded_documents_is_an_error() {
        let mut r = recommender();
        r.build();
        // モデルは3文書、読み込み済みは1文書
        Arc::make_mut(&mut r.documents).truncate(1);
        assert!(matches!(
            r.recommend("tomato", 3),
            Err(Error::UnknownDocument { doc_count: 1, .. })
        ));
    }

    #[test]
    fn reload_drops_model() {
        let mut r = recommender();
        r.build();
        assert!(r.is_built());
        r.load(Vec::new());
        assert!(!r.is_built());
        r.build();
        assert!(r.recommend("tomato", 5).unwrap().is_empty());
    }
}
