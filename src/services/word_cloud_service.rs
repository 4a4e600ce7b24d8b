// WordCloudService - one pass from graph snapshot to rendered cloud
// Index build failures abort the pass before any corpus is produced

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::AppResult;
use crate::graph::SocialGraph;
use crate::indexing::{AttributeIndex, KeywordIndex};
use crate::render::{CloudLayout, CloudRenderer, WordCloud};
use crate::services::corpus_exporter::{Corpus, CorpusExporter};
use crate::services::corpus_filter::{CorpusFilter, CorpusFilterEngine};

#[derive(Debug, Clone, Serialize)]
pub struct CloudReport {
    pub corpus: Corpus,
    pub cloud: WordCloud,
}

pub struct WordCloudService<R: CloudRenderer> {
    renderer: R,
    layout: CloudLayout,
}

impl<R: CloudRenderer> WordCloudService<R> {
    pub fn new(renderer: R, layout: CloudLayout) -> Self {
        Self { renderer, layout }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn layout(&self) -> &CloudLayout {
        &self.layout
    }

    /// Filter the corpus only, without rendering.
    #[instrument(skip(self, graph))]
    pub fn corpus(&self, graph: &SocialGraph, filter: &CorpusFilter) -> AppResult<Corpus> {
        let keywords = KeywordIndex::build(graph.posts());
        let attributes = AttributeIndex::build(graph.users())?;

        let selected = CorpusFilterEngine::new(graph, &keywords, &attributes).apply(filter);
        let corpus = CorpusExporter::export(graph, &selected);
        if corpus.is_empty() {
            warn!("filtered corpus is empty");
        }
        Ok(corpus)
    }

    /// Build indexes, filter, export and render.
    #[instrument(skip(self, graph))]
    pub fn generate(&self, graph: &SocialGraph, filter: &CorpusFilter) -> AppResult<CloudReport> {
        let corpus = self.corpus(graph, filter)?;
        info!(
            posts = corpus.posts.len(),
            total_posts = graph.posts().len(),
            "corpus selected"
        );

        let cloud = self.renderer.render(&corpus.text, &self.layout)?;
        info!(words = cloud.words.len(), "word cloud rendered");
        Ok(CloudReport { corpus, cloud })
    }
}
