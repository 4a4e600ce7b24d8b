// Social Corpus - builds the sample network and renders one filtered word cloud

use tracing::info;

use social_corpus::{
    config::Config,
    data_seeder::sample_network,
    monitoring::initialize_tracing,
    render::FrequencyCloudRenderer,
    services::WordCloudService,
};

fn main() -> anyhow::Result<()> {
    initialize_tracing()?;

    // Load configuration
    let config = Config::from_env()?;
    let filter = config.corpus_filter();
    info!(?filter, "loaded configuration");

    let graph = sample_network()?;

    let service = WordCloudService::new(FrequencyCloudRenderer::new(), config.cloud_layout());
    let report = service.generate(&graph, &filter)?;

    println!("{}", report.cloud.to_json()?);

    Ok(())
}
