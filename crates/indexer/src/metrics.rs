use metrics::Histogram;
use metrics_derive::Metrics;

/// The metrics for the [`super::Indexer`].
#[derive(Metrics, Clone)]
#[metrics(scope = "indexer")]
pub(crate) struct IndexerMetrics {
    /// The duration of the batch handling task for the indexer.
    pub task_duration: Histogram,
}
