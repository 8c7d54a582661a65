mod image_collector;
mod namespace_aggregator;
mod rule_matcher;
mod rule_store;
mod version_normalizer;

pub use image_collector::{ImageCollector, NamespaceImages};
pub use namespace_aggregator::NamespaceAggregator;
pub use rule_matcher::RuleMatcher;
pub use rule_store::RuleStore;
pub use version_normalizer::VersionNormalizer;
