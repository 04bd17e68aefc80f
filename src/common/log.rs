use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_tree::HierarchicalLayer;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber used by hosts embedding the snapper.
///
/// Honors `RUST_LOG`. Returns `false` when a subscriber was already installed,
/// which leaves the existing one in place.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(HierarchicalLayer::default().with_indent_amount(2).with_targets(true))
        .try_init()
        .is_ok()
}
