use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "bill_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_DIRECTIVE);
}

/// Initializes the global tracing subscriber, adding `directive` on top of `RUST_LOG`.
///
/// Only the first call installs a subscriber; an unparsable directive falls
/// back to the crate default.
pub fn init_tracing_with(directive: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let directive = directive
            .parse::<Directive>()
            .or_else(|_| DEFAULT_DIRECTIVE.parse::<Directive>());
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = directive {
            filter = filter.add_directive(directive);
        }

        // A host application may already own the global subscriber.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
