use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
///
/// The directive targets every `nodepeek*` crate, so HTTP stack internals
/// stay silent unless `RUST_LOG` asks for them.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_directive(quiet).parse().expect("Invalid log directive")),
        )
        .init();
}

fn log_directive(quiet: bool) -> &'static str {
    if quiet { "nodepeek=error" } else { "nodepeek=info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directive_parses() {
        for quiet in [true, false] {
            let directive: Result<tracing_subscriber::filter::Directive, _> =
                log_directive(quiet).parse();
            assert!(directive.is_ok());
        }
        assert_eq!(log_directive(true), "nodepeek=error");
        assert_eq!(log_directive(false), "nodepeek=info");
    }
}
