//! Compact stderr logging: `LEVEL message fields`, no timestamps or targets.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_with_level(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(level);

    let _ = Registry::default().with(layer).try_init();
}

/// Map a `-v` count to a level: none is WARN, then DEBUG, then TRACE.
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_from_verbosity(1), LevelFilter::DEBUG);
        assert_eq!(level_from_verbosity(7), LevelFilter::TRACE);
    }

    #[test]
    fn init_twice() {
        init_with_level(LevelFilter::DEBUG);
        init_with_level(LevelFilter::TRACE);
        tracing::debug!("still alive");
    }
}
