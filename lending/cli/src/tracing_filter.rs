use {
    std::str::FromStr,
    tracing::{
        Level, Metadata, Subscriber, level_filters::LevelFilter, metadata::ParseLevelFilterError,
    },
    tracing_subscriber::{Layer, layer::Context},
};

/// Crates whose `INFO` and `DEBUG` output is about individual HTTP requests.
const TRANSPORT_TARGETS: [&str; 4] = ["alloy_", "hyper", "reqwest", "h2"];

/// A tracing filter that demotes messages from the RPC transport crates by one
/// level, so the log stays focused on what the pool and the user did.
pub struct CustomLevelFilter {
    max_level: LevelFilter,
}

impl CustomLevelFilter {
    fn effective_level(target: &str, level: Level) -> Level {
        if !TRANSPORT_TARGETS.iter().any(|prefix| target.starts_with(prefix)) {
            return level;
        }

        match level {
            Level::ERROR => Level::WARN,
            Level::WARN => Level::INFO,
            Level::INFO => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

impl<S> Layer<S> for CustomLevelFilter
where
    S: Subscriber,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        Self::effective_level(metadata.target(), *metadata.level()) <= self.max_level
    }
}

impl FromStr for CustomLevelFilter {
    type Err = ParseLevelFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let max_level = s.parse()?;

        Ok(Self { max_level })
    }
}

// ----------------------------------- tests -----------------------------------
