use pagedom::SelectorError;

/// Errors raised while building a [`ToggleBinder`](crate::ToggleBinder).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field} selector: {source}")]
    Selector {
        field: &'static str,
        #[source]
        source: SelectorError,
    },

    #[error("no trigger keys configured")]
    NoTriggerKeys,

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
