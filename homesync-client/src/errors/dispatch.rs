#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Update channel closed")]
    ChannelClosed,

    #[error("Device source unavailable: {0}")]
    SourceUnavailable(String),
}
