use crate::statics;

/// Local validation failures. The `Display` text is what the error toast shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", statics::PT_ERR_MEMBER_FIELDS)]
    MissingMemberFields,
    #[error("{}", statics::PT_ERR_EDIT_FIELDS)]
    MissingNameOrAddress,
    #[error("{}", statics::PT_ERR_CREATE_FIELDS)]
    MissingRequiredFields,
    #[error(
        "{prefix} {min} {suffix}",
        prefix = statics::PT_ERR_MIN_POINTS_PREFIX,
        suffix = statics::PT_ERR_MIN_POINTS_SUFFIX
    )]
    TooFewPolyPoints { min: usize },
}

/// Failures decoding an inbound host envelope.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed host message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid `{action}` payload: {source}")]
    Payload {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}
