use thiserror::Error;

/// Flat classification of every way a resolution pass can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequiresStructReference,
    MissingIdentifier,
    TooManyOverrideKeys,
    OverrideNotAllowed,
    RetrievalFailed,
    ValueNotFound,
    CredentialsNotFound,
    EncodingError,
    PemDecodeError,
    KeyParseError,
    Custom,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::RequiresStructReference => "requires_struct_reference",
            ErrorKind::MissingIdentifier => "missing_identifier",
            ErrorKind::TooManyOverrideKeys => "too_many_override_keys",
            ErrorKind::OverrideNotAllowed => "override_not_allowed",
            ErrorKind::RetrievalFailed => "retrieval_failed",
            ErrorKind::ValueNotFound => "value_not_found",
            ErrorKind::CredentialsNotFound => "credentials_not_found",
            ErrorKind::EncodingError => "encoding_error",
            ErrorKind::PemDecodeError => "pem_decode_error",
            ErrorKind::KeyParseError => "key_parse_error",
            ErrorKind::Custom => "custom",
        }
    }
}

/// Failure of a `Process` pass. Every variant except `RequiresStructReference`
/// names the configuration field that was being resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("requires a mutable reference to a configuration struct")]
    RequiresStructReference,
    #[error("secret field `{field}` requires a non-empty retrieval identifier")]
    MissingIdentifier { field: &'static str },
    #[error("secret field `{field}` allows at most one override key, got {count}")]
    TooManyOverrideKeys { field: &'static str, count: usize },
    #[error("secret field `{field}` does not allow key overrides")]
    OverrideNotAllowed { field: &'static str },
    #[error("retrieving secret `{id}` for field `{field}`")]
    RetrievalFailed {
        field: &'static str,
        id: String,
        #[source]
        source: StoreError,
    },
    #[error("decoding secret field `{field}`")]
    Decode {
        field: &'static str,
        #[source]
        source: DecodeError,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::RequiresStructReference => ErrorKind::RequiresStructReference,
            ResolveError::MissingIdentifier { .. } => ErrorKind::MissingIdentifier,
            ResolveError::TooManyOverrideKeys { .. } => ErrorKind::TooManyOverrideKeys,
            ResolveError::OverrideNotAllowed { .. } => ErrorKind::OverrideNotAllowed,
            ResolveError::RetrievalFailed { .. } => ErrorKind::RetrievalFailed,
            ResolveError::Decode { source, .. } => source.kind(),
        }
    }

    /// Name of the field the pass stopped at, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ResolveError::RequiresStructReference => None,
            ResolveError::MissingIdentifier { field }
            | ResolveError::TooManyOverrideKeys { field, .. }
            | ResolveError::OverrideNotAllowed { field }
            | ResolveError::RetrievalFailed { field, .. }
            | ResolveError::Decode { field, .. } => Some(*field),
        }
    }
}

/// Failure of a single `Secret::decode` call. Key material errors follow the
/// decoding pipeline order: base64, PEM, then ASN.1.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no value found for key `{key}` in secret")]
    ValueNotFound { key: &'static str },
    #[error("username or password not found in secret")]
    CredentialsNotFound,
    #[error("secret is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("decoding pem: {0}")]
    PemDecode(String),
    #[error("parsing key: {0}")]
    KeyParse(String),
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl DecodeError {
    /// Wrap an arbitrary error raised by a caller-defined `Secret` type.
    pub fn custom(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Custom(err.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::ValueNotFound { .. } => ErrorKind::ValueNotFound,
            DecodeError::CredentialsNotFound => ErrorKind::CredentialsNotFound,
            DecodeError::Encoding(_) => ErrorKind::EncodingError,
            DecodeError::PemDecode(_) => ErrorKind::PemDecodeError,
            DecodeError::KeyParse(_) => ErrorKind::KeyParseError,
            DecodeError::Custom(_) => ErrorKind::Custom,
        }
    }
}

/// Failure reported by a `Store` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("secret not found: {0}")]
    NotFound(String),
    #[error("secret store error for {id}: {message}")]
    Provider { id: String, message: String },
    #[error("secret {id} is not a JSON object: {source}")]
    Malformed {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn provider(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            id: id.into(),
            message: message.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            StoreError::NotFound(id) => id,
            StoreError::Provider { id, .. } | StoreError::Malformed { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_surface_their_kind_through_resolve_error() {
        let err = ResolveError::Decode {
            field: "public_key",
            source: DecodeError::PemDecode("no pem block".to_string()),
        };
        assert_eq!(err.kind(), ErrorKind::PemDecodeError);
        assert_eq!(err.field(), Some("public_key"));
        assert_eq!(err.kind().as_str(), "pem_decode_error");
    }

    #[test]
    fn store_error_exposes_identifier() {
        assert_eq!(StoreError::NotFound("a".to_string()).id(), "a");
        assert_eq!(StoreError::provider("b", "boom").id(), "b");
        assert_eq!(
            StoreError::provider("b", "boom").to_string(),
            "secret store error for b: boom"
        );
    }
}
