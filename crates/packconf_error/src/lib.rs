use thiserror::Error;

/// Failure raised while composing two configuration objects.
#[derive(Debug, Error)]
pub enum ComposeError {
  /// A key holds differently shaped values in the base and the overlay, and
  /// the conflict policy refuses to pick a side.
  #[error("type mismatch at `{path}`: base is {base_kind}, overlay is {overlay_kind}")]
  TypeMismatch { path: String, base_kind: &'static str, overlay_kind: &'static str },

  /// A value tree does not fit the typed configuration shape.
  #[error("invalid configuration: {0}")]
  InvalidConfig(#[from] serde_json::Error),
}

pub type ComposeResult<T> = Result<T, ComposeError>;
