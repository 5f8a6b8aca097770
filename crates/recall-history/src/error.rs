use recall_codec::CodecError;
use recall_store::StoreError;

/// Union of the failures a history load or save job can hit.
///
/// Never surfaced to callers of the manager's public API; load failures
/// are logged and swallowed, save failures reset the in-memory history.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Encoding or decoding the persisted document failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The durable store failed to read or commit the document.
    #[error(transparent)]
    Store(#[from] StoreError),
}
