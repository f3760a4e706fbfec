/// Errors from the stream adapters.
///
/// The SLIP core itself has no error conditions: encoding is total,
/// and the decoder is lenient (invalid escape codes are reported via
/// `tracing` and skipped rather than aborting the stream).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred on the underlying stream.
    #[error("SLIP stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream ended; any partially received frame is lost.
    #[error("byte stream closed")]
    StreamClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
