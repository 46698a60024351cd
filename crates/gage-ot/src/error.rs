use gage_core::point::PointError;
use gage_ot_core::{ReceiverError, SenderError};

/// Errors that can occur while driving an exchange over a transport.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum OtError {
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
    #[error("peer sent an invalid curve point: {0}")]
    Point(#[from] PointError),
    #[error(transparent)]
    Sender(#[from] SenderError),
    #[error(transparent)]
    Receiver(#[from] ReceiverError),
}
