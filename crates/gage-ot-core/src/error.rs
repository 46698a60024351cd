use gage_core::point::PointError;

/// Errors that can occur on the sender side of an exchange.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum SenderError {
    #[error(transparent)]
    Point(#[from] PointError),
}

/// Errors that can occur on the receiver side of an exchange.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum ReceiverError {
    #[error(transparent)]
    Point(#[from] PointError),
}
