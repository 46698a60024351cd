use gage_core::WireLabel;
use gage_ot_core::{
    msgs::{SenderPayload, SenderSetup},
    Receiver,
};
use tracing::instrument;

use crate::{OtError, Transport};

/// Runs one exchange as the receiver, returning the wire label matching
/// `choice`.
///
/// Reads the sender's setup point, writes the blinded choice, then reads
/// both masked labels and unmasks the chosen one. An invalid point or a
/// short stream aborts the exchange.
#[instrument(level = "debug", skip_all, err)]
pub fn receive_label<T: Transport>(io: &mut T, choice: bool) -> Result<WireLabel, OtError> {
    let mut buf = [0u8; SenderSetup::LEN];
    io.read_exact(&mut buf)?;
    let setup = SenderSetup::from_bytes(&buf)?;

    let (payload, receiver) = Receiver::new().setup(choice, setup)?;
    io.write_all(&payload.to_bytes()?)?;
    io.flush()?;

    let mut buf = [0u8; SenderPayload::LEN];
    io.read_exact(&mut buf)?;
    let payload = SenderPayload::from_bytes(&buf);

    Ok(receiver.receive(payload))
}
