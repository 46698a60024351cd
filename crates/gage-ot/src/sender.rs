use gage_core::WireLabel;
use gage_ot_core::{msgs::ReceiverPayload, Sender};
use tracing::instrument;

use crate::{OtError, Transport};

/// Runs one exchange as the sender, transferring `label0` and `label1` so
/// the peer learns exactly the label matching its choice bit.
///
/// Writes the setup point, reads the peer's blinded choice, then writes
/// both masked labels. The exchange uses fresh ephemerals and any failure
/// aborts it; nothing is retried.
#[instrument(level = "debug", skip_all, err)]
pub fn send_labels<T: Transport>(
    io: &mut T,
    label0: WireLabel,
    label1: WireLabel,
) -> Result<(), OtError> {
    let (setup, sender) = Sender::new().setup();

    io.write_all(&setup.to_bytes()?)?;
    io.flush()?;

    let mut buf = [0u8; ReceiverPayload::LEN];
    io.read_exact(&mut buf)?;
    let receiver_payload = ReceiverPayload::from_bytes(&buf)?;

    let payload = sender.send(&[label0, label1], receiver_payload)?;
    io.write_all(&payload.to_bytes())?;
    io.flush()?;

    Ok(())
}
