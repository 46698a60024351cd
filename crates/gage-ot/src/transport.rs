use std::io::{Read, Write};

/// An ordered, reliable duplex byte stream.
///
/// Blanket-implemented for anything that is both [`Read`] and [`Write`],
/// such as a `TcpStream`. No encryption is assumed at this layer;
/// confidentiality comes from the protocol itself.
pub trait Transport: Read + Write {}

impl<T: Read + Write + ?Sized> Transport for T {}
