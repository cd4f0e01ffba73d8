//! Datapoint codecs.
//!
//! Every KNX datapoint type is a fixed-size record packed into a
//! table of bit fields. [`Datapoint`] is the common surface a registry or
//! group-value dispatcher drives; the per-type modules also expose
//! array-based helpers for callers that know the concrete type.

use crate::encoding::{reader::Reader, writer::Writer};
use crate::types::DptId;
use crate::{DecodeError, EncodeError};

/// DPT 19.001 date and time.
pub mod date_time;

pub trait Datapoint: Sized {
    const ID: DptId;
    /// Payload size in octets.
    const SIZE: usize;
    const UNIT: &'static str = "";

    /// Whether the record holds a value that can be put on the bus.
    fn is_valid(&self) -> bool;

    /// Writes exactly [`Self::SIZE`] octets.
    fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError>;

    /// Consumes exactly [`Self::SIZE`] octets.
    fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError>;
}
