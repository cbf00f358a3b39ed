//! Carriage status decoding
//!
//! The controller reports carriage state as two big-endian hall sensor
//! readings, a carriage selector byte, and a raw position byte. The
//! selector maps unknown values to [`CarriageKind::Unknown`] instead of
//! rejecting them, so the only decode failure is a short buffer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message id of a carriage state indication
pub const MSG_STATE: u8 = 0x84;

/// Fixed length of the decoded portion of a status message
pub const STATUS_MESSAGE_LEN: usize = 8;

/// Errors that can occur during status decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusError {
    /// Buffer is shorter than the fixed message layout
    InvalidMessageLength,
}

/// Carriage selector values reported by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CarriageKind {
    /// Knit carriage
    K,
    /// Lace carriage
    L,
    /// Garter carriage
    G,
    /// Selector byte outside the known range
    #[default]
    Unknown,
}

impl CarriageKind {
    /// Map the selector byte from a status message
    ///
    /// Values outside 1-3 decode to `Unknown`; no value is rejected.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => CarriageKind::K,
            2 => CarriageKind::L,
            3 => CarriageKind::G,
            _ => CarriageKind::Unknown,
        }
    }

    /// Full display name, empty when the carriage is not recognized
    pub fn label(self) -> &'static str {
        match self {
            CarriageKind::K => "K Carriage",
            CarriageKind::L => "L Carriage",
            CarriageKind::G => "G Carriage",
            CarriageKind::Unknown => "",
        }
    }

    /// Returns true when the selector byte named a real carriage
    pub fn is_known(self) -> bool {
        !matches!(self, CarriageKind::Unknown)
    }
}

/// Decoded snapshot of the carriage from one status message
///
/// Recreated on every message; the progress state holds the latest one
/// until the next message replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CarriageStatus {
    /// Left hall sensor reading
    pub hall_left: u16,
    /// Right hall sensor reading
    pub hall_right: u16,
    /// Which carriage the machine detected
    pub kind: CarriageKind,
    /// Raw carriage position
    pub position: u8,
}

impl CarriageStatus {
    /// Decode a status message
    ///
    /// Bytes 0-1 (message id and ready flag) belong to the framing layer
    /// and are left untouched. Returns `InvalidMessageLength` when the
    /// buffer holds fewer than [`STATUS_MESSAGE_LEN`] bytes; every other
    /// input decodes successfully.
    pub fn decode(msg: &[u8]) -> Result<Self, StatusError> {
        if msg.len() < STATUS_MESSAGE_LEN {
            return Err(StatusError::InvalidMessageLength);
        }

        Ok(Self {
            hall_left: (u16::from(msg[2]) << 8) + u16::from(msg[3]),
            hall_right: (u16::from(msg[4]) << 8) + u16::from(msg[5]),
            kind: CarriageKind::from_byte(msg[6]),
            position: msg[7],
        })
    }
}
