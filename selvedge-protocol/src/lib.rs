//! Carriage Status Protocol
//!
//! This crate decodes the fixed-layout binary status messages a
//! knitting-machine controller emits while the carriage travels across the
//! needle bed. Decoding is the only concern here: framing and delivery of
//! the message stream belong to the transport layer that hands a complete
//! message buffer to [`CarriageStatus::decode`].
//!
//! # Message Overview
//!
//! A state indication uses a simple fixed layout:
//! ```text
//! ┌────┬───────┬─────────┬─────────┬──────────┬──────────┐
//! │ ID │ READY │ HALL L  │ HALL R  │ CARRIAGE │ POSITION │
//! │ 1B │ 1B    │ 2B (BE) │ 2B (BE) │ 1B       │ 1B       │
//! └────┴───────┴─────────┴─────────┴──────────┴──────────┘
//! ```
//!
//! Bytes 0-1 (message id and ready flag) are owned by the framing layer and
//! never interpreted here. Every byte value at offsets 2-7 maps to a defined
//! status, so a well-sized buffer can never fail to decode.

#![no_std]
#![deny(unsafe_code)]

pub mod status;

pub use status::{CarriageKind, CarriageStatus, StatusError, MSG_STATE, STATUS_MESSAGE_LEN};
