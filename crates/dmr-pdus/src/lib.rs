//! DMR control-plane PDU definitions and codecs
//!
//! - Csbk: Control Signalling Block decode/construct (ETSI TS 102 361)
//! - CRC-16/CCITT block checksum as applied to CSBKs

pub mod coding;
pub mod csbk;
