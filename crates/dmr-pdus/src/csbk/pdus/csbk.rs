use core::fmt;

use dmr_core::{BitBuffer, PduParseErr, RadioId};

use crate::coding::crc16;
use crate::csbk::enums::csbko::Csbko;

/// Size of one error-corrected CSBK data block as delivered by the
/// BPTC(196,96) decoder.
pub const CSBK_BLOCK_BITS: usize = 96;
pub const CSBK_BLOCK_BYTES: usize = CSBK_BLOCK_BITS / 8;

/// Bytes covered by the block checksum.
const CRC_COVERED_BYTES: usize = 10;

/// Opcode-specific CSBK fields. The active variant determines the opcode
/// on the air, so a payload/opcode mismatch is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsbkArgs {
    BsOutboundActivation,
    UnitToUnitVoiceServiceRequest {
        service_options: u8,
    },
    UnitToUnitVoiceServiceAnswerResponse {
        service_options: u8,
        answer_response: u8,
    },
    NegativeAcknowledgeResponse {
        source_type: bool,
        /// 6 bits
        service_type: u8,
        reason_code: u8,
    },
    Preamble {
        data_follows: bool,
        dst_is_group: bool,
        csbk_blocks_to_follow: u8,
    },
}

/// Representation of a Control Signalling Block.
/// See DMR AI. spec. page 67. and DMR services spec. page 53.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Csbk {
    /// True on the final block of a linked CSBK sequence
    pub last_block: bool,
    /// 24 bits, destination radio identifier
    pub dst_id: RadioId,
    /// 24 bits, source radio identifier
    pub src_id: RadioId,
    pub args: CsbkArgs,
}

impl Csbk {
    /// Opcode of the active payload variant.
    pub fn csbko(&self) -> Csbko {
        match self.args {
            CsbkArgs::BsOutboundActivation => Csbko::BsOutboundActivation,
            CsbkArgs::UnitToUnitVoiceServiceRequest { .. } => Csbko::UnitToUnitVoiceServiceRequest,
            CsbkArgs::UnitToUnitVoiceServiceAnswerResponse { .. } => Csbko::UnitToUnitVoiceServiceAnswerResponse,
            CsbkArgs::NegativeAcknowledgeResponse { .. } => Csbko::NegativeAcknowledgeResponse,
            CsbkArgs::Preamble { .. } => Csbko::Preamble,
        }
    }

    /// Parse from a BitBuffer holding one 96-bit error-corrected block.
    pub fn from_bitbuf(buffer: &mut BitBuffer) -> Result<Self, PduParseErr> {
        let mut bytes = [0u8; CSBK_BLOCK_BYTES];
        for b in bytes.iter_mut() {
            *b = buffer.read_field(8, "csbk_block")? as u8;
        }
        Self::from_block_bytes(&bytes)
    }

    /// Parse from the packed 12-byte form of a block.
    /// Every gate is a hard fail; no partial record is ever returned.
    pub fn from_block_bytes(bytes: &[u8; CSBK_BLOCK_BYTES]) -> Result<Self, PduParseErr> {
        let calculated_crc = crc16::csbk_block_crc(&bytes[..CRC_COVERED_BYTES]);
        let crc = (bytes[10] as u16) << 8 | bytes[11] as u16;
        tracing::trace!("crc: {:04x} calculated: {:04x}", crc, calculated_crc);
        if calculated_crc != crc {
            return Err(PduParseErr::ChecksumMismatch { expected: calculated_crc, found: crc });
        }

        if bytes[0] & 0b0100_0000 != 0 {
            tracing::trace!("protect flag is not 0");
            return Err(PduParseErr::ProtectFlagSet);
        }
        if bytes[1] != 0 {
            tracing::trace!("feature set id is not 0");
            return Err(PduParseErr::NonzeroFeatureSet { found: bytes[1] });
        }

        let last_block = bytes[0] & 0b1000_0000 != 0;
        let dst_id = (bytes[4] as u32) << 16 | (bytes[5] as u32) << 8 | bytes[6] as u32;
        let src_id = (bytes[7] as u32) << 16 | (bytes[8] as u32) << 8 | bytes[9] as u32;

        let raw_csbko = bytes[0] & 0b11_1111;
        let csbko = Csbko::try_from(raw_csbko as u64)
            .map_err(|_| PduParseErr::UnsupportedOpcode { found: raw_csbko })?;

        let args = match csbko {
            // No further params to parse
            Csbko::BsOutboundActivation => CsbkArgs::BsOutboundActivation,
            Csbko::UnitToUnitVoiceServiceRequest => CsbkArgs::UnitToUnitVoiceServiceRequest {
                service_options: bytes[2],
            },
            Csbko::UnitToUnitVoiceServiceAnswerResponse => CsbkArgs::UnitToUnitVoiceServiceAnswerResponse {
                service_options: bytes[2],
                answer_response: bytes[3],
            },
            Csbko::NegativeAcknowledgeResponse => CsbkArgs::NegativeAcknowledgeResponse {
                source_type: bytes[2] & 0b0100_0000 != 0,
                service_type: bytes[2] & 0b11_1111,
                reason_code: bytes[3],
            },
            Csbko::Preamble => CsbkArgs::Preamble {
                data_follows: bytes[2] & 0b1000_0000 != 0,
                dst_is_group: bytes[2] & 0b0100_0000 != 0,
                csbk_blocks_to_follow: bytes[3],
            },
        };

        let csbk = Csbk { last_block, dst_id, src_id, args };
        tracing::debug!("<- {}", csbk);
        Ok(csbk)
    }

    /// Serialize into the packed 12-byte form, checksum included.
    /// The opcode fixed pattern carries an implicit protect flag and
    /// feature set id of zero.
    pub fn to_block_bytes(&self) -> [u8; CSBK_BLOCK_BYTES] {
        let mut bytes = [0u8; CSBK_BLOCK_BYTES];
        bytes[0] = (self.last_block as u8) << 7;

        match self.args {
            CsbkArgs::BsOutboundActivation => {
                bytes[0] |= 0b111000;
            }
            CsbkArgs::UnitToUnitVoiceServiceRequest { service_options } => {
                bytes[0] |= 0b000100;
                bytes[2] = service_options;
            }
            CsbkArgs::UnitToUnitVoiceServiceAnswerResponse { service_options, answer_response } => {
                bytes[0] |= 0b000101;
                bytes[2] = service_options;
                bytes[3] = answer_response;
            }
            CsbkArgs::NegativeAcknowledgeResponse { source_type, service_type, reason_code } => {
                bytes[0] |= 0b100110;
                bytes[2] = 0b1000_0000 | (source_type as u8) << 6 | (service_type & 0b11_1111);
                bytes[3] = reason_code;
            }
            CsbkArgs::Preamble { data_follows, dst_is_group, csbk_blocks_to_follow } => {
                bytes[0] |= 0b111101;
                bytes[2] = (data_follows as u8) << 7 | (dst_is_group as u8) << 6;
                bytes[3] = csbk_blocks_to_follow;
            }
        }

        bytes[4] = (self.dst_id >> 16) as u8;
        bytes[5] = (self.dst_id >> 8) as u8;
        bytes[6] = self.dst_id as u8;
        bytes[7] = (self.src_id >> 16) as u8;
        bytes[8] = (self.src_id >> 8) as u8;
        bytes[9] = self.src_id as u8;

        let crc = crc16::csbk_block_crc(&bytes[..CRC_COVERED_BYTES]);
        bytes[10] = (crc >> 8) as u8;
        bytes[11] = crc as u8;

        bytes
    }

    /// Serialize this CSBK into the given BitBuffer as one 96-bit block.
    pub fn to_bitbuf(&self, buffer: &mut BitBuffer) {
        for &b in self.to_block_bytes().iter() {
            buffer.write_bits(b as u64, 8);
        }
    }
}

impl fmt::Display for Csbk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Csbk {{ csbko: {} last_block: {} dst_id: {} src_id: {} args: {:?} }}",
            self.csbko(),
            self.last_block,
            self.dst_id,
            self.src_id,
            self.args,
        )
    }
}
