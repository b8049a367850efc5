use dmr_core::{BitBuffer, PduParseErr};
use dmr_pdus::coding::crc16;
use dmr_pdus::csbk::{CSBK_BLOCK_BITS, CSBK_BLOCK_BYTES, Csbk, CsbkArgs, Csbko};

fn sample_blocks() -> Vec<Csbk> {
    vec![
        Csbk {
            last_block: true,
            dst_id: 0x010203,
            src_id: 0x040506,
            args: CsbkArgs::BsOutboundActivation,
        },
        Csbk {
            last_block: false,
            dst_id: 2042001,
            src_id: 2042002,
            args: CsbkArgs::UnitToUnitVoiceServiceRequest { service_options: 0x20 },
        },
        Csbk {
            last_block: true,
            dst_id: 2042002,
            src_id: 2042001,
            args: CsbkArgs::UnitToUnitVoiceServiceAnswerResponse {
                service_options: 0x20,
                answer_response: 0x21,
            },
        },
        Csbk {
            last_block: true,
            dst_id: 1,
            src_id: 0xFFFFFF,
            args: CsbkArgs::NegativeAcknowledgeResponse {
                source_type: true,
                service_type: 0b100100,
                reason_code: 0x44,
            },
        },
        Csbk {
            last_block: false,
            dst_id: 0xE30000,
            src_id: 2042003,
            args: CsbkArgs::Preamble {
                data_follows: true,
                dst_is_group: false,
                csbk_blocks_to_follow: 4,
            },
        },
    ]
}

fn patch_crc(bytes: &mut [u8; CSBK_BLOCK_BYTES]) {
    let crc = crc16::csbk_block_crc(&bytes[..10]);
    bytes[10] = (crc >> 8) as u8;
    bytes[11] = crc as u8;
}

#[test]
fn test_round_trip_all_variants() {
    for block in sample_blocks() {
        let bytes = block.to_block_bytes();
        let decoded = Csbk::from_block_bytes(&bytes).unwrap();
        assert_eq!(decoded, block);
    }
}

#[test]
fn test_round_trip_through_bit_array() {
    // The construct output travels as one bit per byte through the FEC
    // stage and back into decode
    for block in sample_blocks() {
        let mut buffer = BitBuffer::new(CSBK_BLOCK_BITS);
        block.to_bitbuf(&mut buffer);
        let bitarr = buffer.into_bitvec();
        assert_eq!(bitarr.len(), CSBK_BLOCK_BITS);

        let mut rx = BitBuffer::from_bitarr(&bitarr);
        let decoded = Csbk::from_bitbuf(&mut rx).unwrap();
        assert_eq!(decoded, block);
    }
}

#[test]
fn test_bs_outbound_activation_wire_layout() {
    let block = Csbk {
        last_block: true,
        dst_id: 0x010203,
        src_id: 0x040506,
        args: CsbkArgs::BsOutboundActivation,
    };
    let bytes = block.to_block_bytes();

    // last_block=1, protect=0, csbko=0b111000
    assert_eq!(bytes[0], 0b1011_1000);
    assert_eq!(bytes[1], 0);
    assert_eq!(&bytes[4..10], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);

    let decoded = Csbk::from_block_bytes(&bytes).unwrap();
    assert_eq!(decoded.csbko(), Csbko::BsOutboundActivation);
    assert_eq!(decoded.last_block, true);
    assert_eq!(decoded.dst_id, 0x010203);
    assert_eq!(decoded.src_id, 0x040506);
}

#[test]
fn test_checksum_sensitivity() {
    // Flipping any single bit of the checksum-covered bytes must fail decode
    let reference = sample_blocks()[0].to_block_bytes();
    for bit in 0..80 {
        let mut bytes = reference;
        bytes[bit / 8] ^= 0x80 >> (bit % 8);
        let err = Csbk::from_block_bytes(&bytes).unwrap_err();
        assert!(
            matches!(err, PduParseErr::ChecksumMismatch { .. }),
            "bit {}: expected checksum mismatch, got {:?}", bit, err
        );
    }
}

#[test]
fn test_rejects_protect_flag() {
    let mut bytes = sample_blocks()[0].to_block_bytes();
    bytes[0] |= 0b0100_0000;
    patch_crc(&mut bytes);
    assert_eq!(Csbk::from_block_bytes(&bytes), Err(PduParseErr::ProtectFlagSet));
}

#[test]
fn test_rejects_nonzero_feature_set() {
    let mut bytes = sample_blocks()[0].to_block_bytes();
    bytes[1] = 0x01;
    patch_crc(&mut bytes);
    assert_eq!(
        Csbk::from_block_bytes(&bytes),
        Err(PduParseErr::NonzeroFeatureSet { found: 0x01 })
    );
}

#[test]
fn test_rejects_unknown_opcodes() {
    let supported = [0b000100u8, 0b000101, 0b100110, 0b111000, 0b111101];
    for opcode in 0u8..64 {
        if supported.contains(&opcode) {
            continue;
        }
        let mut bytes = [0u8; CSBK_BLOCK_BYTES];
        bytes[0] = opcode;
        patch_crc(&mut bytes);
        assert_eq!(
            Csbk::from_block_bytes(&bytes),
            Err(PduParseErr::UnsupportedOpcode { found: opcode }),
            "opcode {:#04x}", opcode
        );
    }
}

#[test]
fn test_short_buffer_fails() {
    let mut buffer = BitBuffer::new(CSBK_BLOCK_BITS - 16);
    assert_eq!(
        Csbk::from_bitbuf(&mut buffer),
        Err(PduParseErr::BufferEnded { field: Some("csbk_block") })
    );
}
