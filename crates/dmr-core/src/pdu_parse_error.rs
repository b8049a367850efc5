#[derive(Debug, PartialEq, Eq)]
pub enum PduParseErr {
    /// Input ran out while reading the named field
    BufferEnded { field: Option<&'static str> },
    /// Block checksum did not match the value carried on the air
    ChecksumMismatch { expected: u16, found: u16 },
    /// The protect flag is set; such framings are not supported
    ProtectFlagSet,
    /// Non-zero feature set id; such framings are not supported
    NonzeroFeatureSet { found: u8 },
    /// Opcode value outside the supported set
    UnsupportedOpcode { found: u8 },
}
