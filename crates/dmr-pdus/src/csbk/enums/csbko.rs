/// CSBK opcode (ETSI TS 102 361-2 clause B.1, DMR services clause 7)
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Csbko {
    UnitToUnitVoiceServiceRequest = 0b000100,
    UnitToUnitVoiceServiceAnswerResponse = 0b000101,
    NegativeAcknowledgeResponse = 0b100110,
    BsOutboundActivation = 0b111000,
    Preamble = 0b111101,
}

impl std::convert::TryFrom<u64> for Csbko {
    type Error = ();
    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        let x = raw as u8;
        match x {
            0b000100 => Ok(Csbko::UnitToUnitVoiceServiceRequest),
            0b000101 => Ok(Csbko::UnitToUnitVoiceServiceAnswerResponse),
            0b100110 => Ok(Csbko::NegativeAcknowledgeResponse),
            0b111000 => Ok(Csbko::BsOutboundActivation),
            0b111101 => Ok(Csbko::Preamble),
            _ => Err(()),
        }
    }
}

impl Csbko {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u64 {
        match self {
            Csbko::UnitToUnitVoiceServiceRequest => 0b000100,
            Csbko::UnitToUnitVoiceServiceAnswerResponse => 0b000101,
            Csbko::NegativeAcknowledgeResponse => 0b100110,
            Csbko::BsOutboundActivation => 0b111000,
            Csbko::Preamble => 0b111101,
        }
    }
}

impl From<Csbko> for u64 {
    fn from(e: Csbko) -> Self { e.into_raw() }
}

impl core::fmt::Display for Csbko {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Csbko::UnitToUnitVoiceServiceRequest => write!(f, "unit to unit voice service request"),
            Csbko::UnitToUnitVoiceServiceAnswerResponse => write!(f, "unit to unit voice service answer response"),
            Csbko::NegativeAcknowledgeResponse => write!(f, "negative acknowledge response"),
            Csbko::BsOutboundActivation => write!(f, "bs outbound activation"),
            Csbko::Preamble => write!(f, "preamble"),
        }
    }
}
