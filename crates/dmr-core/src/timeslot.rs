use core::fmt;

/// One of the two TDMA timeslots a DMR repeater multiplexes calls onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeslot {
    Ts1,
    Ts2,
}

impl Timeslot {
    /// Both timeslots, in storage order.
    pub const BOTH: [Timeslot; 2] = [Timeslot::Ts1, Timeslot::Ts2];

    /// 0-based storage index.
    pub fn index(self) -> usize {
        match self {
            Timeslot::Ts1 => 0,
            Timeslot::Ts2 => 1,
        }
    }

    /// Timeslot number as used on the air (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Timeslot::Ts1 => 1,
            Timeslot::Ts2 => 2,
        }
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ts{}", self.number())
    }
}
