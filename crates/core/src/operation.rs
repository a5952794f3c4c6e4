//! Operations a device contract can expose.

/// A single device operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    TurnOn,
    TurnOff,
    Charge,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::TurnOn, Operation::TurnOff, Operation::Charge];

    /// Stable identifier (e.g. "turn_on").
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::TurnOn => "turn_on",
            Operation::TurnOff => "turn_off",
            Operation::Charge => "charge",
        }
    }

    /// Progressive form used in status lines ("turning on").
    pub fn progressive(self) -> &'static str {
        match self {
            Operation::TurnOn => "turning on",
            Operation::TurnOff => "turning off",
            Operation::Charge => "charging",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
