//! Record types for the instruction-set description.
use serde::Deserialize;

/// Reference to one operand slot of an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperandRef {
    /// Register, register-pair, or fetched-operand placeholder name
    /// (`n8` and `n16` denote immediate 8- and 16-bit values).
    pub name: String,
    /// Direct access when true; access through the addressed location named
    /// by `name` when false. Absent in the description means direct.
    /// Only meaningful for register-pair-like names.
    #[serde(default = "default_immediate")]
    pub immediate: bool,
}

const fn default_immediate() -> bool {
    true
}

impl OperandRef {
    pub fn direct(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            immediate: true,
        }
    }

    pub fn indirect(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            immediate: false,
        }
    }
}

/// One instruction-set definition record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Numeric opcode, unique within its table. The main and CB-prefixed
    /// tables are disjoint key spaces.
    pub code: u8,
    /// Symbolic instruction name, as spelled in the description.
    pub mnemonic: String,
    /// Destination before source, as ordered by the description.
    pub operands: Vec<OperandRef>,
}
