//! Instruction table loader.
//!
//! Parses the `Opcodes.json` description into one sorted table per opcode
//! space. Operand metadata is copied through untouched; the loader trusts the
//! description's shape and fails hard on anything it cannot parse.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

pub mod error;
pub mod types;

pub use error::TableError;
pub use types::{OpcodeEntry, OperandRef};

/// Raw JSON shape of one table entry. Fields the generator does not consult
/// (bytes, cycles, flags) are ignored.
#[derive(Debug, Deserialize)]
struct RawEntry {
    mnemonic: String,
    #[serde(default)]
    operands: Vec<OperandRef>,
}

/// Top-level document: two disjoint 256-entry opcode spaces.
#[derive(Debug, Deserialize)]
struct RawDocument {
    unprefixed: HashMap<String, RawEntry>,
    cbprefixed: HashMap<String, RawEntry>,
}

/// Both opcode tables, each sorted by ascending code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSet {
    pub unprefixed: Vec<OpcodeEntry>,
    pub cbprefixed: Vec<OpcodeEntry>,
}

impl InstructionSet {
    /// Parses a JSON instruction-set description.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let set = Self {
            unprefixed: collect_entries(raw.unprefixed)?,
            cbprefixed: collect_entries(raw.cbprefixed)?,
        };
        debug!(
            unprefixed = set.unprefixed.len(),
            cbprefixed = set.cbprefixed.len(),
            "instruction set loaded"
        );
        Ok(set)
    }

    /// Reads and parses the description at `path`.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn collect_entries(raw: HashMap<String, RawEntry>) -> Result<Vec<OpcodeEntry>, TableError> {
    let mut entries = raw
        .into_iter()
        .map(|(key, entry)| {
            Ok(OpcodeEntry {
                code: parse_code(&key)?,
                mnemonic: entry.mnemonic,
                operands: entry.operands,
            })
        })
        .collect::<Result<Vec<_>, TableError>>()?;
    entries.sort_by_key(|entry| entry.code);
    Ok(entries)
}

/// Parses a two-hex-digit opcode key, with or without a `0x` prefix.
fn parse_code(key: &str) -> Result<u8, TableError> {
    let digits = key
        .strip_prefix("0x")
        .or_else(|| key.strip_prefix("0X"))
        .unwrap_or(key);
    u8::from_str_radix(digits, 16).map_err(|_| TableError::InvalidKey(key.to_owned()))
}
