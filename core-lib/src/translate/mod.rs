//! Instruction translator.
//!
//! Converts one [`OpcodeEntry`] into one [`Handler`] by matching the
//! mnemonic/operand combination against an ordered rule table. Rules are
//! tried in priority order and the first match wins; the final rule matches
//! everything, so every entry produces exactly one handler, possibly an
//! unhandled-pattern marker. Translation is pure and stateless.
use once_cell::sync::Lazy;
use tracing::trace;

pub mod ir;
pub mod render;

pub use ir::{Service, Stmt};
pub use render::render;

use crate::table::OpcodeEntry;

/// Plain 8-bit register names.
const REGS8: [&str; 7] = ["A", "B", "C", "D", "E", "H", "L"];
/// 16-bit register pair names.
const PAIRS: [&str; 3] = ["BC", "DE", "HL"];
/// Placeholder name for a fetched 8-bit immediate.
const IMM8: &str = "n8";
/// Placeholder name for a fetched 16-bit immediate.
const IMM16: &str = "n16";
/// Extra cost of a 16-bit increment or decrement.
const WIDE_ADJUST_CYCLES: u32 = 4;

fn is_reg8(name: &str) -> bool {
    REGS8.contains(&name)
}

fn is_pair(name: &str) -> bool {
    PAIRS.contains(&name)
}

fn is_wide(name: &str) -> bool {
    is_pair(name) || name == "SP"
}

/// A generated handler for one opcode entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub code: u8,
    pub mnemonic: String,
    /// Operand names, in description order, for the header comment.
    pub operands: Vec<String>,
    pub body: Vec<Stmt>,
}

/// One classification rule: a predicate over the entry and the statements
/// it emits on a match.
struct Rule {
    /// Label used in trace output.
    name: &'static str,
    matches: fn(&OpcodeEntry) -> bool,
    emit: fn(&OpcodeEntry) -> Vec<Stmt>,
}

/// The rule table, in priority order. The trailing catch-all keeps
/// translation total.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            name: "nop",
            matches: |entry| entry.mnemonic == "NOP",
            emit: |_| vec![Stmt::Call(Service::Nop)],
        },
        Rule {
            name: "halt",
            matches: |entry| entry.mnemonic == "HALT",
            emit: |_| vec![Stmt::Call(Service::Halt)],
        },
        Rule {
            // STOP has a 2-byte encoding even though the table describes
            // it as 1 byte.
            name: "stop",
            matches: |entry| entry.mnemonic == "STOP",
            emit: |_| vec![Stmt::Call(Service::Stop), Stmt::AdvancePc(1)],
        },
        Rule {
            name: "di",
            matches: |entry| entry.mnemonic == "DI",
            emit: |_| vec![Stmt::Call(Service::DisableInterrupts)],
        },
        Rule {
            name: "ei",
            matches: |entry| entry.mnemonic == "EI",
            emit: |_| vec![Stmt::Call(Service::EnableInterrupts)],
        },
        Rule {
            name: "ld",
            matches: |entry| entry.mnemonic == "LD" && entry.operands.len() == 2,
            emit: emit_load,
        },
        Rule {
            name: "inc",
            matches: |entry| entry.mnemonic == "INC" && entry.operands.len() == 1,
            emit: |entry| emit_adjust(entry, false),
        },
        Rule {
            name: "dec",
            matches: |entry| entry.mnemonic == "DEC" && entry.operands.len() == 1,
            emit: |entry| emit_adjust(entry, true),
        },
        Rule {
            name: "fallback",
            matches: |_| true,
            emit: unhandled,
        },
    ]
});

/// Translates one opcode entry into its handler.
pub fn translate(entry: &OpcodeEntry) -> Handler {
    let body = RULES
        .iter()
        .find(|rule| (rule.matches)(entry))
        .map_or_else(
            || unhandled(entry),
            |rule| {
                trace!(code = entry.code, rule = rule.name, "rule matched");
                (rule.emit)(entry)
            },
        );
    Handler {
        code: entry.code,
        mnemonic: entry.mnemonic.clone(),
        operands: entry.operands.iter().map(|op| op.name.clone()).collect(),
        body,
    }
}

/// LD sub-cases, tried in order. The pair-destination case keeps the
/// asymmetric roles: a pair-named source is read through indirectly, any
/// other source is assigned to the composite destination directly.
fn emit_load(entry: &OpcodeEntry) -> Vec<Stmt> {
    let [dest, src] = entry.operands.as_slice() else {
        return unhandled(entry);
    };
    if src.name == IMM8 {
        return vec![Stmt::FetchImm8 {
            dest: dest.name.clone(),
        }];
    }
    if src.name == IMM16 {
        return vec![
            Stmt::FetchImm16 {
                dest: dest.name.clone(),
            },
            Stmt::AdvancePc(2),
        ];
    }
    if is_reg8(&src.name) {
        return vec![Stmt::Copy8 {
            dest: dest.name.clone(),
            src: src.name.clone(),
        }];
    }
    if is_pair(&dest.name) && dest.immediate {
        if is_pair(&src.name) {
            return vec![Stmt::ReadThroughPair {
                dest: dest.name.clone(),
                pair: src.name.clone(),
            }];
        }
        return vec![Stmt::SetPair {
            dest: dest.name.clone(),
            src: src.name.clone(),
        }];
    }
    unhandled(entry)
}

/// INC/DEC on a single operand: 8-bit registers go through the generic
/// helper, pairs and SP bump the composite value at a fixed extra cost.
fn emit_adjust(entry: &OpcodeEntry, dec: bool) -> Vec<Stmt> {
    let [operand] = entry.operands.as_slice() else {
        return unhandled(entry);
    };
    if is_reg8(&operand.name) {
        return vec![Stmt::Adjust8 {
            reg: operand.name.clone(),
            dec,
        }];
    }
    if is_wide(&operand.name) {
        return vec![
            Stmt::Adjust16 {
                reg: operand.name.clone(),
                dec,
            },
            Stmt::AddCycles(WIDE_ADJUST_CYCLES),
        ];
    }
    unhandled(entry)
}

/// The explicit, greppable marker for patterns outside the rule set.
fn unhandled(entry: &OpcodeEntry) -> Vec<Stmt> {
    vec![Stmt::Unhandled {
        mnemonic: entry.mnemonic.clone(),
        operands: entry.operands.iter().map(|op| op.name.clone()).collect(),
    }]
}

#[cfg(test)]
mod tests;
