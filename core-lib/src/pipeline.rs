//! Single-pass generation driver.
//!
//! Consumes a loaded [`InstructionSet`] entry by entry, in ascending code
//! order, and streams one rendered block per opcode to the output writer.
//! Both opcode spaces are emitted, each under its own section comment, and
//! a trailing summary line reports the totals.
use std::io::{self, Write};

use tracing::info;

use crate::table::InstructionSet;
use crate::translate::{render, translate};

/// Per-table block counts for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub unprefixed: usize,
    pub cbprefixed: usize,
}

impl GenerationSummary {
    pub const fn total(&self) -> usize {
        self.unprefixed + self.cbprefixed
    }
}

/// Writes every handler block for both opcode spaces.
pub fn write_handlers<W: Write>(
    set: &InstructionSet,
    out: &mut W,
) -> io::Result<GenerationSummary> {
    writeln!(out, "// unprefixed opcode handlers")?;
    writeln!(out)?;
    for entry in &set.unprefixed {
        out.write_all(render(&translate(entry)).as_bytes())?;
    }

    writeln!(out, "// CB-prefixed opcode handlers (dispatched on the byte after 0xCB)")?;
    writeln!(out)?;
    for entry in &set.cbprefixed {
        out.write_all(render(&translate(entry)).as_bytes())?;
    }

    let summary = GenerationSummary {
        unprefixed: set.unprefixed.len(),
        cbprefixed: set.cbprefixed.len(),
    };
    writeln!(
        out,
        "// generated {} opcode handlers ({} unprefixed, {} CB-prefixed)",
        summary.total(),
        summary.unprefixed,
        summary.cbprefixed
    )?;
    info!(
        unprefixed = summary.unprefixed,
        cbprefixed = summary.cbprefixed,
        "generation complete"
    );
    Ok(summary)
}
