//! Statement-level intermediate representation for generated handlers.
//!
//! Handler bodies are small trees of statements rather than text, so the
//! classification rules stay testable without string comparison. The
//! serializer in [`super::render`] turns them into dispatch-case blocks.

/// Parameterless CPU service routines invoked by single-call handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Nop,
    Halt,
    Stop,
    DisableInterrupts,
    EnableInterrupts,
}

impl Service {
    /// Symbol the target emulator exposes for this routine.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Halt => "HALT",
            Self::Stop => "STOP",
            Self::DisableInterrupts => "DI",
            Self::EnableInterrupts => "EI",
        }
    }
}

/// One operation in a generated handler body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `NOP();` and friends.
    Call(Service),
    /// `dest = src;` between plain 8-bit registers.
    Copy8 { dest: String, src: String },
    /// `dest = read8(mmu, PC++);`
    FetchImm8 { dest: String },
    /// `setDD(read16(mmu, PC));` — the pointer advance is a separate
    /// [`Stmt::AdvancePc`].
    FetchImm16 { dest: String },
    /// `PC++;` for 1, `PC += n;` otherwise.
    AdvancePc(u16),
    /// `dest = read8(mmu, getSS());`
    ReadThroughPair { dest: String, pair: String },
    /// `setDD(src);`
    SetPair { dest: String, src: String },
    /// `INC_r(r);` / `DEC_r(r);`
    Adjust8 { reg: String, dec: bool },
    /// `setRR(getRR() + 1);` and the decrement mirror; `SP++;` / `SP--;`
    /// for the stack pointer.
    Adjust16 { reg: String, dec: bool },
    /// `cycles += n;`
    AddCycles(u32),
    /// `// TODO: MNEMONIC OPS` marker for patterns no rule covers.
    Unhandled {
        mnemonic: String,
        operands: Vec<String>,
    },
}
