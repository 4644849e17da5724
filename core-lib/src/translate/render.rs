//! Serializer from handlers to dispatch-case text blocks.
//!
//! Output targets the emulator's register/memory primitives (`read8`,
//! `setBC`, `INC_r`, …). Rendering is a pure function of the handler, so
//! identical input always produces byte-identical text.
use std::fmt::Write;

use super::ir::Stmt;
use super::Handler;

/// Renders one handler as a complete block: header comment, case label,
/// one indented line per statement, `break;`, and a trailing blank line.
pub fn render(handler: &Handler) -> String {
    let mut block = String::new();
    let _ = write!(block, "// 0x{:02X}: {}", handler.code, handler.mnemonic);
    if !handler.operands.is_empty() {
        let _ = write!(block, " {}", handler.operands.join(","));
    }
    block.push('\n');
    let _ = writeln!(block, "case 0x{:02X}:", handler.code);
    for stmt in &handler.body {
        let _ = writeln!(block, "    {}", stmt_text(stmt));
    }
    block.push_str("    break;\n\n");
    block
}

fn stmt_text(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Call(service) => format!("{}();", service.symbol()),
        Stmt::Copy8 { dest, src } => format!("{dest} = {src};"),
        Stmt::FetchImm8 { dest } => format!("{dest} = read8(mmu, PC++);"),
        Stmt::FetchImm16 { dest } => format!("set{dest}(read16(mmu, PC));"),
        Stmt::AdvancePc(1) => "PC++;".to_owned(),
        Stmt::AdvancePc(n) => format!("PC += {n};"),
        Stmt::ReadThroughPair { dest, pair } => format!("{dest} = read8(mmu, get{pair}());"),
        Stmt::SetPair { dest, src } => format!("set{dest}({src});"),
        Stmt::Adjust8 { reg, dec: false } => format!("INC_r({reg});"),
        Stmt::Adjust8 { reg, dec: true } => format!("DEC_r({reg});"),
        Stmt::Adjust16 { reg, dec } if reg == "SP" => {
            format!("SP{};", if *dec { "--" } else { "++" })
        }
        Stmt::Adjust16 { reg, dec: false } => format!("set{reg}(get{reg}() + 1);"),
        Stmt::Adjust16 { reg, dec: true } => format!("set{reg}(get{reg}() - 1);"),
        Stmt::AddCycles(n) => format!("cycles += {n};"),
        Stmt::Unhandled { mnemonic, operands } => {
            if operands.is_empty() {
                format!("// TODO: {mnemonic}")
            } else {
                format!("// TODO: {mnemonic} {}", operands.join(","))
            }
        }
    }
}
