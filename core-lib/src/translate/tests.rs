/// core-lib/src/translate/tests.rs
use proptest::prelude::*;
use test_case::test_case;

use super::{render, translate, Service, Stmt};
use crate::table::{OpcodeEntry, OperandRef};

#[cfg(test)]
use pretty_assertions::assert_eq;

fn entry(code: u8, mnemonic: &str, operands: Vec<OperandRef>) -> OpcodeEntry {
    OpcodeEntry {
        code,
        mnemonic: mnemonic.to_owned(),
        operands,
    }
}

#[test_case("NOP", Service::Nop)]
#[test_case("HALT", Service::Halt)]
#[test_case("DI", Service::DisableInterrupts)]
#[test_case("EI", Service::EnableInterrupts)]
fn bare_service_calls(mnemonic: &str, service: Service) {
    let handler = translate(&entry(0x00, mnemonic, vec![]));
    assert_eq!(handler.body, vec![Stmt::Call(service)]);
}

#[test]
fn stop_advances_past_its_padding_byte() {
    let handler = translate(&entry(0x10, "STOP", vec![OperandRef::direct("n8")]));
    assert_eq!(
        handler.body,
        vec![Stmt::Call(Service::Stop), Stmt::AdvancePc(1)]
    );
}

#[test]
fn ld_fetches_8bit_immediate() {
    let handler = translate(&entry(
        0x06,
        "LD",
        vec![OperandRef::direct("B"), OperandRef::direct("n8")],
    ));
    assert_eq!(
        handler.body,
        vec![Stmt::FetchImm8 {
            dest: "B".to_owned()
        }]
    );
}

#[test]
fn ld_fetches_16bit_immediate_and_advances_twice() {
    let handler = translate(&entry(
        0x01,
        "LD",
        vec![OperandRef::direct("BC"), OperandRef::direct("n16")],
    ));
    assert_eq!(
        handler.body,
        vec![
            Stmt::FetchImm16 {
                dest: "BC".to_owned()
            },
            Stmt::AdvancePc(2),
        ]
    );
}

#[test_case("A", "B")]
#[test_case("H", "L")]
#[test_case("C", "A")]
fn ld_copies_between_8bit_registers(dest: &str, src: &str) {
    let handler = translate(&entry(
        0x78,
        "LD",
        vec![OperandRef::direct(dest), OperandRef::direct(src)],
    ));
    assert_eq!(
        handler.body,
        vec![Stmt::Copy8 {
            dest: dest.to_owned(),
            src: src.to_owned()
        }]
    );
}

#[test]
fn ld_register_copy_wins_over_pair_destination() {
    // LD (BC),A carries an indirect pair destination, but the plain
    // register source is classified first.
    let handler = translate(&entry(
        0x02,
        "LD",
        vec![OperandRef::indirect("BC"), OperandRef::direct("A")],
    ));
    assert_eq!(
        handler.body,
        vec![Stmt::Copy8 {
            dest: "BC".to_owned(),
            src: "A".to_owned()
        }]
    );
}

#[test]
fn ld_direct_pair_dest_reads_through_pair_source() {
    let handler = translate(&entry(
        0x40,
        "LD",
        vec![OperandRef::direct("BC"), OperandRef::direct("DE")],
    ));
    assert_eq!(
        handler.body,
        vec![Stmt::ReadThroughPair {
            dest: "BC".to_owned(),
            pair: "DE".to_owned()
        }]
    );
}

#[test]
fn ld_direct_pair_dest_assigns_other_sources_directly() {
    let handler = translate(&entry(
        0x41,
        "LD",
        vec![OperandRef::direct("HL"), OperandRef::direct("SP")],
    ));
    assert_eq!(
        handler.body,
        vec![Stmt::SetPair {
            dest: "HL".to_owned(),
            src: "SP".to_owned()
        }]
    );
}

#[test]
fn ld_indirect_pair_dest_is_left_unhandled() {
    let handler = translate(&entry(
        0x32,
        "LD",
        vec![OperandRef::indirect("HL"), OperandRef::direct("SP")],
    ));
    assert_eq!(
        handler.body,
        vec![Stmt::Unhandled {
            mnemonic: "LD".to_owned(),
            operands: vec!["HL".to_owned(), "SP".to_owned()],
        }]
    );
}

#[test]
fn ld_with_other_arity_falls_back() {
    let handler = translate(&entry(0xF8, "LD", vec![OperandRef::direct("HL")]));
    assert_eq!(
        handler.body,
        vec![Stmt::Unhandled {
            mnemonic: "LD".to_owned(),
            operands: vec!["HL".to_owned()],
        }]
    );
}

#[test_case("A")]
#[test_case("L")]
fn inc_8bit_uses_generic_helper(reg: &str) {
    let handler = translate(&entry(0x3C, "INC", vec![OperandRef::direct(reg)]));
    assert_eq!(
        handler.body,
        vec![Stmt::Adjust8 {
            reg: reg.to_owned(),
            dec: false
        }]
    );
}

#[test_case("BC")]
#[test_case("HL")]
#[test_case("SP")]
fn inc_wide_bumps_composite_and_charges_cycles(reg: &str) {
    let handler = translate(&entry(0x33, "INC", vec![OperandRef::direct(reg)]));
    assert_eq!(
        handler.body,
        vec![
            Stmt::Adjust16 {
                reg: reg.to_owned(),
                dec: false
            },
            Stmt::AddCycles(4),
        ]
    );
}

#[test]
fn dec_mirrors_inc() {
    let handler = translate(&entry(0x05, "DEC", vec![OperandRef::direct("B")]));
    assert_eq!(
        handler.body,
        vec![Stmt::Adjust8 {
            reg: "B".to_owned(),
            dec: true
        }]
    );

    let handler = translate(&entry(0x3B, "DEC", vec![OperandRef::direct("SP")]));
    assert_eq!(
        handler.body,
        vec![
            Stmt::Adjust16 {
                reg: "SP".to_owned(),
                dec: true
            },
            Stmt::AddCycles(4),
        ]
    );
}

#[test]
fn inc_of_unknown_operand_is_left_unhandled() {
    let handler = translate(&entry(0x34, "INC", vec![OperandRef::direct("AF")]));
    assert_eq!(
        handler.body,
        vec![Stmt::Unhandled {
            mnemonic: "INC".to_owned(),
            operands: vec!["AF".to_owned()],
        }]
    );
}

#[test]
fn uncovered_mnemonic_falls_back_verbatim() {
    let handler = translate(&entry(
        0x37,
        "SWAP",
        vec![OperandRef::direct("B"), OperandRef::indirect("HL")],
    ));
    assert_eq!(
        handler.body,
        vec![Stmt::Unhandled {
            mnemonic: "SWAP".to_owned(),
            operands: vec!["B".to_owned(), "HL".to_owned()],
        }]
    );
}

#[test]
fn handler_carries_header_metadata() {
    let handler = translate(&entry(
        0x01,
        "LD",
        vec![OperandRef::direct("BC"), OperandRef::direct("n16")],
    ));
    assert_eq!(handler.code, 0x01);
    assert_eq!(handler.mnemonic, "LD");
    assert_eq!(handler.operands, vec!["BC".to_owned(), "n16".to_owned()]);
}

#[test]
fn renders_nop_block_exactly() {
    let text = render(&translate(&entry(0x00, "NOP", vec![])));
    assert_eq!(text, "// 0x00: NOP\ncase 0x00:\n    NOP();\n    break;\n\n");
}

#[test]
fn renders_immediate_load_block_exactly() {
    let text = render(&translate(&entry(
        0x01,
        "LD",
        vec![OperandRef::direct("BC"), OperandRef::direct("n16")],
    )));
    assert_eq!(
        text,
        "// 0x01: LD BC,n16\n\
         case 0x01:\n    \
         setBC(read16(mmu, PC));\n    \
         PC += 2;\n    \
         break;\n\n"
    );
}

#[test]
fn renders_stack_pointer_increment_exactly() {
    let text = render(&translate(&entry(0x33, "INC", vec![OperandRef::direct("SP")])));
    assert_eq!(
        text,
        "// 0x33: INC SP\ncase 0x33:\n    SP++;\n    cycles += 4;\n    break;\n\n"
    );
}

#[test]
fn renders_todo_marker_with_operand_list() {
    let text = render(&translate(&entry(
        0xC7,
        "RST",
        vec![OperandRef::direct("$00")],
    )));
    assert!(text.contains("// TODO: RST $00\n"));
}

proptest! {
    /// Every mnemonic/operand combination produces a non-empty body and a
    /// well-formed block. Never a panic.
    #[test]
    fn translation_is_total(
        mnemonic in "[A-Z]{1,6}",
        names in proptest::collection::vec("[A-Za-z0-9]{1,3}", 0..3usize),
    ) {
        let operands = names
            .iter()
            .map(|name| OperandRef::direct(name.as_str()))
            .collect();
        let handler = translate(&entry(0x7F, &mnemonic, operands));
        prop_assert!(!handler.body.is_empty());
        let text = render(&handler);
        prop_assert!(text.contains("case 0x7F:"));
        prop_assert!(text.ends_with("    break;\n\n"));
    }

    /// Translating the same entry twice yields identical text.
    #[test]
    fn translation_is_deterministic(
        mnemonic in "[A-Z]{1,6}",
        names in proptest::collection::vec("[A-Za-z0-9]{1,3}", 0..3usize),
    ) {
        let operands: Vec<OperandRef> = names
            .iter()
            .map(|name| OperandRef::direct(name.as_str()))
            .collect();
        let probe = entry(0x42, &mnemonic, operands);
        prop_assert_eq!(render(&translate(&probe)), render(&translate(&probe)));
    }

    /// Mnemonics outside the rule set surface verbatim in the marker.
    #[test]
    fn fallback_names_the_pattern_verbatim(
        mnemonic in "X[A-Z]{1,5}",
        names in proptest::collection::vec("[A-Za-z0-9]{1,3}", 1..3usize),
    ) {
        let operands: Vec<OperandRef> = names
            .iter()
            .map(|name| OperandRef::direct(name.as_str()))
            .collect();
        let handler = translate(&entry(0x00, &mnemonic, operands));
        let text = render(&handler);
        prop_assert_eq!(
            handler.body,
            vec![Stmt::Unhandled {
                mnemonic: mnemonic.clone(),
                operands: names.clone(),
            }]
        );
        prop_assert!(
            text.contains(&format!("// TODO: {} {}", mnemonic, names.join(","))),
            "fallback marker missing for {} {}",
            mnemonic,
            names.join(",")
        );
    }
}
