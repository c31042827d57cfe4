use bf2mips::compile_source;
use bf2mips::frontend::parser::{Instruction, ParseError, IR};
use pretty_assertions::assert_eq;

const HEADER: &str =
    ".data\n  bytes:\n  .space 120000\n.text\n.globl main\nmain:\n  li $t1, 0\n";
const FOOTER: &str = "  li $v0, 10\n  syscall";

fn loop_ids(source: &str) -> Vec<Instruction> {
    IR::parse(&source.into())
        .unwrap()
        .0
        .into_iter()
        .filter(|i| {
            matches!(i, Instruction::LoopStart(_) | Instruction::LoopEnd(_))
        })
        .collect()
}

#[test]
fn increment_run() {
    let asm = compile_source(b"+++").unwrap();

    assert_eq!(
        asm,
        format!(
            "{HEADER}  lw $t2, bytes($t1)\n  addi $t2, $t2, 3\n  sw $t2, bytes($t1)\n{FOOTER}"
        )
    );
}

#[test]
fn clear_loop() {
    let asm = compile_source(b"[-]").unwrap();

    let body = [
        "  lw $t2, bytes($t1)",
        "  beq $t2, $zero, cont_1",
        "func_1:",
        "  lw $t2, bytes($t1)",
        "  subi $t2, $t2, 1",
        "  sw $t2, bytes($t1)",
        "  lw $t2, bytes($t1)",
        "  bnez $t2, func_1",
        "",
        "cont_1:",
        "",
    ]
    .join("\n");

    assert_eq!(asm, format!("{HEADER}{body}{FOOTER}"));
}

#[test]
fn empty_source_is_skeleton_only() {
    assert_eq!(compile_source(b"").unwrap(), format!("{HEADER}{FOOTER}"));
    assert_eq!(
        compile_source(b"just a comment").unwrap(),
        format!("{HEADER}{FOOTER}")
    );
}

#[test]
fn close_before_open() {
    assert_eq!(
        compile_source(b"]["),
        Err(ParseError::UnmatchedClose { position: 0 })
    );
}

#[test]
fn unclosed_outer_loop() {
    assert_eq!(
        compile_source(b"[[]"),
        Err(ParseError::UnmatchedOpen { position: 0 })
    );
}

#[test]
fn loop_ids_pair_up_and_increase() {
    use Instruction as I;

    let ids = loop_ids("+[>[-]<[>+<-]]>[.]");
    assert_eq!(
        ids,
        vec![
            I::LoopStart(1),
            I::LoopStart(2),
            I::LoopEnd(2),
            I::LoopStart(3),
            I::LoopEnd(3),
            I::LoopEnd(1),
            I::LoopStart(4),
            I::LoopEnd(4),
        ]
    );
}

#[test]
fn every_label_defined_once() {
    let asm = compile_source(b"[[-]>[-]<]").unwrap();

    for id in 1..=3 {
        assert_eq!(asm.matches(&format!("\nfunc_{id}:\n")).count(), 1);
        assert_eq!(asm.matches(&format!("\ncont_{id}:\n")).count(), 1);
        assert_eq!(asm.matches(&format!("beq $t2, $zero, cont_{id}\n")).count(), 1);
        assert_eq!(asm.matches(&format!("bnez $t2, func_{id}\n")).count(), 1);
    }
    assert!(!asm.contains("func_4"));
}

#[test]
fn deep_nesting() {
    let depth = 100_000;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    let ir = IR::parse(&source.as_str().into()).unwrap();
    assert_eq!(ir.0.len(), 2 * depth);
    assert_eq!(ir.0[depth - 1], Instruction::LoopStart(depth as u64));
    assert_eq!(ir.0[depth], Instruction::LoopEnd(depth as u64));
}

#[test]
fn hello_world_is_deterministic() {
    let source = b"++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

    let first = compile_source(source).unwrap();
    let second = compile_source(source).unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with(HEADER));
    assert!(first.ends_with(FOOTER));
    assert!(first.contains("  lw $a0, bytes($t1)\n  li $v0, 11\n  syscall\n  syscall\n"));
}
