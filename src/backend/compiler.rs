use log::debug;

use crate::frontend::parser::{Instruction, LoopId, IR};

use super::asm::{AsmBuilder, CELL_STRIDE};

// tape pointer = $t1, cell scratch = $t2

fn emit_add(a: &mut AsmBuilder, amount: usize) {
    a.emit("lw $t2, bytes($t1)");
    a.emit(format_args!("addi $t2, $t2, {amount}"));
    a.emit("sw $t2, bytes($t1)");
}

fn emit_sub(a: &mut AsmBuilder, amount: usize) {
    a.emit("lw $t2, bytes($t1)");
    a.emit(format_args!("subi $t2, $t2, {amount}"));
    a.emit("sw $t2, bytes($t1)");
}

fn emit_shift_right(a: &mut AsmBuilder, amount: usize) {
    a.emit(format_args!("addi $t1, $t1, {}", amount * CELL_STRIDE));
}

fn emit_shift_left(a: &mut AsmBuilder, amount: usize) {
    a.emit(format_args!("subi $t1, $t1, {}", amount * CELL_STRIDE));
}

// the cell is loaded once and printed `count` times
fn emit_write(a: &mut AsmBuilder, count: usize) {
    a.emit("lw $a0, bytes($t1)");
    a.emit("li $v0, 11");
    a.emit_repeated("syscall", count);
}

// only the last byte read is stored
fn emit_read(a: &mut AsmBuilder, count: usize) {
    a.emit("li $v0, 12");
    a.emit_repeated("syscall", count);
    a.emit("sw $v0, bytes($t1)");
}

fn emit_loop_start(a: &mut AsmBuilder, id: LoopId) {
    a.emit("lw $t2, bytes($t1)");
    a.emit(format_args!("beq $t2, $zero, cont_{id}"));
    a.label(format_args!("func_{id}"));
}

fn emit_loop_end(a: &mut AsmBuilder, id: LoopId) {
    a.emit("lw $t2, bytes($t1)");
    a.emit(format_args!("bnez $t2, func_{id}"));
    a.blank();
    a.label(format_args!("cont_{id}"));
}

pub fn emit_instruction(a: &mut AsmBuilder, instr: Instruction) {
    use Instruction as I;
    match instr {
        I::IncPtr(v) => emit_shift_right(a, v),
        I::DecPtr(v) => emit_shift_left(a, v),
        I::Inc(v) => emit_add(a, v),
        I::Dec(v) => emit_sub(a, v),
        I::Output(v) => emit_write(a, v),
        I::Input(v) => emit_read(a, v),
        I::LoopStart(id) => emit_loop_start(a, id),
        I::LoopEnd(id) => emit_loop_end(a, id),
    }
}

pub fn compile(ir: IR) -> String {
    let mut a = AsmBuilder::new();

    for instr in ir.0 {
        emit_instruction(&mut a, instr);
    }

    debug!("emitted {} bytes of program body", a.len());

    a.build()
}
