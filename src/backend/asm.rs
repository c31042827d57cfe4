use std::fmt::Display;

/// Bytes reserved for the tape in the data segment.
pub const TAPE_LENGTH: usize = 120_000;

/// Step of the tape pointer register for one cell.
pub const CELL_STRIDE: usize = 4;

const HEADER: &str = ".data\n  bytes:\n  .space 120000\n.text\n.globl main\nmain:\n  li $t1, 0\n";
const FOOTER: &str = "  li $v0, 10\n  syscall";

/// Append-only buffer of MIPS assembly text.
///
/// `$t1` holds the tape offset, `$t2` is scratch for the current cell.
pub struct AsmBuilder {
    text: String,
}

impl AsmBuilder {
    pub fn new() -> Self {
        AsmBuilder {
            text: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// One indented instruction line.
    pub fn emit(&mut self, instr: impl Display) {
        self.text.push_str("  ");
        self.text.push_str(&instr.to_string());
        self.text.push('\n');
    }

    pub fn emit_repeated(&mut self, instr: &str, count: usize) {
        for _ in 0..count {
            self.emit(instr);
        }
    }

    pub fn label(&mut self, name: impl Display) {
        self.text.push_str(&format!("{name}:\n"));
    }

    pub fn blank(&mut self) {
        self.text.push('\n');
    }

    /// Wraps the body in the fixed prologue and exit syscall.
    pub fn build(self) -> String {
        let mut program =
            String::with_capacity(HEADER.len() + self.text.len() + FOOTER.len());
        program.push_str(HEADER);
        program.push_str(&self.text);
        program.push_str(FOOTER);

        program
    }
}

impl Default for AsmBuilder {
    fn default() -> Self {
        Self::new()
    }
}
