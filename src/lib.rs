pub mod backend {
    pub mod asm;
    pub mod compiler;
}

pub mod frontend {
    pub mod parser;
}

pub mod driver;

pub mod test_helpers;

use frontend::parser::{ParseError, IR};

/// Translates Brainfuck source into a complete MIPS program.
///
/// Bytes other than the eight commands are ignored. Nothing is returned on a
/// bracket mismatch; the first mismatch found is reported.
pub fn compile_source(source: &[u8]) -> Result<String, ParseError> {
    let ir = IR::parse(&source.into())?;

    Ok(backend::compiler::compile(ir))
}
