use derive_more::TryFrom;
use itertools::Itertools;
use log::debug;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[repr(u8)]
enum Command {
    Movr = b'>',
    Movl = b'<',
    Incr = b'+',
    Decr = b'-',
    Writ = b'.',
    Read = b',',
    JmpF = b'[',
    JmpB = b']',
}

/// Recognized commands of a source file, each paired with its byte offset.
pub struct Program {
    instrs: Vec<(usize, Command)>,
}

impl From<&[u8]> for Program {
    fn from(value: &[u8]) -> Self {
        let instrs = value
            .iter()
            .enumerate()
            .filter_map(|(pos, &c)| Command::try_from(c).ok().map(|c| (pos, c)))
            .collect();

        Program { instrs }
    }
}

impl From<&str> for Program {
    fn from(value: &str) -> Self {
        value.as_bytes().into()
    }
}

pub type LoopId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    IncPtr(usize),
    DecPtr(usize),
    Inc(usize),
    Dec(usize),
    Output(usize),
    Input(usize),
    LoopStart(LoopId),
    LoopEnd(LoopId),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unmatched closing bracket at position: {position}")]
    UnmatchedClose { position: usize },
    #[error("unmatched opening bracket at position: {position}")]
    UnmatchedOpen { position: usize },
}

/// Hands out loop ids and matches brackets. Ids start at 1 and are never
/// reused, so sibling loops get distinct labels.
struct LoopStack {
    next_id: LoopId,
    open: Vec<(LoopId, usize)>,
}

impl LoopStack {
    fn new() -> Self {
        LoopStack {
            next_id: 1,
            open: Vec::new(),
        }
    }

    fn open(&mut self, position: usize) -> LoopId {
        let id = self.next_id;
        self.next_id += 1;
        self.open.push((id, position));

        id
    }

    fn close(&mut self, position: usize) -> Result<LoopId, ParseError> {
        self.open
            .pop()
            .map(|(id, _)| id)
            .ok_or(ParseError::UnmatchedClose { position })
    }

    fn finish(self) -> Result<(), ParseError> {
        match self.open.last() {
            Some(&(_, position)) => Err(ParseError::UnmatchedOpen { position }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct IR(pub Vec<Instruction>);

impl IR {
    pub fn parse(program: &Program) -> Result<Self, ParseError> {
        use Command as C;
        use Instruction as I;

        let mut loops = LoopStack::new();
        let mut parsed = Vec::new();

        let runs = program.instrs.iter().dedup_by_with_count(|l, r| {
            l.1 == r.1 && !matches!(l.1, C::JmpF | C::JmpB)
        });

        for (count, &(pos, code)) in runs {
            let instr = match code {
                C::Movr => I::IncPtr(count),
                C::Movl => I::DecPtr(count),
                C::Incr => I::Inc(count),
                C::Decr => I::Dec(count),
                C::Writ => I::Output(count),
                C::Read => I::Input(count),
                C::JmpF => I::LoopStart(loops.open(pos)),
                C::JmpB => I::LoopEnd(loops.close(pos)?),
            };
            parsed.push(instr);
        }

        loops.finish()?;

        debug!(
            "folded {} commands into {} instructions",
            program.instrs.len(),
            parsed.len()
        );

        Ok(IR(parsed))
    }
}
