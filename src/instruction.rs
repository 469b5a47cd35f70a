/// A single movement command decoded from an instruction line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `L`
    Left,
    /// `R`
    Right,
    /// `F`
    Forward,
    /// Any other character; has no effect
    Ignore(char),
}

impl From<char> for Instruction {
    fn from(c: char) -> Self {
        match c {
            'L' => Instruction::Left,
            'R' => Instruction::Right,
            'F' => Instruction::Forward,
            other => Instruction::Ignore(other),
        }
    }
}

impl Instruction {
    /// Character this instruction was decoded from
    pub fn symbol(self) -> char {
        match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Forward => 'F',
            Instruction::Ignore(c) => c,
        }
    }
}

/// Decode an instruction line character by character
pub fn decode(line: &str) -> impl Iterator<Item = Instruction> + '_ {
    line.chars().map(Instruction::from)
}
