// src/notation/classify.rs

/// How much work a cell needs. Parsing semantics are the same for every shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellShape {
    /// Bare numbers only: no `-`, no `(`.
    Simple,
    Complex(Complexity),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    /// Numbers and ranges, no parenthetical.
    Ranged,
    /// At least one token carries a parenthetical.
    Annotated,
}

impl CellShape {
    pub fn is_simple(self) -> bool {
        matches!(self, CellShape::Simple)
    }
}

pub fn classify(cell: &str) -> CellShape {
    let cell = cell.trim();
    if cell.contains('(') {
        CellShape::Complex(Complexity::Annotated)
    } else if cell.contains('-') {
        CellShape::Complex(Complexity::Ranged)
    } else {
        CellShape::Simple
    }
}
