use crate::parser::{ast::{ComparatorOp, Literal}, ParseError, QueryParser};

/// `<op> <literal>`, the right-hand side shared by WHERE and HAVING.
///
/// The left-hand side is supplied when rendering: the short path for a WHERE
/// predicate, the accumulator alias for HAVING.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub op: ComparatorOp,
    pub literal: Literal,
    /// Literal after coercion to the property's declared type
    pub coerced: Option<String>,
}

impl Comparison {
    pub fn new(op: ComparatorOp, literal: Literal) -> Self {
        Self { op, literal, coerced: None }
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Comparison, ParseError> {
        let op = ComparatorOp::parse(parser)?;
        let literal = Literal::parse(parser)?;
        Ok(Comparison::new(op, literal))
    }

    pub fn value(&self) -> &str {
        self.coerced.as_deref().unwrap_or(&self.literal.raw)
    }

    pub fn render(&self, left: &str) -> String {
        match self.op.operator() {
            None => format!("{{'{}':{}}}", left, self.value()),
            Some(operator) => format!("{{'{}':{{{}:{}}}}}", left, operator, self.value()),
        }
    }
}
