use std::fmt;

use crate::parser::{Expected, ParseError, QueryParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparatorOp {
    pub fn parse(parser: &mut QueryParser) -> Result<ComparatorOp, ParseError> {
        parser.next_non_whitespace();
        let comparers = &parser.comparers;

        // longest symbols first
        let candidates = [
            (&comparers.less_than_or_equal, ComparatorOp::LtEq),
            (&comparers.greater_than_or_equal, ComparatorOp::GtEq),
            (&comparers.not_equal_b, ComparatorOp::NotEq),
            (&comparers.not_equal_c, ComparatorOp::NotEq),
            (&comparers.equal, ComparatorOp::Eq),
            (&comparers.less_than, ComparatorOp::Lt),
            (&comparers.greater_than, ComparatorOp::Gt),
        ];

        let found = candidates.iter()
            .find(|(comparer, _)| comparer.compare(parser))
            .map(|(comparer, op)| (comparer.length, *op));

        match found {
            Some((length, op)) => {
                parser.jump(length);
                Ok(op)
            },
            None => ParseError::new(Expected::Comparator, parser.position, parser).err(),
        }
    }

    /// Pipeline operator; equality has none and renders the value bare.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            ComparatorOp::Eq => None,
            ComparatorOp::NotEq => Some("$ne"),
            ComparatorOp::Lt => Some("$lt"),
            ComparatorOp::LtEq => Some("$lte"),
            ComparatorOp::Gt => Some("$gt"),
            ComparatorOp::GtEq => Some("$gte"),
        }
    }
}

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ComparatorOp::Eq => "=",
            ComparatorOp::NotEq => "<>",
            ComparatorOp::Lt => "<",
            ComparatorOp::LtEq => "<=",
            ComparatorOp::Gt => ">",
            ComparatorOp::GtEq => ">=",
        };
        write!(f, "{}", symbol)
    }
}
