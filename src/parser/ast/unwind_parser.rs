use crate::parser::{ast::{PropertyId, PropertyParser, PropertyTable}, Expected, ParseError, QueryParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwindClause {
    pub property: PropertyId,
}

pub struct UnwindParser;

impl UnwindParser {
    pub fn parse(parser: &mut QueryParser, properties: &mut PropertyTable) -> Result<UnwindClause, ParseError> {
        if !parser.comparers.unwind.compare(parser) {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }
        parser.jump(parser.comparers.unwind.length);

        let property = PropertyParser::parse(parser, properties)?;

        if !parser.check_next_phase() {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }

        Ok(UnwindClause { property })
    }
}
