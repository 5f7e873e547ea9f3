use crate::parser::{ast::{Comparison, PropertyId, PropertyParser, PropertyTable}, Expected, ParseError, QueryParser};

/// Filter applied to grouped documents; compares against the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HavingClause {
    pub property: PropertyId,
    pub comparison: Comparison,
}

pub struct HavingParser;

impl HavingParser {
    pub fn parse(parser: &mut QueryParser, properties: &mut PropertyTable) -> Result<HavingClause, ParseError> {
        if !parser.comparers.having.compare(parser) {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }
        parser.jump(parser.comparers.having.length);

        let property = PropertyParser::parse(parser, properties)?;
        let comparison = Comparison::parse(parser)?;

        if !parser.check_next_phase() {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }

        Ok(HavingClause { property, comparison })
    }
}
