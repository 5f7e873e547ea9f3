use crate::parser::{ast::{PropertyId, PropertyParser, PropertyTable}, Expected, ParseError, Phase, QueryParser};

pub struct ProjectionParser;

impl ProjectionParser {
    pub fn parse(parser: &mut QueryParser, properties: &mut PropertyTable) -> Result<Vec<PropertyId>, ParseError> {
        parser.next_non_whitespace();
        if !parser.comparers.select.compare(parser) {
            return ParseError::new(Expected::Select, parser.position, parser).err();
        }
        parser.jump(parser.comparers.select.length);

        let mut projection = vec![];
        loop {
            projection.push(PropertyParser::parse(parser, properties)?);

            parser.next_non_whitespace();
            if parser.current() == ',' {
                parser.next();
                continue;
            }

            let pivot = parser.position;
            if parser.check_next_phase() && parser.phase == Phase::Collection {
                return Ok(projection);
            }
            return ParseError::new(Expected::From, pivot, parser).err();
        }
    }
}
