use crate::parser::{ast::{Comparison, PropertyId, PropertyParser, PropertyTable}, Expected, ParseError, QueryParser};

/// How a predicate joins the one before it. The first predicate carries `And`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanConnector {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub connector: BooleanConnector,
    pub property: PropertyId,
    pub comparison: Comparison,
}

pub struct WhereParser;

impl WhereParser {
    pub fn parse(parser: &mut QueryParser, properties: &mut PropertyTable) -> Result<Vec<WhereClause>, ParseError> {
        if !parser.comparers.r#where.compare(parser) {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }
        parser.jump(parser.comparers.r#where.length);

        let mut clauses = vec![];
        let mut connector = BooleanConnector::And;
        loop {
            let property = PropertyParser::parse(parser, properties)?;
            let comparison = Comparison::parse(parser)?;
            clauses.push(WhereClause { connector, property, comparison });

            if parser.check_next_phase() {
                return Ok(clauses);
            }

            if parser.comparers.and.compare(parser) {
                connector = BooleanConnector::And;
                parser.jump(parser.comparers.and.length);
            } else if parser.comparers.or.compare(parser) {
                connector = BooleanConnector::Or;
                parser.jump(parser.comparers.or.length);
            } else {
                return ParseError::new(Expected::Clause, parser.position, parser).err();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{BooleanConnector, ComparatorOp, PropertyTable, WhereParser}, Expected, Phase, QueryParser};

    #[test]
    pub fn test_where() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("WHERE foo.DateCreated > '2013-04-11'");
        assert!(parser.check_next_phase());

        let result = WhereParser::parse(&mut parser, &mut table).expect("Failed to parse where");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].comparison.op, ComparatorOp::Gt);
        assert_eq!(table[result[0].property].path, "DateCreated");
        assert_eq!(parser.phase, Phase::EOF);
    }

    #[test]
    pub fn test_where_connectors() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("WHERE foo.a = 1 AND foo.b <> 'x' or foo.c >= 2 GROUP BY foo.a");
        assert!(parser.check_next_phase());

        let result = WhereParser::parse(&mut parser, &mut table).expect("Failed to parse where");

        let connectors: Vec<BooleanConnector> = result.iter().map(|c| c.connector).collect();
        assert_eq!(connectors, vec![BooleanConnector::And, BooleanConnector::And, BooleanConnector::Or]);
        assert_eq!(parser.phase, Phase::Aggregates);
    }

    #[test]
    pub fn test_where_repeated() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("WHERE foo.a = 1 WHERE foo.b = 2");
        assert!(parser.check_next_phase());

        let err = WhereParser::parse(&mut parser, &mut table).expect_err("second WHERE");

        assert_eq!(err.expected, Expected::Clause);
        assert_eq!(err.start, 16);
        assert_eq!(err.message(), "Unexpected 'where', it must come before 'unwind', 'group by', or 'with'");
    }

    #[test]
    pub fn test_where_boolean_literal() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("WHERE foo.IsActive = true");
        assert!(parser.check_next_phase());

        let err = WhereParser::parse(&mut parser, &mut table).expect_err("bare true");

        assert_eq!(err.message(), "'true' should be expressed as '1'");
    }

    #[test]
    pub fn test_where_wrong() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("WHETE foo.a > 35");
        parser.phase = Phase::Criteria;

        let err = WhereParser::parse(&mut parser, &mut table).expect_err("misspelled keyword");

        assert_eq!(err.token, "WHETE");
        assert_eq!(err.start, 0);
    }
}
