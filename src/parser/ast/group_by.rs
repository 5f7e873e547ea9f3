use crate::parser::{ast::{PropertyId, PropertyParser, PropertyTable}, Expected, ParseError, QueryParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupByClause {
    /// Property the documents are grouped on
    pub key: PropertyId,
    /// The single aggregate select entry, filled in by the analyzer
    pub aggregation: Option<PropertyId>,
}

pub struct GroupBy;

impl GroupBy {
    pub fn parse(parser: &mut QueryParser, properties: &mut PropertyTable) -> Result<GroupByClause, ParseError> {
        if !parser.comparers.group_by.compare(parser) {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }
        parser.jump(parser.comparers.group_by.length);

        let key = PropertyParser::parse(parser, properties)?;

        if !parser.check_next_phase() {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }

        Ok(GroupByClause { key, aggregation: None })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{GroupBy, PropertyTable}, Expected, Phase, QueryParser};

    #[test]
    pub fn test_group_by() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("GROUP BY foo.Name");
        assert!(parser.check_next_phase());

        let result = GroupBy::parse(&mut parser, &mut table).expect("Failed to parse group by");

        assert_eq!(table[result.key].path, "Name");
        assert!(result.aggregation.is_none());
        assert_eq!(parser.phase, Phase::EOF);
    }

    #[test]
    pub fn test_group_by_then_having() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("GROUP   BY foo.Name\nHAVING foo.COUNT > 5");
        parser.phase = Phase::Aggregates;

        let err = GroupBy::parse(&mut parser, &mut table).expect_err("GROUP BY needs a single space");
        assert_eq!(err.expected, Expected::Clause);

        let mut parser = QueryParser::new("GROUP BY foo.Name\nHAVING foo.COUNT > 5");
        assert!(parser.check_next_phase());
        GroupBy::parse(&mut parser, &mut table).expect("Failed to parse group by");
        assert_eq!(parser.phase, Phase::Having);
    }

    #[test]
    pub fn test_group_by_more_than_one_key() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("GROUP BY foo.Name, foo.DateCreated");
        assert!(parser.check_next_phase());

        let err = GroupBy::parse(&mut parser, &mut table).expect_err("single key only");

        assert_eq!(err.token, ",");
        assert_eq!(err.start, 17);
    }

    #[test]
    pub fn test_where_after_group_by() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("GROUP BY foo.Name WHERE foo.Name = 'x'");
        assert!(parser.check_next_phase());

        let err = GroupBy::parse(&mut parser, &mut table).expect_err("where after group by");

        assert_eq!(err.message(), "Unexpected 'where', it must come before 'unwind', 'group by', or 'with'");
    }
}
