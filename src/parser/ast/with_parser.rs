use crate::parser::{ast::{CollectionName, PropertyId, PropertyParser, PropertyTable}, Expected, ParseError, QueryParser};

/// `WITH <collection> ON <property>`: rows of the primary collection are
/// joined with `collection` by a plugin, matching on `join_property`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithClause {
    pub collection: CollectionName,
    pub join_property: PropertyId,
    /// Select entries naming the joined collection, gathered by the analyzer
    pub selected_columns: Vec<PropertyId>,
}

pub struct WithParser;

impl WithParser {
    pub fn parse(parser: &mut QueryParser, properties: &mut PropertyTable) -> Result<WithClause, ParseError> {
        if !parser.comparers.with.compare(parser) {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }
        parser.jump(parser.comparers.with.length);

        let collection = CollectionName::parse_name(parser)?;

        parser.next_non_whitespace();
        if !parser.comparers.on.compare(parser) {
            return ParseError::new(Expected::On, parser.position, parser).err();
        }
        parser.jump(parser.comparers.on.length);

        let join_property = PropertyParser::parse(parser, properties)?;

        if !parser.check_next_phase() {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }

        Ok(WithClause { collection, join_property, selected_columns: vec![] })
    }
}
