use crate::{diagnostics::SourcePosition, parser::{ast::TextCollector, Expected, ParseError, QueryParser}};

/// The collection named after `FROM` (or `WITH`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionName {
    pub name: String,
    pub position: SourcePosition,
}

impl CollectionName {
    /// Parse a bare collection name at the cursor.
    pub fn parse_name(parser: &mut QueryParser) -> Result<CollectionName, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        let name = TextCollector::collect(parser);
        if name.is_empty() {
            return ParseError::new(Expected::Collection, pivot, parser).err();
        }

        Ok(CollectionName { name, position: parser.source_position(pivot) })
    }

    /// Parse `FROM <collection>`.
    pub fn parse(parser: &mut QueryParser) -> Result<CollectionName, ParseError> {
        if !parser.comparers.from.compare(parser) {
            return ParseError::new(Expected::From, parser.position, parser).err();
        }
        parser.jump(parser.comparers.from.length);

        let collection = CollectionName::parse_name(parser)?;

        if !parser.check_next_phase() {
            return ParseError::new(Expected::Clause, parser.position, parser).err();
        }

        Ok(collection)
    }
}
