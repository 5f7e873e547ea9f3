use crate::parser::{ast::{PropertyId, PropertyTable, TextCollector}, Expected, ParseError, QueryParser};

pub struct PropertyParser;

impl PropertyParser {
    fn is_reference_end(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, ',' | '=' | '<' | '>' | '!')
    }

    /// Parse `collection.segment[.segment...]`, where the last segment may be
    /// `*`, and intern it.
    pub fn parse(parser: &mut QueryParser, properties: &mut PropertyTable) -> Result<PropertyId, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        let collection = TextCollector::collect(parser);
        if collection.is_empty() || parser.current() != '.' {
            return ParseError::new(Expected::Property, pivot, parser).err();
        }

        let mut segments: Vec<String> = vec![];
        while parser.current() == '.' {
            parser.next();
            if parser.current() == '*' {
                parser.next();
                segments.push("*".into());
                break;
            }

            let segment = TextCollector::collect(parser);
            if segment.is_empty() {
                return ParseError::new(Expected::Property, pivot, parser).err();
            }
            segments.push(segment);
        }

        if !parser.eof() && !Self::is_reference_end(parser.current()) {
            return ParseError::new(Expected::Property, pivot, parser).err();
        }

        let position = parser.source_position(pivot);
        Ok(properties.intern(&collection, &segments.join("."), position))
    }
}

#[cfg(test)]
mod tests {
    use crate::{diagnostics::SourcePosition, parser::{ast::{PropertyParser, PropertyTable}, Expected, QueryParser}};

    #[test]
    pub fn test_property() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("  foo.Address.City >");

        let id = PropertyParser::parse(&mut parser, &mut table).expect("Failed to parse property");

        assert_eq!(table[id].collection, "foo");
        assert_eq!(table[id].path, "Address.City");
        assert_eq!(table[id].position, SourcePosition::new(1, 2));
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_property_stops_at_comparator() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("foo.Age>=3");

        let id = PropertyParser::parse(&mut parser, &mut table).expect("Failed to parse property");

        assert_eq!(table[id].path, "Age");
        assert_eq!(parser.current(), '>');
    }

    #[test]
    pub fn test_wildcards() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("foo.*, foo.Address.*");

        let all = PropertyParser::parse(&mut parser, &mut table).expect("Failed to parse wildcard");
        parser.next();
        let nested = PropertyParser::parse(&mut parser, &mut table).expect("Failed to parse wildcard");

        assert_eq!(table[all].path, "*");
        assert_eq!(table[nested].path, "Address.*");
    }

    #[test]
    pub fn test_bare_wildcard_is_rejected() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("* FROM foo");

        let err = PropertyParser::parse(&mut parser, &mut table).expect_err("bare wildcard");

        assert_eq!(err.expected, Expected::Property);
        assert_eq!(err.token, "*");
    }

    #[test]
    pub fn test_missing_path() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("foo FROM foo");

        let err = PropertyParser::parse(&mut parser, &mut table).expect_err("no path");

        assert_eq!(err.token, "foo");
        assert!(table.is_empty());
    }

    #[test]
    pub fn test_dangling_dot() {
        let mut table = PropertyTable::new();
        let mut parser = QueryParser::new("foo.Name. FROM");

        let err = PropertyParser::parse(&mut parser, &mut table).expect_err("dangling dot");

        assert_eq!(err.start, 0);
        assert_eq!(err.token, "foo.Name.");
    }
}
