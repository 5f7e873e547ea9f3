use crate::parser::{ast::TextCollector, Expected, ParseError, QueryParser, WordComparer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Text,
}

/// A literal as written in the query, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub raw: String,
}

impl Literal {
    pub fn number(raw: &str) -> Self {
        Self { kind: LiteralKind::Number, raw: raw.to_string() }
    }

    pub fn text(raw: &str) -> Self {
        Self { kind: LiteralKind::Text, raw: raw.to_string() }
    }

    /// The literal without its surrounding quotes.
    pub fn value(&self) -> &str {
        match self.kind {
            LiteralKind::Number => &self.raw,
            LiteralKind::Text if self.raw.len() >= 2 => &self.raw[1..self.raw.len() - 1],
            LiteralKind::Text => "",
        }
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        match parser.current() {
            quote @ ('\'' | '"') => Literal::parse_quoted(parser, quote, pivot),
            ch if ch == '-' || ch.is_ascii_digit() => Literal::parse_number(parser, pivot),
            _ => ParseError::new(Expected::Literal, pivot, parser).err(),
        }
    }

    fn parse_quoted(parser: &mut QueryParser, quote: char, pivot: usize) -> Result<Literal, ParseError> {
        parser.next();
        loop {
            if parser.eof() || WordComparer::is_current_break_line(parser) {
                return ParseError::new(Expected::Literal, pivot, parser).err();
            }
            let current = parser.current();
            parser.next();
            if current == quote {
                break;
            }
        }

        Ok(Literal::text(&parser.text_from_pivot(pivot)))
    }

    fn parse_number(parser: &mut QueryParser, pivot: usize) -> Result<Literal, ParseError> {
        if parser.current() == '-' {
            parser.next();
        }

        let integer = TextCollector::collect_while(parser, &|ch| ch.is_ascii_digit());
        if integer.is_empty() {
            return ParseError::new(Expected::Literal, pivot, parser).err();
        }

        if parser.current() == '.' {
            parser.next();
            let fraction = TextCollector::collect_while(parser, &|ch| ch.is_ascii_digit());
            if fraction.is_empty() {
                return ParseError::new(Expected::Literal, pivot, parser).err();
            }
        }

        if !parser.eof() && !WordComparer::is_block_delimiter(parser.current()) {
            return ParseError::new(Expected::Literal, pivot, parser).err();
        }

        Ok(Literal::number(&parser.text_from_pivot(pivot)))
    }
}
