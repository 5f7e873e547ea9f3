use crate::parser::QueryParser;

pub struct TextCollector;

impl TextCollector {
    pub fn is_name_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }

    /// Collect one name (letters, digits and `_`) from the cursor. May be empty.
    pub fn collect(parser: &mut QueryParser) -> String {
        TextCollector::collect_while(parser, &TextCollector::is_name_char)
    }

    pub fn collect_while(parser: &mut QueryParser, accept: &dyn Fn(char) -> bool) -> String {
        let pivot = parser.position;
        while !parser.eof() && accept(parser.current()) {
            parser.next();
        }
        parser.text_from_pivot(pivot)
    }
}
