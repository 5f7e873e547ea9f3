use crate::parser::WordComparer;

#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub from: WordComparer,
    pub r#where: WordComparer,
    pub unwind: WordComparer,
    pub group_by: WordComparer,
    pub having: WordComparer,
    pub with: WordComparer,
    pub on: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub equal: WordComparer,
    pub not_equal_b: WordComparer, // basic
    pub not_equal_c: WordComparer, // c
    pub greater_than: WordComparer,
    pub greater_than_or_equal: WordComparer,
    pub less_than: WordComparer,
    pub less_than_or_equal: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_postfix().with_eof(),
            from: WordComparer::new("FROM").with_whitespace_postfix().with_eof(),
            r#where: WordComparer::new("WHERE").with_whitespace_postfix().with_eof(),
            unwind: WordComparer::new("UNWIND").with_whitespace_postfix().with_eof(),
            group_by: WordComparer::new("GROUP BY").with_whitespace_postfix().with_eof(),
            having: WordComparer::new("HAVING").with_whitespace_postfix().with_eof(),
            with: WordComparer::new("WITH").with_whitespace_postfix().with_eof(),
            on: WordComparer::new("ON").with_whitespace_postfix(),
            and: WordComparer::new("AND").with_whitespace_postfix(),
            or: WordComparer::new("OR").with_whitespace_postfix(),
            equal: WordComparer::new("="),
            not_equal_b: WordComparer::new("<>"),
            not_equal_c: WordComparer::new("!="),
            greater_than: WordComparer::new(">"),
            greater_than_or_equal: WordComparer::new(">="),
            less_than: WordComparer::new("<"),
            less_than_or_equal: WordComparer::new("<="),
        }
    }
}
