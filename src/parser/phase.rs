/// Clauses in the order the grammar accepts them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Projection = 0,
    Collection = 1,
    Criteria = 2,
    Unwind = 3,
    Aggregates = 4,
    Having = 5,
    With = 6,
    EOF = 7,
}
