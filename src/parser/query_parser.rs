use crate::{diagnostics::SourcePosition, parser::{Phase, QueryComparers}};

#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub phase: Phase,

    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            comparers: QueryComparers::new(),
            ..Default::default()
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        self.peek(0)
    }

    pub fn peek(&self, ahead: usize) -> char {
        self.text_v.get(self.position + ahead).copied().unwrap_or('\0')
    }

    pub fn next(&mut self) {
        if self.position < self.length {
            self.position += 1;
        }
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// The word starting at `pivot`: everything up to the next whitespace or
    /// comma, or the single punctuation character found there.
    pub fn token_at(&self, pivot: usize) -> String {
        let mut end = pivot;
        while end < self.length && !self.text_v[end].is_whitespace() && self.text_v[end] != ',' {
            end += 1;
        }
        if end == pivot && pivot < self.length && !self.text_v[pivot].is_whitespace() {
            end += 1;
        }
        self.text_from_range(pivot, end)
    }

    /// Line (1-based) and character (0-based) of a char offset.
    pub fn source_position(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.length);
        let mut line = 1;
        let mut line_start = 0;
        for (i, ch) in self.text_v[..offset].iter().enumerate() {
            if *ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        SourcePosition::new(line, offset - line_start)
    }

    /// Skip whitespace and move to the clause whose keyword sits at the cursor.
    ///
    /// Clauses only move forward: a keyword for a clause that should already
    /// have appeared is left for the caller to report.
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.eof() {
            self.phase = Phase::EOF;
            return true;
        }

        if self.phase < Phase::With && self.comparers.with.compare(self) {
            self.phase = Phase::With;
            return true;
        }

        if self.phase < Phase::Having && self.comparers.having.compare(self) {
            self.phase = Phase::Having;
            return true;
        }

        if self.phase < Phase::Aggregates && self.comparers.group_by.compare(self) {
            self.phase = Phase::Aggregates;
            return true;
        }

        if self.phase < Phase::Unwind && self.comparers.unwind.compare(self) {
            self.phase = Phase::Unwind;
            return true;
        }

        if self.phase < Phase::Criteria && self.comparers.r#where.compare(self) {
            self.phase = Phase::Criteria;
            return true;
        }

        if self.phase < Phase::Collection && self.comparers.from.compare(self) {
            self.phase = Phase::Collection;
            return true;
        }

        false
    }
}
