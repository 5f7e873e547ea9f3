use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::Expected;

/// Which parse failures a hint applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTarget {
    Expecting(Expected),
    Any,
}

/// One repair hint: when the parser was looking for `target` and tripped on a
/// token matching `token`, report `message` (`{token}` is substituted).
#[derive(Debug)]
pub struct SyntaxHint {
    pub target: HintTarget,
    pub token: Regex,
    pub message: &'static str,
}

impl SyntaxHint {
    fn new(target: HintTarget, pattern: &str, message: &'static str) -> Self {
        Self {
            target,
            token: Regex::new(pattern).expect("hint pattern"),
            message,
        }
    }

    pub fn matches(&self, expected: Expected, token: &str) -> bool {
        let target_matches = match self.target {
            HintTarget::Expecting(target) => target == expected,
            HintTarget::Any => true,
        };
        target_matches && self.token.is_match(token)
    }

    pub fn render(&self, token: &str) -> String {
        self.message.replace("{token}", token)
    }
}

static HINTS: Lazy<Vec<SyntaxHint>> = Lazy::new(|| {
    use HintTarget::{Any, Expecting};

    vec![
        SyntaxHint::new(Expecting(Expected::From), r".+",
            "Found '{token}' but was expecting 'FROM', are you missing a comma?"),
        SyntaxHint::new(Expecting(Expected::Property), r"^\*$",
            "A bare '*' is not supported, qualify it with the collection (ex: foo.*)"),
        SyntaxHint::new(Expecting(Expected::Property), r"(?i)^with$",
            "Found '{token}' but was expecting another property"),
        SyntaxHint::new(Expecting(Expected::Literal), r"(?i)^true$",
            "'true' should be expressed as '1'"),
        SyntaxHint::new(Expecting(Expected::Literal), r"(?i)^false$",
            "'false' should be expressed as '0'"),
        SyntaxHint::new(Any, r"(?i)^where$",
            "Unexpected 'where', it must come before 'unwind', 'group by', or 'with'"),
        SyntaxHint::new(Any, r"(?i)^unwind$",
            "Unexpected 'unwind', it must come before 'group by', or 'with'"),
        SyntaxHint::new(Any, r"(?i)^group$",
            "Unexpected 'group by', it must come before 'with'"),
        SyntaxHint::new(Expecting(Expected::Comparator), r"(?i)^(not|in|like)$",
            "I don't understand '{token}' (comparisons that I understand are =, <>, >, >=, < and <=)"),
    ]
});

pub struct SyntaxHints;

impl SyntaxHints {
    pub fn hints() -> &'static [SyntaxHint] {
        &HINTS
    }

    /// First matching hint wins; otherwise a generic message.
    pub fn message_for(expected: Expected, token: &str) -> String {
        if token.is_empty() {
            return format!("Unexpected end of query, expecting {}", expected);
        }

        Self::hints()
            .iter()
            .find(|hint| hint.matches(expected, token))
            .map(|hint| hint.render(token))
            .unwrap_or_else(|| format!("I don't understand '{}'", token))
    }
}
