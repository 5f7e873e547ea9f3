use crate::{catalog::ValueKind, parser::ast::Literal};

pub struct LiteralResolver;

impl LiteralResolver {
    /// Rewrite a WHERE literal into the pipeline syntax for the property's type.
    pub fn coerce(kind: ValueKind, literal: &Literal) -> String {
        match kind {
            ValueKind::DateTime => format!("new Date({})", literal.raw),
            ValueKind::Boolean if literal.value() == "1" => "true".to_string(),
            ValueKind::Boolean => "false".to_string(),
            ValueKind::ObjectId => format!("ObjectId({})", literal.raw),
            ValueKind::Other => literal.raw.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{catalog::ValueKind, parser::{analyzer::LiteralResolver, ast::Literal}};

    #[test]
    pub fn test_coerce_date() {
        assert_eq!(
            LiteralResolver::coerce(ValueKind::DateTime, &Literal::text("'2013-04-11'")),
            "new Date('2013-04-11')"
        );
    }

    #[test]
    pub fn test_coerce_boolean() {
        assert_eq!(LiteralResolver::coerce(ValueKind::Boolean, &Literal::number("1")), "true");
        assert_eq!(LiteralResolver::coerce(ValueKind::Boolean, &Literal::text("'1'")), "true");
        assert_eq!(LiteralResolver::coerce(ValueKind::Boolean, &Literal::number("0")), "false");
        assert_eq!(LiteralResolver::coerce(ValueKind::Boolean, &Literal::number("2")), "false");
    }

    #[test]
    pub fn test_coerce_object_id() {
        assert_eq!(
            LiteralResolver::coerce(ValueKind::ObjectId, &Literal::text("\"5150a1199a1d1c1a3c0ef95b\"")),
            "ObjectId(\"5150a1199a1d1c1a3c0ef95b\")"
        );
    }

    #[test]
    pub fn test_other_types_pass_through() {
        assert_eq!(LiteralResolver::coerce(ValueKind::Other, &Literal::text("'bob'")), "'bob'");
        assert_eq!(LiteralResolver::coerce(ValueKind::Other, &Literal::number("-3.5")), "-3.5");
    }
}
