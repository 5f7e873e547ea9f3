use crate::parser::{analyzer::{Admission, AnalysisContext, IndexAdmission, LiteralResolver}, ast::Query};

pub struct WhereResolver;

impl WhereResolver {
    pub fn resolve(query: &mut Query, ctx: &mut AnalysisContext) {
        let collection = ctx.collection;
        let Query { properties, where_clauses, .. } = query;
        if where_clauses.is_empty() {
            return;
        }

        let mut index_found = false;
        for clause in where_clauses.iter_mut() {
            let reference = &mut properties[clause.property];
            let invalid = format!("The 'where' property ({}) is invalid.", reference.path);

            if !reference.belongs_to(&collection.name) {
                ctx.errors.add_error(invalid, Some(reference.position));
                return;
            }

            let (Some(short), Some(property)) = (
                collection.resolve_short(&reference.path),
                collection.resolve_property(&reference.path),
            ) else {
                ctx.errors.add_error(invalid, Some(reference.position));
                return;
            };

            clause.comparison.coerced = Some(LiteralResolver::coerce(property.value_kind(), &clause.comparison.literal));
            index_found |= IndexAdmission::uses_index(collection, &short);
            reference.resolved = Some(short);
        }

        if index_found {
            return;
        }

        for clause in where_clauses.iter() {
            let reference = &properties[clause.property];
            let short = reference.resolved_name().unwrap_or_default();
            match IndexAdmission::admit(ctx, short) {
                Admission::Indexed => {},
                Admission::Warn => ctx.errors.add_warning(
                    format!("Where clause ({}) doesn't use an index. Proceed with caution", reference.path),
                    None,
                ),
                Admission::Deny => ctx.errors.add_error(
                    format!("Where clause ({}) doesn't use an index. Collection too large to run un-indexed", reference.path),
                    None,
                ),
            }
        }
    }
}
