use crate::parser::{analyzer::AnalysisContext, ast::Query};

pub struct HavingResolver;

impl HavingResolver {
    /// The literal compares against an accumulated number and is never coerced.
    pub fn resolve(query: &mut Query, ctx: &mut AnalysisContext) {
        let Some(having) = query.having.as_mut() else {
            return;
        };
        let reference = &query.properties[having.property];

        if query.group_by.is_none() {
            ctx.errors.add_warning("The 'having' clause is ignored without a 'group by'", Some(reference.position));
        }

        if !reference.belongs_to(&ctx.collection.name) {
            ctx.errors.add_error(
                format!("The 'having' property ({}) is invalid.", reference.path),
                Some(reference.position),
            );
            return;
        }

        having.comparison.coerced = Some(having.comparison.literal.raw.clone());
    }
}
