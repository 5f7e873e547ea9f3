use crate::parser::{analyzer::AnalysisContext, ast::Query};

pub struct WithResolver;

impl WithResolver {
    /// Hand the joined collection's select entries to the clause and resolve
    /// the join property against the primary collection.
    pub fn resolve(query: &mut Query, ctx: &mut AnalysisContext) {
        let Query { properties, select, with, .. } = query;
        let Some(with) = with.as_mut() else {
            return;
        };

        with.selected_columns = select.iter()
            .copied()
            .filter(|id| properties[*id].belongs_to(&with.collection.name))
            .collect();

        let join = &mut properties[with.join_property];
        let Some(short) = ctx.collection.resolve_short(&join.path) else {
            ctx.errors.add_error(format!("The 'with' property ({}) is invalid.", join.path), Some(join.position));
            return;
        };

        if join.alias.is_none() {
            join.alias = Some(short.clone());
        }
        join.resolved = Some(short);
    }
}
