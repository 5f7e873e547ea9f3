use crate::parser::{analyzer::AnalysisContext, ast::Query};

pub struct UnwindResolver;

impl UnwindResolver {
    /// An unresolvable unwind only warns; the stage is then left out.
    pub fn resolve(query: &mut Query, ctx: &mut AnalysisContext) {
        let Some(unwind) = query.unwind else {
            return;
        };

        let reference = &mut query.properties[unwind.property];
        match ctx.collection.resolve_short(&reference.path) {
            Some(short) => reference.resolved = Some(short),
            None => ctx.errors.add_warning(
                format!("The 'unwind' property ({}) is invalid.", reference.path),
                Some(reference.position),
            ),
        }
    }
}
