use crate::parser::{analyzer::AnalysisContext, ast::{PropertyReference, Query}};

pub struct SelectResolver;

impl SelectResolver {
    /// Resolve the select entries of the target collection.
    ///
    /// Wildcards are replaced in place by the leaves they expand to. Entries
    /// that cannot be resolved are dropped with a warning. Aggregates and
    /// entries of other collections are left for the group-by and with checks.
    pub fn resolve(query: &mut Query, ctx: &mut AnalysisContext) {
        let collection = ctx.collection;
        let mut select = Vec::with_capacity(query.select.len());

        for id in std::mem::take(&mut query.select) {
            let reference = &query.properties[id];
            if !reference.belongs_to(&collection.name) || reference.is_aggregate() {
                select.push(id);
                continue;
            }

            if reference.is_wildcard() {
                let Some(expanded) = collection.expand_wildcard(&reference.path) else {
                    ctx.errors.add_warning(Self::invalid(reference), Some(reference.position));
                    continue;
                };

                let (owner, position) = (reference.collection.clone(), reference.position);
                for path in expanded {
                    let leaf = PropertyReference::resolved(&owner, &path.long_path, &path.short_path, position);
                    select.push(query.properties.push(leaf));
                }
                continue;
            }

            match collection.resolve_short(&reference.path) {
                Some(short) => {
                    query.properties[id].resolved = Some(short);
                    select.push(id);
                },
                None => ctx.errors.add_warning(Self::invalid(reference), Some(reference.position)),
            }
        }

        query.select = select;
    }

    fn invalid(reference: &PropertyReference) -> String {
        format!("The 'select' property ({}) is invalid.", reference.path)
    }
}
