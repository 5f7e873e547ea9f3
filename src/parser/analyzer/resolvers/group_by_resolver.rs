use crate::{
    catalog::ValueKind,
    parser::{analyzer::{Admission, AnalysisContext, IndexAdmission}, ast::{AggregateKind, PropertyId, Query}},
};

/// Name the pipeline gives the group key in grouped documents.
pub const GROUP_ID: &str = "_id";

pub struct GroupByResolver;

impl GroupByResolver {
    pub fn resolve(query: &mut Query, ctx: &mut AnalysisContext) {
        let Some(group) = query.group_by else {
            return;
        };
        let collection = ctx.collection;

        let key = &mut query.properties[group.key];
        if key.is_aggregate() {
            ctx.errors.add_error(format!("Cannot 'group by' an aggregate property {}", key.path), Some(key.position));
            return;
        }

        let Some(short) = collection.resolve_short(&key.path) else {
            ctx.errors.add_error(format!("The 'group by' property ({}) is invalid.", key.path), Some(key.position));
            return;
        };

        let is_date = collection.resolve_property(&key.path)
            .is_some_and(|p| p.value_kind() == ValueKind::DateTime);
        let key_path = key.path.clone();
        key.alias = Some(GROUP_ID.to_string());
        key.resolved = Some(short.clone());

        let aggregates: Vec<PropertyId> = query.select.iter()
            .copied()
            .filter(|id| query.properties[*id].is_aggregate())
            .collect();

        match aggregates.as_slice() {
            [] => ctx.errors.add_warning(
                "The aggregation property was not specified. Include a '.COUNT' or '.SUM' in your select clause",
                None,
            ),
            [id] => {
                if let Some(group) = query.group_by.as_mut() {
                    group.aggregation = Some(*id);
                }

                let aggregation = &mut query.properties[*id];
                if aggregation.aggregate != AggregateKind::Count {
                    match collection.resolve_short(aggregation.value_path()) {
                        Some(value_short) => aggregation.resolved = Some(value_short),
                        None => {
                            ctx.errors.add_error(
                                "The Sum property is invalid - please append '.SUM' to the end of a valid numeric property name (ex: Donations.TotalAmount.SUM).",
                                Some(aggregation.position),
                            );
                            return;
                        },
                    }
                }
            },
            _ => {
                ctx.errors.add_error("You can only include one 'COUNT' or 'SUM' property in your 'select'", None);
                return;
            },
        }

        match IndexAdmission::admit(ctx, &short) {
            Admission::Indexed => {},
            Admission::Warn => ctx.errors.add_warning(
                format!("Group by ({}) doesn't use an index. Running with caution", key_path),
                None,
            ),
            Admission::Deny => {
                ctx.errors.add_error(
                    format!("Group by ({}) doesn't use an index. Collection too large to allow", key_path),
                    None,
                );
                return;
            },
        }

        if is_date {
            ctx.errors.add_warning("You really want to group by a DateTime value? Really?", None);
        }
    }
}
