use crate::{
    catalog::Collection,
    parser::ast::{AggregateKind, PropertyReference, Query},
    planner::{Accumulator, Pipeline, PipelineStage},
};

pub struct PipelineBuilder;

impl PipelineBuilder {
    /// Build the pipeline for an analyzed query.
    ///
    /// Stage order is fixed: match, unwind, then either group (plus the having
    /// match) or project. References the analyzer could not resolve are left out.
    pub fn from_analyzed(query: &Query, collection: &Collection) -> Pipeline {
        let mut stages = vec![];

        // OR connectors are combined like AND
        let predicates: Vec<String> = query.where_clauses.iter()
            .filter_map(|clause| {
                let name = query.property(clause.property).resolved_name()?;
                Some(clause.comparison.render(name))
            })
            .collect();
        if !predicates.is_empty() {
            stages.push(PipelineStage::Match(predicates));
        }

        if let Some(unwind) = query.unwind {
            if let Some(name) = query.property(unwind.property).resolved_name() {
                stages.push(PipelineStage::Unwind(name.to_string()));
            }
        }

        match query.group_by {
            Some(group) => {
                let key = query.property(group.key).resolved_name().unwrap_or_default().to_string();
                let accumulator = group.aggregation
                    .map(|id| query.property(id))
                    .map(|aggregation| (aggregation.alias.clone().unwrap_or_default(), Self::accumulator(aggregation)));
                let having_alias = accumulator.as_ref().map(|(alias, _)| alias.clone());

                stages.push(PipelineStage::Group { key, accumulator });

                if let (Some(having), Some(alias)) = (&query.having, having_alias) {
                    stages.push(PipelineStage::Match(vec![having.comparison.render(&alias)]));
                }
            },
            None => {
                let paths = query.selected()
                    .filter_map(|p| p.resolved_name())
                    .map(str::to_string)
                    .collect();
                stages.push(PipelineStage::Project(paths));
            },
        }

        Pipeline { collection: collection.name.clone(), stages }
    }

    fn accumulator(aggregation: &PropertyReference) -> Accumulator {
        let path = aggregation.resolved_name().unwrap_or_default().to_string();
        match aggregation.aggregate {
            AggregateKind::Sum => Accumulator::Sum(path),
            AggregateKind::Average => Accumulator::Average(path),
            AggregateKind::Count | AggregateKind::None => Accumulator::Count,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use regex::Regex;

    use crate::{
        catalog::{test_collections, Collection},
        diagnostics::ErrorManager,
        parser::{analyzer::AnalysisContext, ast::Query},
        planner::PipelineBuilder,
    };

    fn compile(collection: Collection, text: &str) -> String {
        let mut errors = ErrorManager::new();
        let mut query = Query::try_from(text).expect("Failed to parse query");
        let collection = AnalysisContext::analyze_query(&mut query, &[Arc::new(collection)], &mut errors, 100_000)
            .expect("known collection");
        assert!(errors.can_execute(), "{:?}", errors.errors());

        let text = PipelineBuilder::from_analyzed(&query, &collection).to_string();
        Regex::new(r"\s+").expect("regex").replace_all(&text, " ").trim().to_string()
    }

    #[test]
    pub fn test_group_by_count() {
        assert_eq!(
            compile(test_collections::foo(), "SELECT foo.Name, foo.COUNT FROM foo GROUP BY foo.Name"),
            "{ aggregate:'foo', pipeline: [ { $group: { _id:'$n', foo_count: {$sum:1}} }, ] }"
        );
    }

    #[test]
    pub fn test_where_date_and_project() {
        assert_eq!(
            compile(test_collections::foo(), "SELECT foo.FooId FROM foo WHERE foo.DateCreated > '2013-04-11'"),
            "{ aggregate:'foo', pipeline: [ {$match: {'dc':{$gt:new Date('2013-04-11')}}}, {$project:{ '_id':1 }}, ] }"
        );
        assert_eq!(
            compile(test_collections::foo(), "SELECT foo.FooId FROM foo WHERE foo.DateCreated > \"2013-04-11\""),
            "{ aggregate:'foo', pipeline: [ {$match: {'dc':{$gt:new Date(\"2013-04-11\")}}}, {$project:{ '_id':1 }}, ] }"
        );
    }

    #[test]
    pub fn test_wildcard_projection() {
        assert_eq!(
            compile(test_collections::foo(), "SELECT foo.* FROM foo WHERE foo.DateCreated > '2013-04-11'"),
            "{ aggregate:'foo', pipeline: [ {$match: {'dc':{$gt:new Date('2013-04-11')}}}, {$project:{ '_id':1, 'n':1, 'dc':1 }}, ] }"
        );
    }

    #[test]
    pub fn test_object_id_filters_with_group_by() {
        let text = "select Foo.Name, Foo.COUNT
                    from Foo
                    where Foo.FooId <> '521d67620e281a036092ea7e'
                    group by Foo.Name";
        assert_eq!(
            compile(test_collections::foo(), text),
            "{ aggregate:'foo', pipeline: [ {$match: {'_id':{$ne:ObjectId('521d67620e281a036092ea7e')}}}, { $group: { _id:'$n', Foo_count: {$sum:1}} }, ] }"
        );

        let text = text.replace("<>", "=");
        assert_eq!(
            compile(test_collections::foo(), &text),
            "{ aggregate:'foo', pipeline: [ {$match: {'_id':ObjectId('521d67620e281a036092ea7e')}}, { $group: { _id:'$n', Foo_count: {$sum:1}} }, ] }"
        );
    }

    #[test]
    pub fn test_keyword_case_does_not_change_output() {
        let upper = compile(test_collections::foo(), "SELECT Foo.FooId FROM Foo WHERE Foo.FooId = 123");
        let lower = compile(test_collections::foo(), "select Foo.FooId from Foo where Foo.FooId = 123");
        assert_eq!(upper, lower);
    }

    #[test]
    pub fn test_full_pipeline() {
        let people = test_collections::people();
        let text = "SELECT people.Address.City, people.Age.AVG FROM people \
                    WHERE people.Email <> '' OR people.IsActive = 1 \
                    UNWIND people.Pets \
                    GROUP BY people.Address.City \
                    HAVING people.Age.AVG > 30";
        assert_eq!(
            compile(people, text),
            "{ aggregate:'people', pipeline: [ \
             {$match: {$and: [ {'e':{$ne:''}}, {'ia':true} ]}}, \
             {$unwind : '$p'}, \
             { $group: { _id:'$a.c', people_avg: {$avg:'$ag'}} }, \
             {$match: {'people_avg':{$gt:30}}}, \
             ] }"
        );
    }

    #[test]
    pub fn test_group_by_without_accumulator() {
        let people = test_collections::people();
        assert_eq!(
            compile(people, "SELECT people.Email FROM people GROUP BY people.Email"),
            "{ aggregate:'people', pipeline: [ { $group: { _id:'$e'} }, ] }"
        );
    }

    #[test]
    pub fn test_project_skips_unresolved_and_joined_columns() {
        let people = test_collections::people();
        assert_eq!(
            compile(people, "SELECT people.Email, people.Nickname, donors.Total FROM people WHERE people.Email = 'x' WITH donors ON people.PersonId"),
            "{ aggregate:'people', pipeline: [ {$match: {'e':'x'}}, {$project:{ 'e':1 }}, ] }"
        );
    }
}
