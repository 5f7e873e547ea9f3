// SELECT people.Name, people.Address.*, people.COUNT
// FROM people
// WHERE people.Age > 16 AND people.Address.City = 'Porto'
// UNWIND people.Pets
// GROUP BY people.Address.City
// HAVING people.COUNT > 3
// WITH donors ON people.PersonId

use std::fmt;

use crate::parser::{ast::{CollectionName, GroupBy, GroupByClause, HavingClause, HavingParser, ProjectionParser, PropertyId, PropertyReference, PropertyTable, UnwindClause, UnwindParser, WhereClause, WhereParser, WithClause, WithParser}, ParseError, Phase, QueryParser};

/// A parsed query. Clauses hold [`PropertyId`]s into `properties`, which is
/// owned by the query and annotated in place by the analyzer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub properties: PropertyTable,
    pub select: Vec<PropertyId>,
    pub collection: Option<CollectionName>,
    pub where_clauses: Vec<WhereClause>,
    pub unwind: Option<UnwindClause>,
    pub group_by: Option<GroupByClause>,
    pub having: Option<HavingClause>,
    pub with: Option<WithClause>,
}

impl Query {
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();

        let mut query = Query::default();

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Projection => query.select = ProjectionParser::parse(parser, &mut query.properties)?,
                Phase::Collection => query.collection = Some(CollectionName::parse(parser)?),
                Phase::Criteria => query.where_clauses = WhereParser::parse(parser, &mut query.properties)?,
                Phase::Unwind => query.unwind = Some(UnwindParser::parse(parser, &mut query.properties)?),
                Phase::Aggregates => query.group_by = Some(GroupBy::parse(parser, &mut query.properties)?),
                Phase::Having => query.having = Some(HavingParser::parse(parser, &mut query.properties)?),
                Phase::With => query.with = Some(WithParser::parse(parser, &mut query.properties)?),
                Phase::EOF => {},
            }
        }

        Ok(query)
    }

    pub fn collection_name(&self) -> &str {
        self.collection.as_ref().map(|c| c.name.as_str()).unwrap_or_default()
    }

    pub fn property(&self, id: PropertyId) -> &PropertyReference {
        &self.properties[id]
    }

    pub fn selected(&self) -> impl Iterator<Item = &PropertyReference> {
        self.select.iter().map(|id| &self.properties[*id])
    }
}

impl TryFrom<&str> for Query {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        Query::parse(&mut parser)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let select = self.selected().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
        let criteria = self.where_clauses.iter()
            .map(|w| format!("{:?} {} {} {}", w.connector, self.property(w.property), w.comparison.op, w.comparison.literal.raw))
            .collect::<Vec<_>>()
            .join(", ");
        let unwind = self.unwind.map(|u| self.property(u.property).to_string()).unwrap_or_else(|| "None".into());
        let group = self.group_by.map(|g| self.property(g.key).to_string()).unwrap_or_else(|| "None".into());
        let having = match &self.having {
            Some(h) => format!("{} {} {}", self.property(h.property), h.comparison.op, h.comparison.literal.raw),
            None => "None".to_string(),
        };
        let with = match &self.with {
            Some(w) => format!("{} ON {}", w.collection.name, self.property(w.join_property)),
            None => "None".to_string(),
        };

        write!(f, "Query(select=[{}], collection={}, where=[{}], unwind={}, group_by={}, having={}, with={})",
               select, self.collection_name(), criteria, unwind, group, having, with)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
