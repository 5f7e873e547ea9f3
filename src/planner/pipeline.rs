use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accumulator {
    /// One per grouped document
    Count,
    /// Sum of a short path
    Sum(String),
    /// Average of a short path
    Average(String),
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accumulator::Count => write!(f, "{{$sum:1}}"),
            Accumulator::Sum(path) => write!(f, "{{$sum:'${}'}}", path),
            Accumulator::Average(path) => write!(f, "{{$avg:'${}'}}", path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStage {
    /// Rendered comparisons; more than one are combined with `$and`
    Match(Vec<String>),
    Unwind(String),
    Group {
        key: String,
        accumulator: Option<(String, Accumulator)>,
    },
    /// Short paths to keep
    Project(Vec<String>),
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Match(predicates) if predicates.len() == 1 => {
                write!(f, "{{$match: {}}}", predicates[0])
            },
            PipelineStage::Match(predicates) => {
                write!(f, "{{$match: {{$and: [ {} ]}}}}", predicates.join(", "))
            },
            PipelineStage::Unwind(path) => write!(f, "{{$unwind : '${}'}}", path),
            PipelineStage::Group { key, accumulator: None } => {
                write!(f, "{{ $group: {{ _id:'${}'}} }}", key)
            },
            PipelineStage::Group { key, accumulator: Some((alias, accumulator)) } => {
                write!(f, "{{ $group: {{ _id:'${}', {}: {}}} }}", key, alias, accumulator)
            },
            PipelineStage::Project(paths) => {
                let fields = paths.iter().map(|p| format!("'{}':1", p)).collect::<Vec<_>>().join(", ");
                write!(f, "{{$project:{{ {} }}}}", fields)
            },
        }
    }
}

/// An `aggregate` command over one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub collection: String,
    pub stages: Vec<PipelineStage>,
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "  aggregate:'{}',", self.collection)?;
        writeln!(f, "  pipeline: [")?;
        for stage in &self.stages {
            writeln!(f, "    {},", stage)?;
        }
        writeln!(f, "  ]")?;
        writeln!(f, "}}")
    }
}
