use crate::{catalog::Collection, parser::analyzer::AnalysisContext};

/// Outcome of checking an access path against the collection's indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Indexed,
    /// Un-indexed, but the collection is small enough to scan
    Warn,
    /// Un-indexed on a collection too large to scan
    Deny,
}

pub struct IndexAdmission;

impl IndexAdmission {
    /// A short path is indexed when it, or its top-level segment, leads an index.
    pub fn uses_index(collection: &Collection, short_path: &str) -> bool {
        let top_level = short_path.split('.').next().unwrap_or(short_path);
        collection.is_indexed(short_path) || collection.is_indexed(top_level)
    }

    pub fn admit(ctx: &AnalysisContext, short_path: &str) -> Admission {
        if Self::uses_index(ctx.collection, short_path) {
            Admission::Indexed
        } else if ctx.collection.row_count < ctx.max_unindexed_rows {
            Admission::Warn
        } else {
            Admission::Deny
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{catalog::{test_collections, Index}, diagnostics::ErrorManager, parser::analyzer::{Admission, AnalysisContext, IndexAdmission}};

    #[test]
    pub fn test_uses_index() {
        let people = test_collections::people();

        assert!(IndexAdmission::uses_index(&people, "e"));
        assert!(IndexAdmission::uses_index(&people, "a.c"));
        assert!(!IndexAdmission::uses_index(&people, "a.g.la"));
        assert!(!IndexAdmission::uses_index(&people, "ag"));
    }

    #[test]
    pub fn test_uses_index_on_top_level_segment() {
        let people = test_collections::people()
            .with_indices(vec![Index::new("pets_1", vec!["p".into()], vec!["Pets".into()])]);

        assert!(IndexAdmission::uses_index(&people, "p.k"));
        assert!(!IndexAdmission::uses_index(&people, "e"));
    }

    #[test]
    pub fn test_admit_by_row_count() {
        let mut errors = ErrorManager::new();
        let people = test_collections::people();

        let ctx = AnalysisContext::new(&people, &mut errors, 100_000);
        assert_eq!(IndexAdmission::admit(&ctx, "e"), Admission::Indexed);
        assert_eq!(IndexAdmission::admit(&ctx, "ag"), Admission::Deny);

        let ctx = AnalysisContext::new(&people, &mut errors, 3_000_000);
        assert_eq!(IndexAdmission::admit(&ctx, "ag"), Admission::Warn);
    }

    #[test]
    pub fn test_threshold_is_exclusive() {
        let mut errors = ErrorManager::new();
        let foo = test_collections::foo().with_row_count(100_000);

        let ctx = AnalysisContext::new(&foo, &mut errors, 100_000);
        assert_eq!(IndexAdmission::admit(&ctx, "n"), Admission::Deny);

        let foo = test_collections::foo().with_row_count(99_999);
        let ctx = AnalysisContext::new(&foo, &mut errors, 100_000);
        assert_eq!(IndexAdmission::admit(&ctx, "n"), Admission::Warn);
    }
}
