use indexmap::IndexSet;

use crate::column_mapping::TEMPORAL_TYPE_MARKER;
use crate::types::field_meta::MARKER_PREFIX;
use crate::types::FieldMeta;

pub const CARBON_PACKAGE: &str = "github.com/goravel/framework/support/carbon";
pub const ORM_PACKAGE: &str = "github.com/goravel/framework/database/orm";

/// Go packages the folded field list needs, in first-seen order.
pub fn resolve_imports(fields: &[FieldMeta]) -> IndexSet<String> {
    let mut imports: IndexSet<String> = IndexSet::new();

    for field in fields {
        if field.field_type().contains(TEMPORAL_TYPE_MARKER) {
            imports.insert(CARBON_PACKAGE.to_string());
        }
        if field.field_name.starts_with(MARKER_PREFIX) {
            imports.insert(ORM_PACKAGE.to_string());
        }
    }

    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::field_meta::{MODEL_MARKER, SOFT_DELETES_MARKER};

    fn column(name: &str, field_type: &str) -> FieldMeta {
        FieldMeta::column(name, field_type, vec![])
    }

    #[test]
    fn no_imports_for_plain_scalars() {
        let fields = vec![
            column("ID", "int64"),
            column("Name", "string"),
            column("Payload", "json.RawMessage"),
        ];

        assert!(resolve_imports(&fields).is_empty());
    }

    #[test]
    fn imports_are_deduplicated_in_first_seen_order() {
        let fields = vec![
            FieldMeta::marker(MODEL_MARKER),
            column("BornOn", "carbon.Date"),
            column("LastSeen", "carbon.DateTime"),
            FieldMeta::marker(SOFT_DELETES_MARKER),
        ];

        let imports: Vec<String> = resolve_imports(&fields).into_iter().collect();

        assert_eq!(imports, vec![ORM_PACKAGE.to_string(), CARBON_PACKAGE.to_string()]);
    }

    #[test]
    fn temporal_type_pulls_carbon_only() {
        let fields = vec![column("CreatedAt", "carbon.Timestamp")];

        let imports: Vec<String> = resolve_imports(&fields).into_iter().collect();

        assert_eq!(imports, vec![CARBON_PACKAGE.to_string()]);
    }
}
