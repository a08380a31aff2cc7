use indexmap::IndexSet;

use super::field_meta::FieldMeta;

/// Everything the renderer needs for one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelStruct {
    pub package_name: String,
    pub imports: IndexSet<String>, // first-seen order
    pub fields: Vec<FieldMeta>,     // after convention folding
    pub column_names: Vec<String>,  // every raw column, folded or not
}
