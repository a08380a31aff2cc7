use crate::casing::{to_lower_camel, to_upper_camel};
use crate::column_mapping::column_mapping;
use crate::types::{ColumnMeta, FieldMeta};

pub const PRIMARY_KEY_TAG: &str = "gorm:\"primaryKey\"";

pub fn column_tags(column_name: &str) -> Vec<String> {
    let key = to_lower_camel(column_name);

    let mut tags = vec![format!("json:\"{}\"", key), format!("form:\"{}\"", key)];

    // an `id` column is the primary key by convention
    if column_name.eq_ignore_ascii_case("id") {
        tags.push(PRIMARY_KEY_TAG.to_string());
    }

    tags
}

pub fn column_field(column: &ColumnMeta) -> FieldMeta {
    FieldMeta::column(
        to_upper_camel(&column.column_name),
        column_mapping(&column.column_type),
        column_tags(&column.column_name),
    )
}

/// One field per column, in column order, plus the raw column names.
pub fn synthesize_fields(columns: &[ColumnMeta]) -> (Vec<FieldMeta>, Vec<String>) {
    let fields: Vec<FieldMeta> = columns.iter().map(column_field).collect();

    let column_names: Vec<String> = columns
        .iter()
        .map(|column: &ColumnMeta| column.column_name.clone())
        .collect();

    (fields, column_names)
}
