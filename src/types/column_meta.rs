/// One column as reported by the schema catalog, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMeta {
    pub column_name: String, // snake_case, raw
    pub column_type: String, // e.g. varchar(32), int unsigned
}

impl ColumnMeta {
    pub fn new(column_name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            column_type: column_type.into(),
        }
    }
}
