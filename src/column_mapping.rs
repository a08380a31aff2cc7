use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Type name substring shared by every carbon temporal type.
pub const TEMPORAL_TYPE_MARKER: &str = "carbon";

static MYSQL_TO_GO_TYPE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("int", "int64"),
        ("integer", "int64"),
        ("tinyint", "int64"),
        ("smallint", "int64"),
        ("mediumint", "int64"),
        ("bigint", "int64"),
        ("int unsigned", "int64"),
        ("integer unsigned", "int64"),
        ("tinyint unsigned", "int64"),
        ("smallint unsigned", "int64"),
        ("mediumint unsigned", "int64"),
        ("bigint unsigned", "int64"),
        ("bit", "int64"),
        ("bool", "bool"),
        ("enum", "string"),
        ("set", "string"),
        ("varchar", "string"),
        ("char", "string"),
        ("tinytext", "string"),
        ("mediumtext", "string"),
        ("text", "string"),
        ("longtext", "string"),
        ("blob", "string"),
        ("tinyblob", "string"),
        ("mediumblob", "string"),
        ("longblob", "string"),
        ("date", "carbon.Date"),
        ("datetime", "carbon.DateTime"),
        ("timestamp", "carbon.Timestamp"),
        ("time", "string"),
        ("float", "float64"),
        ("double", "float64"),
        ("decimal", "float64"),
        ("binary", "string"),
        ("varbinary", "string"),
        ("json", "json.RawMessage"),
    ])
});

/// `varchar(32)` -> `varchar`, `int(10) unsigned` -> `int`
pub fn strip_type_length(column_type: &str) -> &str {
    match column_type.find('(') {
        Some(index) => &column_type[..index],
        None => column_type,
    }
}

/// Go type for a sql column type; an empty string when the type is not mapped.
pub fn column_mapping(column_type: &str) -> &'static str {
    MYSQL_TO_GO_TYPE
        .get(strip_type_length(column_type))
        .copied()
        .unwrap_or("")
}
