use go_model_generator::generate_model;
use go_model_generator::model_generator::build_model_struct;
use go_model_generator::types::{ColumnMeta, FieldMeta};
use pretty_assertions::assert_eq;

fn columns(pairs: &[(&str, &str)]) -> Vec<ColumnMeta> {
    pairs.iter()
        .map(|(name, column_type)| ColumnMeta::new(*name, *column_type))
        .collect()
}

#[test]
fn article_table_with_timestamps_only() {
    let columns = columns(&[
        ("uuid", "char(36)"),
        ("title", "varchar(120)"),
        ("published_on", "date"),
        ("created_at", "timestamp"),
        ("updated_at", "timestamp"),
        ("meta", "json"),
    ]);

    let source = generate_model("articles", "models", &columns).unwrap();

    let expected = "package models

import (
\"github.com/goravel/framework/support/carbon\"
\"github.com/goravel/framework/database/orm\"
)

type Articles struct {
\tUuid string `json:\"uuid\" form:\"uuid\"`
\tTitle string `json:\"title\" form:\"title\"`
\tPublishedOn carbon.Date `json:\"publishedOn\" form:\"publishedOn\"`
\torm.Timestamps
\tMeta json.RawMessage `json:\"meta\" form:\"meta\"`
}
func (m *Articles) TableName() string {
\treturn \"articles\"
}
type ArticlesColumnStruct struct {
\tUuid string
\tTitle string
\tPublishedOn string
\tCreatedAt string
\tUpdatedAt string
\tMeta string
}
func ArticlesColumns() ArticlesColumnStruct{
\treturn ArticlesColumnStruct{
\t\tUuid: \"uuid\",
\t\tTitle: \"title\",
\t\tPublishedOn: \"published_on\",
\t\tCreatedAt: \"created_at\",
\t\tUpdatedAt: \"updated_at\",
\t\tMeta: \"meta\",
  }
}
";
    assert_eq!(source, expected);
}

#[test]
fn column_names_survive_every_folding_outcome() {
    let cases: Vec<Vec<ColumnMeta>> = vec![
        columns(&[
            ("id", "int"),
            ("created_at", "datetime"),
            ("updated_at", "datetime"),
            ("deleted_at", "datetime"),
        ]),
        columns(&[("created_at", "datetime"), ("updated_at", "datetime")]),
        columns(&[("id", "int"), ("deleted_at", "datetime")]),
        columns(&[("name", "varchar")]),
    ];

    for case in cases {
        let model = build_model_struct("models", &case);

        assert_eq!(model.column_names.len(), case.len());
        assert!(model.fields.len() <= case.len());
    }
}

#[test]
fn user_id_foreign_key_is_a_plain_field() {
    let model =
        build_model_struct("models", &columns(&[("id", "int"), ("user_id", "int unsigned")]));

    assert_eq!(
        model.fields[1],
        FieldMeta::column(
            "UserID",
            "int64",
            vec!["json:\"userId\"".to_string(), "form:\"userId\"".to_string()]
        )
    );
    assert!(model.imports.is_empty());
}

#[test]
fn pipeline_is_deterministic() {
    let columns = columns(&[
        ("id", "int"),
        ("name", "varchar(32)"),
        ("created_at", "datetime"),
        ("updated_at", "datetime"),
    ]);

    let first = generate_model("users", "models", &columns).unwrap();
    let second = generate_model("users", "models", &columns).unwrap();

    assert_eq!(first, second);
}
