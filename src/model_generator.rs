use minijinja::{context, AutoEscape, Environment};
use tracing::debug;

use crate::casing::to_upper_camel;
use crate::conventions::fold_conventions;
use crate::error::Result;
use crate::field_generator::synthesize_fields;
use crate::imports::resolve_imports;
use crate::types::{ColumnMeta, FieldMeta, ModelStruct};

pub const DEFAULT_PACKAGE: &str = "models";

const MODEL_TEMPLATE_NAME: &str = "model.go";

const MODEL_TEMPLATE: &str = "package {{ package }}

{{ imports }}

type {{ struct_name }} struct {
{{ fields }}
}
func (m *{{ struct_name }}) TableName() string {
\treturn \"{{ table_name }}\"
}
type {{ struct_name }}ColumnStruct struct {
{{ column_types }}
}
func {{ struct_name }}Columns() {{ struct_name }}ColumnStruct{
\treturn {{ struct_name }}ColumnStruct{
{{ column_values }}
  }
}
";

pub fn build_model_struct(package_name: &str, columns: &[ColumnMeta]) -> ModelStruct {
    let (fields, column_names) = synthesize_fields(columns);
    let fields = fold_conventions(fields);
    let imports = resolve_imports(&fields);

    ModelStruct {
        package_name: package_name.to_string(),
        imports,
        fields,
        column_names,
    }
}

fn import_block(model: &ModelStruct) -> String {
    if model.imports.is_empty() {
        return String::new();
    }

    let packages: String = model
        .imports
        .iter()
        .map(|package: &String| format!("\"{}\"\n", package))
        .collect();

    format!("import (\n{})", packages)
}

fn field_line(field: &FieldMeta) -> String {
    if field.is_marker() {
        return format!("\t{}", field.field_name);
    }

    let tag = if field.tags().is_empty() {
        String::new()
    } else {
        format!("`{}`", field.tags().join(" "))
    };

    let parts: Vec<&str> = [field.field_name.as_str(), field.field_type(), tag.as_str()]
        .into_iter()
        .filter(|part: &&str| !part.is_empty())
        .collect();

    format!("\t{}", parts.join(" "))
}

/// Field name used in the `<Struct>ColumnStruct` lookup table.
fn column_field_name(column_name: &str) -> String {
    let name = to_upper_camel(column_name);

    if name == "Id" {
        name.to_uppercase()
    } else {
        name
    }
}

pub fn render_model(struct_name: &str, table_name: &str, model: &ModelStruct) -> Result<String> {
    let fields: Vec<String> = model.fields.iter().map(field_line).collect();

    let column_types: Vec<String> = model
        .column_names
        .iter()
        .map(|column: &String| format!("\t{} string", column_field_name(column)))
        .collect();

    let column_values: Vec<String> = model
        .column_names
        .iter()
        .map(|column: &String| format!("\t\t{}: \"{}\",", column_field_name(column), column))
        .collect();

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(MODEL_TEMPLATE_NAME, MODEL_TEMPLATE)?;

    let rendered = env.get_template(MODEL_TEMPLATE_NAME)?.render(context! {
        package => &model.package_name,
        imports => import_block(model),
        struct_name => struct_name,
        table_name => table_name,
        fields => fields.join("\n"),
        column_types => column_types.join("\n"),
        column_values => column_values.join("\n"),
    })?;

    Ok(rendered)
}

/// Go source of the model struct for `table_name`.
pub fn generate_model(
    table_name: &str,
    package_name: &str,
    columns: &[ColumnMeta],
) -> Result<String> {
    let model = build_model_struct(package_name, columns);

    debug!(
        table = table_name,
        fields = model.fields.len(),
        imports = ?model.imports,
        "synthesized model struct"
    );

    render_model(&to_upper_camel(table_name), table_name, &model)
}
