use heck::ToSnakeCase;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::database_schema::SchemaCatalog;
use crate::error::Result;
use crate::model_generator::generate_model;
use crate::model_writer::FileWriter;

#[derive(Clone, Debug)]
pub struct CreateModelOptions {
    pub table_name: String,
    pub package_name: String,
    pub models_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    MissingTable,
    TableNotFound,
    Declined,
    Created(PathBuf),
}

/// `app/models` + `OrderItems` -> `app/models/order_items.go`
pub fn model_path(models_dir: &Path, table_name: &str) -> PathBuf {
    models_dir.join(format!("{}.go", table_name.to_snake_case()))
}

/// Reports an empty `--table`; `None` when there is a name to look up.
pub fn check_table_name(table_name: &str) -> Option<CreateOutcome> {
    if table_name.is_empty() {
        info!("-t table name parameter cannot be empty");
        return Some(CreateOutcome::MissingTable);
    }
    None
}

/// The `create:model` flow: look the table up, render its model, write it.
pub async fn create_model<C, W>(
    catalog: &C,
    writer: &W,
    options: &CreateModelOptions,
) -> Result<CreateOutcome>
where
    C: SchemaCatalog,
    W: FileWriter,
{
    let table_name = options.table_name.as_str();

    if let Some(outcome) = check_table_name(table_name) {
        return Ok(outcome);
    }

    let tables = catalog.list_tables().await?;
    if !tables.iter().any(|table: &String| table == table_name) {
        info!("{} table does not exist", table_name);
        return Ok(CreateOutcome::TableNotFound);
    }

    let columns = catalog.columns_of(table_name).await?;
    debug!(table = table_name, columns = columns.len(), "fetched columns");

    let source = generate_model(table_name, &options.package_name, &columns)?;
    let path = model_path(&options.models_dir, table_name);

    if !writer.write_if_confirmed(table_name, &path, &source)? {
        return Ok(CreateOutcome::Declined);
    }

    info!("Model {} created successfully", table_name);
    Ok(CreateOutcome::Created(path))
}
