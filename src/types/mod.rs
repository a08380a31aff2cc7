pub mod column_meta;
pub mod field_meta;
pub mod model_struct;

pub use column_meta::ColumnMeta;
pub use field_meta::{FieldKind, FieldMeta};
pub use model_struct::ModelStruct;
