//! Folds primary key, timestamp and soft-delete columns into the goravel
//! `orm` embeddables.
//!
//! Convention fields are located by name before anything is edited and the
//! folded list is rebuilt in one pass, so the position of `updated_at`
//! relative to `created_at` does not matter.

use tracing::debug;

use crate::types::field_meta::{MODEL_MARKER, SOFT_DELETES_MARKER, TIMESTAMPS_MARKER};
use crate::types::FieldMeta;

const ID_FIELD: &str = "ID";
const CREATED_AT_FIELD: &str = "CreatedAt";
const UPDATED_AT_FIELD: &str = "UpdatedAt";
const DELETED_AT_FIELD: &str = "DeletedAt";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timestamps {
    /// `ID`, `CreatedAt` and `UpdatedAt` -> `orm.Model` at the `ID` position
    Model,
    /// `CreatedAt` and `UpdatedAt` -> `orm.Timestamps` at the `UpdatedAt` position
    Timestamps,
    None,
}

/// Position of the last field with each convention name.
#[derive(Debug)]
struct ConventionFields {
    id: Option<usize>,
    created_at: Option<usize>,
    updated_at: Option<usize>,
    deleted_at: Option<usize>,
}

fn last_position(fields: &[FieldMeta], name: &str) -> Option<usize> {
    fields.iter().rposition(|field: &FieldMeta| field.field_name == name)
}

impl ConventionFields {
    fn locate(fields: &[FieldMeta]) -> Self {
        Self {
            id: last_position(fields, ID_FIELD),
            created_at: last_position(fields, CREATED_AT_FIELD),
            updated_at: last_position(fields, UPDATED_AT_FIELD),
            deleted_at: last_position(fields, DELETED_AT_FIELD),
        }
    }

    fn timestamps(self: &Self) -> Timestamps {
        let timestamps = self.created_at.is_some() && self.updated_at.is_some();

        if timestamps && self.id.is_some() {
            Timestamps::Model
        } else if timestamps {
            Timestamps::Timestamps
        } else {
            Timestamps::None
        }
    }

    fn fold_at(self: &Self, convention: Timestamps, index: usize) -> Fold {
        let at = Some(index);

        if at == self.deleted_at {
            return Fold::Replace(SOFT_DELETES_MARKER);
        }

        match convention {
            Timestamps::Model if at == self.id => Fold::Replace(MODEL_MARKER),
            Timestamps::Model if at == self.created_at || at == self.updated_at => Fold::Drop,
            Timestamps::Timestamps if at == self.created_at => Fold::Drop,
            Timestamps::Timestamps if at == self.updated_at => Fold::Replace(TIMESTAMPS_MARKER),
            _ => Fold::Keep,
        }
    }
}

enum Fold {
    Keep,
    Drop,
    Replace(&'static str),
}

/// Each convention name is folded once, at its last occurrence; earlier
/// duplicates stay plain fields.
pub fn fold_conventions(fields: Vec<FieldMeta>) -> Vec<FieldMeta> {
    let located = ConventionFields::locate(&fields);
    let convention = located.timestamps();

    debug!(?convention, ?located, "folding convention fields");

    fields
        .into_iter()
        .enumerate()
        .filter_map(|(index, field)| match located.fold_at(convention, index) {
            Fold::Keep => Some(field),
            Fold::Drop => None,
            Fold::Replace(marker) => Some(FieldMeta::marker(marker)),
        })
        .collect()
}
