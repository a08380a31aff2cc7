pub const MODEL_MARKER: &str = "orm.Model";
pub const TIMESTAMPS_MARKER: &str = "orm.Timestamps";
pub const SOFT_DELETES_MARKER: &str = "orm.SoftDeletes";

/// Prefix shared by every convention marker embedded from the orm package.
pub const MARKER_PREFIX: &str = "orm.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Direct mapping of a single column.
    Column {
        field_type: String, // empty when the sql type is unmapped
        tags: Vec<String>,
    },
    /// Framework embeddable standing in for a group of columns.
    Marker,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub field_name: String, // UpperCamelCase, or the marker type for markers
    pub kind: FieldKind,
}

impl FieldMeta {
    pub fn column(
        field_name: impl Into<String>,
        field_type: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            kind: FieldKind::Column {
                field_type: field_type.into(),
                tags,
            },
        }
    }

    pub fn marker(marker: &str) -> Self {
        Self {
            field_name: marker.to_string(),
            kind: FieldKind::Marker,
        }
    }

    pub fn is_marker(self: &Self) -> bool {
        matches!(self.kind, FieldKind::Marker)
    }

    pub fn field_type(self: &Self) -> &str {
        match &self.kind {
            FieldKind::Column { field_type, .. } => field_type,
            FieldKind::Marker => "",
        }
    }

    pub fn tags(self: &Self) -> &[String] {
        match &self.kind {
            FieldKind::Column { tags, .. } => tags,
            FieldKind::Marker => &[],
        }
    }
}
