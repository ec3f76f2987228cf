// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! File template domain model
//!
//! A [`FileTemplate`] describes how to render an order as a delimited file:
//! an ordered list of [`FileColumn`]s, each naming a source path into the
//! order graph, an optional related-entity expansion, an optional date
//! format, an output position and an inclusion flag.
//!
//! One template is active per export kind at a time; the registry that
//! supplies and stores templates is a collaborator behind
//! [`TemplateRepository`](crate::adapters::repository::TemplateRepository).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Context a column resolves against, parsed from the stored `nested` tag
///
/// The stored representation is an open string; anything that is not one of
/// the recognized markers resolves against the current line item, and a
/// blank tag emits an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Blank `nested` - the column renders an empty cell
    Blank,
    /// The literal content of the key path, not a lookup
    Literal,
    /// The 1-based running line number of the export
    LineNumber,
    /// Resolve the key path against the order
    Order,
    /// Resolve the key path against the current line item (default)
    LineItem,
}

impl ColumnSource {
    /// Maps a stored `nested` tag to its source
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" => ColumnSource::Blank,
            "string" => ColumnSource::Literal,
            "line_no" => ColumnSource::LineNumber,
            "order" => ColumnSource::Order,
            _ => ColumnSource::LineItem,
        }
    }
}

/// The closed set of entity types a column may expand a foreign id into
///
/// Stored as an open string on the column; an unrecognized name resolves to
/// a null cell value rather than an error. Callers relying on strict
/// validation should not assume otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedEntity {
    Facility,
    Orderable,
    ProcessingPeriod,
}

impl RelatedEntity {
    /// Maps a stored `related` tag to an entity type, `None` when unknown
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Facility" => Some(RelatedEntity::Facility),
            "Orderable" => Some(RelatedEntity::Orderable),
            "ProcessingPeriod" => Some(RelatedEntity::ProcessingPeriod),
            _ => None,
        }
    }
}

/// One output field definition within a [`FileTemplate`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileColumn {
    /// Unique identifier
    pub id: Uuid,

    /// Header label; an unset label renders as an empty header cell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_label: Option<String>,

    /// Excluded columns are dropped from output only, not from storage
    pub include: bool,

    /// Output position; ascending position defines column order and must
    /// be unique within a template
    pub position: i32,

    /// Optional chrono strftime pattern applied to date values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Context discriminator, see [`ColumnSource::from_tag`]
    #[serde(default)]
    pub nested: String,

    /// Property path into the chosen context, or the literal content for
    /// `string` columns
    #[serde(default)]
    pub key_path: String,

    /// Related entity type name, set when the primary path yields a
    /// foreign identifier that must be expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,

    /// Property path into the related entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_key_path: Option<String>,
}

impl FileColumn {
    /// The context this column resolves against
    pub fn source(&self) -> ColumnSource {
        ColumnSource::from_tag(&self.nested)
    }

    /// Whether this column requests a related-entity expansion
    pub fn has_related(&self) -> bool {
        self.related
            .as_deref()
            .map(|tag| !tag.trim().is_empty())
            .unwrap_or(false)
    }
}

/// The column-mapping configuration describing how to render an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTemplate {
    /// Unique identifier
    pub id: Uuid,

    /// Prefix of the produced file name: `{file_prefix}{order_code}.csv`
    pub file_prefix: String,

    /// Whether the first output line is the header row
    pub header_in_file: bool,

    /// Column definitions; output order is ascending `position`,
    /// independent of the order columns are stored in
    #[serde(default)]
    pub columns: Vec<FileColumn>,
}

impl FileTemplate {
    /// Returns the included columns in ascending position order
    pub fn output_columns(&self) -> Vec<&FileColumn> {
        let mut columns: Vec<&FileColumn> =
            self.columns.iter().filter(|c| c.include).collect();
        columns.sort_by_key(|c| c.position);
        columns
    }

    /// Structural validation: positions must be unique within the template
    ///
    /// Key-path validation against the known accessor tables happens at
    /// template load in the export layer, so unknown paths fail fast
    /// rather than mid-export.
    pub fn validate_positions(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.position) {
                return Err(format!(
                    "duplicate column position {} in template {}",
                    column.position, self.id
                ));
            }
        }
        Ok(())
    }

    /// File name for the artifact produced from `order_code`
    pub fn file_name(&self, order_code: &str) -> String {
        format!("{}{}.csv", self.file_prefix, order_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(position: i32, nested: &str) -> FileColumn {
        FileColumn {
            id: Uuid::new_v4(),
            column_label: None,
            include: true,
            position,
            format: None,
            nested: nested.to_string(),
            key_path: "orderCode".to_string(),
            related: None,
            related_key_path: None,
        }
    }

    #[test]
    fn test_column_source_tags() {
        assert_eq!(ColumnSource::from_tag(""), ColumnSource::Blank);
        assert_eq!(ColumnSource::from_tag("string"), ColumnSource::Literal);
        assert_eq!(ColumnSource::from_tag("line_no"), ColumnSource::LineNumber);
        assert_eq!(ColumnSource::from_tag("order"), ColumnSource::Order);
        assert_eq!(ColumnSource::from_tag("lineItem"), ColumnSource::LineItem);
        // Anything unrecognized falls back to the line item context.
        assert_eq!(ColumnSource::from_tag("shipment"), ColumnSource::LineItem);
    }

    #[test]
    fn test_related_entity_unknown_is_none() {
        assert_eq!(
            RelatedEntity::from_tag("Facility"),
            Some(RelatedEntity::Facility)
        );
        assert_eq!(RelatedEntity::from_tag("Supplier"), None);
    }

    #[test]
    fn test_output_columns_sorted_and_filtered() {
        let mut excluded = column(1, "order");
        excluded.include = false;

        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: true,
            columns: vec![column(3, "order"), excluded, column(2, "lineItem")],
        };

        let out = template.output_columns();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].position, 2);
        assert_eq!(out[1].position, 3);
    }

    #[test]
    fn test_duplicate_positions_rejected() {
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: false,
            columns: vec![column(1, "order"), column(1, "lineItem")],
        };

        assert!(template.validate_positions().is_err());
    }

    #[test]
    fn test_file_name() {
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: false,
            columns: vec![],
        };
        assert_eq!(template.file_name("ORDER-1"), "OORDER-1.csv");
    }

    #[test]
    fn test_has_related_ignores_blank() {
        let mut col = column(1, "lineItem");
        assert!(!col.has_related());

        col.related = Some("  ".to_string());
        assert!(!col.has_related());

        col.related = Some("Orderable".to_string());
        assert!(col.has_related());
    }
}
