// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Field and related-entity resolution
//!
//! Resolution maps a column's key path to a typed accessor function over
//! its context (order, line item, or a related entity). The accessor
//! tables are explicit matches over the known path strings - there is no
//! reflective path navigation - so templates can be checked against them
//! at load time and an unknown path fails fast instead of mid-export.
//!
//! Two deliberate asymmetries carried over from long-lived template data:
//! an unknown *related entity type* resolves to a null cell, while an
//! unknown *key path* is a configuration error.

use crate::adapters::reference::ReferenceDataLookup;
use crate::core::export::value::FieldValue;
use crate::domain::errors::WaybillError;
use crate::domain::order::{Order, OrderLineItem};
use crate::domain::reference::{FacilityDto, OrderableDto, ProcessingPeriodDto};
use crate::domain::result::Result;
use crate::domain::template::{ColumnSource, FileColumn, FileTemplate, RelatedEntity};
use std::sync::Arc;

type OrderAccessor = fn(&Order) -> FieldValue;
type LineItemAccessor = fn(&OrderLineItem) -> FieldValue;
type FacilityAccessor = fn(&FacilityDto) -> FieldValue;
type OrderableAccessor = fn(&OrderableDto) -> FieldValue;
type PeriodAccessor = fn(&ProcessingPeriodDto) -> FieldValue;

fn order_accessor(path: &str) -> Option<OrderAccessor> {
    Some(match path {
        "id" => |o| o.id.into(),
        "externalId" => |o| o.external_id.into(),
        "emergency" => |o| FieldValue::Boolean(o.emergency),
        "facilityId" => |o| o.facility_id.into(),
        "programId" => |o| o.program_id.into(),
        "processingPeriodId" => |o| o.processing_period_id.into(),
        "requestingFacilityId" => |o| o.requesting_facility_id.into(),
        "receivingFacilityId" => |o| o.receiving_facility_id.into(),
        "supplyingFacilityId" => |o| o.supplying_facility_id.into(),
        "orderCode" => |o| o.order_code.clone().into(),
        "quotedCost" => |o| FieldValue::Decimal(o.quoted_cost),
        "status" => |o| o.status.to_string().into(),
        "createdDate" => |o| FieldValue::DateTime(o.created_date),
        "createdById" => |o| o.created_by_id.into(),
        _ => return None,
    })
}

fn line_item_accessor(path: &str) -> Option<LineItemAccessor> {
    Some(match path {
        "id" => |l| l.id.into(),
        "orderableId" => |l| l.orderable_id.into(),
        "orderedQuantity" => |l| l.ordered_quantity.into(),
        "filledQuantity" => |l| l.filled_quantity.into(),
        "approvedQuantity" => |l| l.approved_quantity.into(),
        "packsToShip" => |l| l.packs_to_ship.into(),
        _ => return None,
    })
}

fn facility_accessor(path: &str) -> Option<FacilityAccessor> {
    Some(match path {
        "id" => |f| f.id.into(),
        "code" => |f| f.code.clone().into(),
        "name" => |f| f.name.clone().into(),
        "description" => |f| f.description.clone().into(),
        _ => return None,
    })
}

fn orderable_accessor(path: &str) -> Option<OrderableAccessor> {
    Some(match path {
        "id" => |p| p.id.into(),
        "productCode" => |p| p.product_code.clone().into(),
        "name" => |p| p.name.clone().into(),
        "packSize" => |p| p.pack_size.into(),
        _ => return None,
    })
}

fn period_accessor(path: &str) -> Option<PeriodAccessor> {
    Some(match path {
        "id" => |p| p.id.into(),
        "name" => |p| p.name.clone().into(),
        "description" => |p| p.description.clone().into(),
        "startDate" => |p| FieldValue::Date(p.start_date),
        "endDate" => |p| FieldValue::Date(p.end_date),
        _ => return None,
    })
}

fn unknown_path(context: &str, path: &str) -> WaybillError {
    WaybillError::Configuration(format!("unknown {context} key path: {path}"))
}

/// Resolves a column's primary value against the order or line item
///
/// `line_number` is the 1-based position of the current line item within
/// this export run.
///
/// # Errors
///
/// Returns a configuration error for a key path missing from the accessor
/// table of the chosen context.
pub fn resolve_column(
    column: &FileColumn,
    order: &Order,
    line_item: &OrderLineItem,
    line_number: usize,
) -> Result<FieldValue> {
    match column.source() {
        ColumnSource::Blank => Ok(FieldValue::Null),
        ColumnSource::Literal => Ok(FieldValue::Text(column.key_path.clone())),
        ColumnSource::LineNumber => Ok(FieldValue::Integer(line_number as i64)),
        ColumnSource::Order => order_accessor(&column.key_path)
            .map(|accessor| accessor(order))
            .ok_or_else(|| unknown_path("order", &column.key_path)),
        ColumnSource::LineItem => line_item_accessor(&column.key_path)
            .map(|accessor| accessor(line_item))
            .ok_or_else(|| unknown_path("line item", &column.key_path)),
    }
}

/// Validates a template against the accessor tables
///
/// Checked at template load so a broken column definition surfaces when the
/// template is registered, not on the first export that hits it. Excluded
/// columns are validated too - flipping `include` later must not introduce
/// a path error.
///
/// # Errors
///
/// Returns a configuration error for duplicate positions or any key path
/// missing from its context's accessor table.
pub fn validate_template(template: &FileTemplate) -> Result<()> {
    template
        .validate_positions()
        .map_err(WaybillError::Configuration)?;

    for column in &template.columns {
        match column.source() {
            ColumnSource::Order => {
                if order_accessor(&column.key_path).is_none() {
                    return Err(unknown_path("order", &column.key_path));
                }
            }
            ColumnSource::LineItem => {
                if line_item_accessor(&column.key_path).is_none() {
                    return Err(unknown_path("line item", &column.key_path));
                }
            }
            // Literals, line numbers and blank columns carry no path.
            ColumnSource::Literal | ColumnSource::LineNumber | ColumnSource::Blank => {}
        }

        if column.has_related() {
            let related_tag = column.related.as_deref().unwrap_or_default();
            let related_path = column.related_key_path.as_deref().unwrap_or_default();
            // Unknown related types are tolerated (they resolve to null),
            // but a known type with an unknown path is a broken column.
            if let Some(entity) = RelatedEntity::from_tag(related_tag) {
                let known = match entity {
                    RelatedEntity::Facility => facility_accessor(related_path).is_some(),
                    RelatedEntity::Orderable => orderable_accessor(related_path).is_some(),
                    RelatedEntity::ProcessingPeriod => period_accessor(related_path).is_some(),
                };
                if !known {
                    return Err(unknown_path(related_tag, related_path));
                }
            }
        }
    }

    Ok(())
}

/// Expands a foreign identifier into a value on the related entity
///
/// Fetches the entity through the reference data collaborator and resolves
/// the secondary path against it.
pub struct RelatedEntityResolver {
    lookup: Arc<dyn ReferenceDataLookup>,
}

impl RelatedEntityResolver {
    pub fn new(lookup: Arc<dyn ReferenceDataLookup>) -> Self {
        Self { lookup }
    }

    /// Expands `raw` according to the column's related-entity descriptor
    ///
    /// A null primary value short-circuits to null without a lookup, an
    /// unknown related type resolves to null, and an entity the
    /// collaborator cannot find resolves to null. A non-null primary value
    /// that is not an identifier is a configuration error.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a non-identifier primary value or
    /// an unknown related key path, and a reference error when the lookup
    /// collaborator fails.
    pub async fn expand(
        &self,
        raw: FieldValue,
        related_tag: &str,
        related_key_path: &str,
    ) -> Result<FieldValue> {
        if raw.is_null() {
            return Ok(FieldValue::Null);
        }

        let Some(entity) = RelatedEntity::from_tag(related_tag) else {
            return Ok(FieldValue::Null);
        };

        let id = raw.as_uuid().ok_or_else(|| {
            WaybillError::Configuration(format!(
                "related column for {related_tag} resolved a non-identifier value"
            ))
        })?;

        match entity {
            RelatedEntity::Facility => {
                let accessor = facility_accessor(related_key_path)
                    .ok_or_else(|| unknown_path("Facility", related_key_path))?;
                Ok(self
                    .lookup
                    .find_facility(id)
                    .await?
                    .map(|facility| accessor(&facility))
                    .unwrap_or(FieldValue::Null))
            }
            RelatedEntity::Orderable => {
                let accessor = orderable_accessor(related_key_path)
                    .ok_or_else(|| unknown_path("Orderable", related_key_path))?;
                Ok(self
                    .lookup
                    .find_orderable(id)
                    .await?
                    .map(|orderable| accessor(&orderable))
                    .unwrap_or(FieldValue::Null))
            }
            RelatedEntity::ProcessingPeriod => {
                let accessor = period_accessor(related_key_path)
                    .ok_or_else(|| unknown_path("ProcessingPeriod", related_key_path))?;
                Ok(self
                    .lookup
                    .find_period(id)
                    .await?
                    .map(|period| accessor(&period))
                    .unwrap_or(FieldValue::Null))
            }
        }
    }
}
