// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Delimited record writer
//!
//! Assembles ordered rows of cell text into the trading-partner file
//! format: comma-separated, CRLF-terminated, with an optional header line.
//!
//! Values are written verbatim - the format has no quoting, so a cell
//! containing the delimiter or terminator corrupts its row. Consumers
//! depend on the literal unquoted output; do not add quoting here.

use crate::domain::template::FileColumn;
use std::io::Write;

/// Cell delimiter of the export format
pub const DELIMITER: &str = ",";

/// Line terminator of the export format
pub const LINE_TERMINATOR: &str = "\r\n";

/// Writes the header line for the given output columns
///
/// Labels appear in the order given (callers pass position-ordered,
/// include-filtered columns); an unset label renders as an empty cell.
pub fn write_header<W: Write>(columns: &[&FileColumn], out: &mut W) -> std::io::Result<()> {
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            out.write_all(DELIMITER.as_bytes())?;
        }
        if let Some(label) = &column.column_label {
            out.write_all(label.as_bytes())?;
        }
    }
    out.write_all(LINE_TERMINATOR.as_bytes())
}

/// Writes one data row from already formatted cell text
pub fn write_row<W: Write>(cells: &[String], out: &mut W) -> std::io::Result<()> {
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            out.write_all(DELIMITER.as_bytes())?;
        }
        out.write_all(cell.as_bytes())?;
    }
    out.write_all(LINE_TERMINATOR.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn labeled(label: Option<&str>) -> FileColumn {
        FileColumn {
            id: Uuid::new_v4(),
            column_label: label.map(str::to_string),
            include: true,
            position: 1,
            format: None,
            nested: "order".to_string(),
            key_path: "orderCode".to_string(),
            related: None,
            related_key_path: None,
        }
    }

    #[test]
    fn test_header_with_labels() {
        let a = labeled(Some("Order number"));
        let b = labeled(Some("Approved quantity"));
        let columns = vec![&a, &b];

        let mut out = Vec::new();
        write_header(&columns, &mut out).unwrap();
        assert_eq!(out, b"Order number,Approved quantity\r\n");
    }

    #[test]
    fn test_header_unset_label_is_empty_cell() {
        let a = labeled(Some("Order number"));
        let b = labeled(None);
        let c = labeled(Some("Batch"));
        let columns = vec![&a, &b, &c];

        let mut out = Vec::new();
        write_header(&columns, &mut out).unwrap();
        assert_eq!(out, b"Order number,,Batch\r\n");
    }

    #[test]
    fn test_row_join_and_terminator() {
        let cells = vec!["ORD-1".to_string(), String::new(), "5".to_string()];
        let mut out = Vec::new();
        write_row(&cells, &mut out).unwrap();
        assert_eq!(out, b"ORD-1,,5\r\n");
    }

    #[test]
    fn test_no_quoting_applied() {
        // The format is unquoted by contract; an embedded delimiter is
        // written as-is even though it corrupts the row.
        let cells = vec!["A,B".to_string()];
        let mut out = Vec::new();
        write_row(&cells, &mut out).unwrap();
        assert_eq!(out, b"A,B\r\n");
    }
}
