//! Data model: raw input cells and rows, column schema, normalized records

mod cell;
mod record;
mod row;
mod schema;

pub use cell::{RawCell, NA_TOKEN};
pub use record::{NormalizedRecord, Sex, Status, XrayFinding};
pub use row::{raw_cell, RawRow, RawTable};
pub use schema::{BoolCoding, Column, FieldClass};
