//! Core scalar types shared by the record model and the stores.

/// System-assigned identifier of an aircraft type or airline.
pub type RecordId = u32;

/// Calendar year (introduction, founding, purchase, report reference).
pub type Year = i32;
