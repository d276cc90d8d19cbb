//! CSV transfer of a ledger and its overage events.
//!
//! The table has one row per month keyed by German month name in the
//! `Monat` column. A `Ueberschreitungen` row carries up to three overage
//! events as paired `ueberschreitung_N_monat` (0-based month index) and
//! `ueberschreitung_N_jahr` columns. Export always writes that row; import
//! treats it as optional and leaves the log alone when it is absent.
//!
//! ```text
//! Monat,grundlohn,stunden,se_zuschlag,se_zuschlag_stunden,nacht_zuschlag,nacht_zuschlag_stunden,ueberschreitung_1_monat,...
//! Januar,12.82,24,False,0,False,0,,,,,,
//! ...
//! Ueberschreitungen,,,,,,,5,2025,,,,
//! ```

pub mod columns;
mod csv_export;
mod csv_import;

pub use csv_export::export_csv;
pub use csv_import::{ImportReport, import_csv};
