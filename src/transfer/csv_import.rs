//! Reads a transfer table back into a ledger and an overage log.

use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::MinijobConfig;
use crate::error::{EngineError, EngineResult};
use crate::ledger::MonthlyLedger;
use crate::models::{Month, MonthlyInput, OverageEvent};
use crate::tracking::OverageLog;

use super::columns;

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportReport {
    /// Months whose input was replaced, in file order.
    pub months_imported: Vec<Month>,
    /// Number of overage events read from the event row.
    pub events_imported: usize,
    /// Whether the file carried an event row and the log was replaced.
    pub log_replaced: bool,
    /// Rows that were skipped, one message each.
    pub warnings: Vec<String>,
}

/// Header positions of the columns an import reads.
struct ColumnIndex {
    positions: HashMap<String, usize>,
    /// `(slot, month position, year position)` for every event slot present.
    event_slots: Vec<(usize, usize, usize)>,
}

impl ColumnIndex {
    /// Resolves every required column and every event slot present in the
    /// header. All missing columns are reported together.
    fn resolve(header: &csv::StringRecord) -> EngineResult<Self> {
        let positions: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();

        let mut missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|c| !positions.contains_key(**c))
            .map(|c| c.to_string())
            .collect();

        let mut event_slots = Vec::new();
        for slot in 0..columns::EVENT_SLOTS {
            let month_column = columns::event_month(slot);
            let year_column = columns::event_year(slot);
            match (positions.get(&month_column), positions.get(&year_column)) {
                (Some(&m), Some(&y)) => event_slots.push((slot, m, y)),
                (Some(_), None) => missing.push(year_column),
                (None, Some(_)) => missing.push(month_column),
                (None, None) => {}
            }
        }

        if !missing.is_empty() {
            return Err(EngineError::MissingColumns { columns: missing });
        }

        Ok(Self {
            positions,
            event_slots,
        })
    }

    fn field<'r>(&self, record: &'r csv::StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
    }
}

/// Imports a transfer table.
///
/// The header is checked before any row is read. The import is
/// all-or-nothing: rows are applied to copies of `ledger` and `log`, which
/// replace the originals only once every row has been accepted.
///
/// Month rows are keyed by German month name; a row with an unknown name is
/// skipped and reported in [`ImportReport::warnings`]. Months absent from the
/// table keep their current input. Flags compare case-insensitively against
/// `True`/`False`. The event row, when present, replaces the whole log.
///
/// # Errors
///
/// * [`EngineError::MissingColumns`] listing every absent required column,
///   or the partner of a half-present event column pair.
/// * [`EngineError::MalformedRecord`] for an unparsable value or a value that
///   violates a [`MonthlyInput`] invariant, with the 1-based data row.
/// * [`EngineError::TransferError`] if the table itself cannot be read.
///
/// # Example
///
/// ```
/// use minijob_engine::config::MinijobConfig;
/// use minijob_engine::ledger::MonthlyLedger;
/// use minijob_engine::models::Month;
/// use minijob_engine::tracking::OverageLog;
/// use minijob_engine::transfer::import_csv;
/// use rust_decimal::Decimal;
///
/// let table = "\
/// Monat,grundlohn,stunden,se_zuschlag,se_zuschlag_stunden,nacht_zuschlag,nacht_zuschlag_stunden
/// Mai,14.00,30,true,5,FALSE,0
/// ";
/// let config = MinijobConfig::reference();
/// let mut ledger = MonthlyLedger::new(&config);
/// let mut log = OverageLog::new();
///
/// let report = import_csv(table.as_bytes(), &config, &mut ledger, &mut log).unwrap();
///
/// assert_eq!(report.months_imported, vec![Month::May]);
/// assert_eq!(ledger.get(Month::May).hours, Decimal::new(30, 0));
/// assert!(ledger.get(Month::May).sunday_holiday_surcharge_enabled);
/// ```
pub fn import_csv<R: Read>(
    reader: R,
    config: &MinijobConfig,
    ledger: &mut MonthlyLedger,
    log: &mut OverageLog,
) -> EngineResult<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header = csv_reader.headers()?.clone();
    let index = ColumnIndex::resolve(&header)?;

    let mut staged_ledger = ledger.clone();
    let mut staged_events: Option<Vec<OverageEvent>> = None;
    let mut report = ImportReport::default();

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        let key = index.field(&record, columns::MONTH);

        if key == columns::EVENT_ROW_KEY {
            staged_events = Some(parse_events(&index, &record, row)?);
            continue;
        }

        let Some(month) = Month::from_german_name(key) else {
            warn!(row, month = key, "Skipping row with unknown month");
            report
                .warnings
                .push(format!("Row {}: unknown month '{}' skipped", row, key));
            continue;
        };

        let input = parse_month(&index, &record, row)?;
        staged_ledger
            .replace(month, input, config)
            .map_err(|e| into_malformed(e, row))?;
        report.months_imported.push(month);
    }

    *ledger = staged_ledger;
    if let Some(events) = staged_events {
        report.events_imported = events.len();
        report.log_replaced = true;
        log.replace_all(events);
    }

    info!(
        months = report.months_imported.len(),
        events = report.events_imported,
        skipped = report.warnings.len(),
        "Imported ledger"
    );
    Ok(report)
}

fn parse_month(
    index: &ColumnIndex,
    record: &csv::StringRecord,
    row: usize,
) -> EngineResult<MonthlyInput> {
    Ok(MonthlyInput {
        hourly_wage: parse_decimal(index, record, row, columns::HOURLY_WAGE)?,
        hours: parse_decimal(index, record, row, columns::HOURS)?,
        sunday_holiday_surcharge_enabled: parse_flag(
            index,
            record,
            row,
            columns::SUNDAY_HOLIDAY_ENABLED,
        )?,
        sunday_holiday_surcharge_hours: parse_decimal(
            index,
            record,
            row,
            columns::SUNDAY_HOLIDAY_HOURS,
        )?,
        night_surcharge_enabled: parse_flag(index, record, row, columns::NIGHT_ENABLED)?,
        night_surcharge_hours: parse_decimal(index, record, row, columns::NIGHT_HOURS)?,
    })
}

fn parse_events(
    index: &ColumnIndex,
    record: &csv::StringRecord,
    row: usize,
) -> EngineResult<Vec<OverageEvent>> {
    let mut events = Vec::new();
    for &(slot, month_position, year_position) in &index.event_slots {
        let month_value = record.get(month_position).unwrap_or("");
        let year_value = record.get(year_position).unwrap_or("");

        match (month_value.is_empty(), year_value.is_empty()) {
            (true, true) => continue,
            (false, true) => {
                return Err(malformed(row, &columns::event_year(slot), "year is missing"));
            }
            (true, false) => {
                return Err(malformed(row, &columns::event_month(slot), "month is missing"));
            }
            (false, false) => {}
        }

        let month_column = columns::event_month(slot);
        let month_index = month_value.parse::<u8>().map_err(|_| {
            malformed(
                row,
                &month_column,
                format!("expected a month index 0-11, got '{}'", month_value),
            )
        })?;
        let year = year_value.parse::<i32>().map_err(|_| {
            malformed(
                row,
                &columns::event_year(slot),
                format!("expected a year, got '{}'", year_value),
            )
        })?;
        let event = OverageEvent::new(month_index, year).map_err(|e| match e {
            EngineError::InvalidInput { field, message } if field == "year" => {
                malformed(row, &columns::event_year(slot), message)
            }
            EngineError::InvalidInput { message, .. } => malformed(row, &month_column, message),
            other => other,
        })?;
        events.push(event);
    }
    Ok(events)
}

fn parse_decimal(
    index: &ColumnIndex,
    record: &csv::StringRecord,
    row: usize,
    column: &str,
) -> EngineResult<Decimal> {
    let value = index.field(record, column);
    Decimal::from_str(value)
        .map_err(|_| malformed(row, column, format!("expected a number, got '{}'", value)))
}

fn parse_flag(
    index: &ColumnIndex,
    record: &csv::StringRecord,
    row: usize,
    column: &str,
) -> EngineResult<bool> {
    let value = index.field(record, column);
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(malformed(
            row,
            column,
            format!("expected True or False, got '{}'", value),
        ))
    }
}

fn malformed(row: usize, column: &str, message: impl Into<String>) -> EngineError {
    EngineError::MalformedRecord {
        row,
        column: column.to_string(),
        message: message.into(),
    }
}

fn into_malformed(error: EngineError, row: usize) -> EngineError {
    match error {
        EngineError::InvalidInput { field, message } => {
            malformed(row, columns::for_field(&field), message)
        }
        other => other,
    }
}
