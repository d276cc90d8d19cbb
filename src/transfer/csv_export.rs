//! Writes a ledger and its overage events as a transfer table.

use std::io::Write;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::ledger::MonthlyLedger;
use crate::models::{MonthlyInput, OverageEvent};

use super::columns;

/// Writes the twelve months in calendar order, followed by the event row.
///
/// Amounts keep their full precision. The event columns and the event row
/// are always written, with empty slots past the last event, so importing
/// the table restores the log even when `events` is empty.
///
/// # Errors
///
/// * [`EngineError::TooManyOverageEvents`] if `events` has more entries than
///   the table has slots. Nothing is written in that case.
/// * [`EngineError::TransferError`] if the writer fails.
///
/// # Example
///
/// ```
/// use minijob_engine::ledger::MonthlyLedger;
/// use minijob_engine::transfer::export_csv;
///
/// let mut buffer = Vec::new();
/// export_csv(&MonthlyLedger::default(), &[], &mut buffer).unwrap();
///
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.starts_with("Monat,grundlohn,stunden,"));
/// assert!(text.contains("März,12.82,24,False,0,False,0,,,,,,"));
/// assert!(text.ends_with("Ueberschreitungen,,,,,,,,,,,,\n"));
/// ```
pub fn export_csv<W: Write>(
    ledger: &MonthlyLedger,
    events: &[OverageEvent],
    writer: W,
) -> EngineResult<()> {
    if events.len() > columns::EVENT_SLOTS {
        return Err(EngineError::TooManyOverageEvents {
            count: events.len(),
            max: columns::EVENT_SLOTS,
        });
    }

    let event_width = columns::EVENT_SLOTS * 2;

    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = columns::REQUIRED.iter().map(|c| c.to_string()).collect();
    for slot in 0..columns::EVENT_SLOTS {
        header.push(columns::event_month(slot));
        header.push(columns::event_year(slot));
    }
    csv_writer.write_record(&header)?;

    for (month, input) in ledger.iter() {
        let mut record = month_record(month.german_name(), input);
        record.extend(std::iter::repeat_n(String::new(), event_width));
        csv_writer.write_record(&record)?;
    }

    let mut record = vec![columns::EVENT_ROW_KEY.to_string()];
    record.extend(std::iter::repeat_n(String::new(), columns::REQUIRED.len() - 1));
    for slot in 0..columns::EVENT_SLOTS {
        match events.get(slot) {
            Some(event) => {
                record.push(event.month_index().to_string());
                record.push(event.year().to_string());
            }
            None => {
                record.push(String::new());
                record.push(String::new());
            }
        }
    }
    csv_writer.write_record(&record)?;

    csv_writer.flush().map_err(|e| EngineError::TransferError {
        message: e.to_string(),
    })?;

    info!(events = events.len(), "Exported ledger");
    Ok(())
}

fn month_record(name: &str, input: &MonthlyInput) -> Vec<String> {
    vec![
        name.to_string(),
        input.hourly_wage.to_string(),
        input.hours.to_string(),
        columns::format_flag(input.sunday_holiday_surcharge_enabled).to_string(),
        input.sunday_holiday_surcharge_hours.to_string(),
        columns::format_flag(input.night_surcharge_enabled).to_string(),
        input.night_surcharge_hours.to_string(),
    ]
}
