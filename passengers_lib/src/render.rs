//! Row building and HTML fragments for the passenger table.

use std::io::Cursor;

use passengers_api::types::{PassengerRecord, Verbatim};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use serde_json::Value;

use crate::labels::Labels;

/// Number of columns a passenger row has; message rows span all of them.
pub const COLUMN_COUNT: usize = 7;

pub const COLUMN_HEADERS: [&str; COLUMN_COUNT] =
    ["PassengerId", "Name", "Sex", "Age", "Survived", "Pclass", "Fare"];

const ROW_CLASS: &str = "border-b border-gray-200 hover:bg-gray-100";
const CELL_NOWRAP_CLASS: &str = "py-3 px-6 text-left whitespace-nowrap";
const CELL_CLASS: &str = "py-3 px-6 text-left";
const MESSAGE_CLASS: &str = "py-3 px-6 text-center";
const ERROR_CLASS: &str = "py-3 px-6 text-center text-red-500";

/// Display values of one passenger, already localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerRow {
    #[serde(rename = "PassengerId")]
    pub passenger_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Survived")]
    pub survived: String,
    #[serde(rename = "Pclass")]
    pub pclass: String,
    #[serde(rename = "Fare")]
    pub fare: String,
}

impl PassengerRow {
    pub fn cells(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.passenger_id,
            &self.name,
            &self.sex,
            &self.age,
            &self.survived,
            &self.pclass,
            &self.fare,
        ]
    }
}

/// One row of the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Passenger(PassengerRow),
    /// Full-width informational row ("no data found").
    Placeholder(String),
    /// Full-width failure row.
    Error(String),
}

impl TableRow {
    /// The row's text, cells joined by tabs. Handy for logs and assertions.
    pub fn text(&self) -> String {
        match self {
            Self::Passenger(row) => row.cells().join("\t"),
            Self::Placeholder(msg) | Self::Error(msg) => msg.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Formats a number for display. Integral values lose their fractional
/// part and the rest use the shortest exact form. Magnitudes of `1e21` and
/// above, or below `1e-6`, switch to exponent notation with an explicit
/// sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    value.to_string()
}

/// Text of a verbatim column. `missing` stands in for an absent or `null`
/// value; strings are shown unquoted and other JSON values as JSON.
fn cell_text(cell: &Verbatim, missing: &str) -> String {
    match cell.value() {
        None => missing.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        },
        Some(other) => other.to_string(),
    }
}

pub fn passenger_row(record: &PassengerRecord, labels: &Labels) -> PassengerRow {
    let missing = labels.missing_value.as_str();
    PassengerRow {
        passenger_id: cell_text(&record.passenger_id, missing),
        name: cell_text(&record.name, missing),
        sex: cell_text(&record.sex, missing),
        age: cell_text(&record.age, &labels.age_placeholder),
        survived: labels.survived(record.survived()).to_string(),
        pclass: cell_text(&record.pclass, missing),
        fare: cell_text(&record.fare, missing),
    }
}

pub fn passenger_rows(records: &[PassengerRecord], labels: &Labels) -> Vec<TableRow> {
    records
        .iter()
        .map(|r| TableRow::Passenger(passenger_row(r, labels)))
        .collect()
}

pub fn placeholder_row(labels: &Labels) -> TableRow {
    TableRow::Placeholder(labels.no_data.clone())
}

pub fn error_row(labels: &Labels, detail: &str) -> TableRow {
    TableRow::Error(labels.error_message(detail))
}

fn write_cell<W: std::io::Write>(
    writer: &mut Writer<W>,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<(), quick_xml::Error> {
    let start = BytesStart::new("td").with_attributes(attributes.iter().copied());
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("td")))?;
    Ok(())
}

fn write_row<W: std::io::Write>(writer: &mut Writer<W>, row: &TableRow) -> Result<(), quick_xml::Error> {
    let colspan = COLUMN_COUNT.to_string();
    match row {
        TableRow::Passenger(p) => {
            writer.write_event(Event::Start(
                BytesStart::new("tr").with_attributes([("class", ROW_CLASS)]),
            ))?;
            for (i, cell) in p.cells().iter().enumerate() {
                let class = if i < 2 { CELL_NOWRAP_CLASS } else { CELL_CLASS };
                write_cell(writer, &[("class", class)], cell)?;
            }
        }
        TableRow::Placeholder(msg) => {
            writer.write_event(Event::Start(BytesStart::new("tr")))?;
            write_cell(writer, &[("colspan", colspan.as_str()), ("class", MESSAGE_CLASS)], msg)?;
        }
        TableRow::Error(msg) => {
            writer.write_event(Event::Start(BytesStart::new("tr")))?;
            write_cell(writer, &[("colspan", colspan.as_str()), ("class", ERROR_CLASS)], msg)?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new("tr")))?;
    Ok(())
}

/// Renders a single `<tr>` fragment. Cell text is escaped.
pub fn row_html(row: &TableRow) -> Result<String, quick_xml::Error> {
    rows_html(std::slice::from_ref(row))
}

/// Renders rows back to back, suitable as the inner HTML of a `<tbody>`.
pub fn rows_html(rows: &[TableRow]) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    for row in rows {
        write_row(&mut writer, row)?;
    }
    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
