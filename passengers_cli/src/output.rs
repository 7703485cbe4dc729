use anyhow::Result;
use passengers_lib::render::rows_html;
use passengers_lib::types::ServiceStatus;
use passengers_lib::{PassengerRow, TableRow};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Html,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct PassengerView {
    #[tabled(rename = "PassengerId")]
    #[serde(rename = "PassengerId")]
    passenger_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Sex")]
    #[serde(rename = "Sex")]
    sex: String,
    #[tabled(rename = "Age")]
    #[serde(rename = "Age")]
    age: String,
    #[tabled(rename = "Survived")]
    #[serde(rename = "Survived")]
    survived: String,
    #[tabled(rename = "Pclass")]
    #[serde(rename = "Pclass")]
    pclass: String,
    #[tabled(rename = "Fare")]
    #[serde(rename = "Fare")]
    fare: String,
}

#[derive(Tabled, Serialize)]
struct StatusView {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Framework")]
    framework: String,
}

/// JSON shape of one rendered row.
#[derive(Serialize)]
#[serde(untagged)]
enum RowJson<'a> {
    Passenger(&'a PassengerRow),
    Message { message: &'a str },
    Error { error: &'a str },
}

// -- Row builders --

fn build_passenger_views(rows: &[TableRow]) -> Vec<PassengerView> {
    rows.iter()
        .filter_map(|row| match row {
            TableRow::Passenger(p) => Some(PassengerView {
                passenger_id: p.passenger_id.clone(),
                name: p.name.clone(),
                sex: p.sex.clone(),
                age: p.age.clone(),
                survived: p.survived.clone(),
                pclass: p.pclass.clone(),
                fare: p.fare.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// Texts of the full-width rows (placeholder or error).
fn message_lines(rows: &[TableRow]) -> Vec<String> {
    rows.iter()
        .filter(|row| !matches!(row, TableRow::Passenger(_)))
        .map(TableRow::text)
        .collect()
}

fn build_rows_json(rows: &[TableRow]) -> Vec<RowJson<'_>> {
    rows.iter()
        .map(|row| match row {
            TableRow::Passenger(p) => RowJson::Passenger(p),
            TableRow::Placeholder(msg) => RowJson::Message { message: msg },
            TableRow::Error(msg) => RowJson::Error { error: msg },
        })
        .collect()
}

fn build_status_view(status: &ServiceStatus) -> StatusView {
    StatusView {
        status: status.status.clone(),
        framework: status.framework.clone().unwrap_or_default(),
    }
}

// -- Passenger table output --

pub fn print_rows(rows: &[TableRow], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_rows_table(rows, false),
        OutputFormat::Markdown => print_rows_table(rows, true),
        OutputFormat::Csv => print_rows_csv(rows)?,
        OutputFormat::Json => print_json(&build_rows_json(rows)),
        OutputFormat::Html => println!("{}", rows_html(rows)?),
    }
    Ok(())
}

fn print_rows_table(rows: &[TableRow], markdown: bool) {
    let views = build_passenger_views(rows);
    if !views.is_empty() {
        let mut table = Table::new(views);
        if markdown {
            table.with(Style::markdown());
        }
        println!("{}", table);
    }
    for line in message_lines(rows) {
        println!("{}", line);
    }
}

fn print_rows_csv(rows: &[TableRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for view in build_passenger_views(rows) {
        wtr.serialize(view)?;
    }
    wtr.flush()?;
    for line in message_lines(rows) {
        eprintln!("{}", line);
    }
    Ok(())
}

// -- Status output --

pub fn print_status(status: &ServiceStatus, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(status),
        OutputFormat::Markdown => {
            let mut table = Table::new([build_status_view(status)]);
            table.with(Style::markdown());
            println!("{}", table);
        }
        _ => println!("{}", Table::new([build_status_view(status)])),
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passengers_lib::render::passenger_rows;
    use passengers_lib::types::ResponsePayload;
    use passengers_lib::Labels;

    fn load_rows_fixture() -> Vec<TableRow> {
        let json_str = include_str!("../../passengers_api/tests/fixtures/passengers.json");
        let payload: ResponsePayload = serde_json::from_str(json_str).unwrap();
        passenger_rows(payload.records(), &Labels::en())
    }

    // -- Row builder tests --

    #[test]
    fn test_build_passenger_views_mapping() {
        let rows = load_rows_fixture();
        let views = build_passenger_views(&rows);
        assert_eq!(views.len(), 3);

        let view = &views[0];
        assert_eq!(view.passenger_id, "1");
        assert_eq!(view.name, "Braund, Mr. Owen Harris");
        assert_eq!(view.age, "22");
        assert_eq!(view.survived, "No");
        assert_eq!(view.fare, "7.25");
        assert_eq!(views[2].age, "N/A");
    }

    #[test]
    fn test_message_rows_are_not_views() {
        let rows = vec![TableRow::Error("Failed to load data: boom".to_string())];
        assert!(build_passenger_views(&rows).is_empty());
        assert_eq!(message_lines(&rows), vec!["Failed to load data: boom"]);
    }

    // -- CSV output tests --

    #[test]
    fn test_csv_headers() {
        let views = build_passenger_views(&load_rows_fixture());
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for view in views {
            wtr.serialize(view).unwrap();
        }
        wtr.flush().unwrap();
        let csv = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "PassengerId,Name,Sex,Age,Survived,Pclass,Fare");
        assert_eq!(csv.lines().count(), 4);
    }

    // -- JSON output tests --

    #[test]
    fn test_json_passenger_rows() {
        let rows = load_rows_fixture();
        let val = serde_json::to_value(build_rows_json(&rows)).unwrap();
        assert_eq!(val.as_array().unwrap().len(), 3);
        assert_eq!(val[0]["Name"], "Braund, Mr. Owen Harris");
        assert_eq!(val[1]["Survived"], "Yes");
    }

    #[test]
    fn test_json_message_rows() {
        let rows = vec![TableRow::Placeholder("No passenger data found.".to_string())];
        let val = serde_json::to_value(build_rows_json(&rows)).unwrap();
        assert_eq!(val[0]["message"], "No passenger data found.");

        let rows = vec![TableRow::Error("Failed to load data: x".to_string())];
        let val = serde_json::to_value(build_rows_json(&rows)).unwrap();
        assert_eq!(val[0]["error"], "Failed to load data: x");
    }

    // -- Markdown output tests --

    #[test]
    fn test_markdown_headers() {
        let views = build_passenger_views(&load_rows_fixture());
        let mut table = Table::new(&views);
        table.with(Style::markdown());
        let md = table.to_string();

        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("PassengerId"));
        assert!(header_line.contains("Survived"));
        assert!(md.contains("---"));
    }

    #[test]
    fn test_status_view_missing_framework() {
        let status = ServiceStatus {
            status: "API service is running".to_string(),
            framework: None,
        };
        let view = build_status_view(&status);
        assert_eq!(view.framework, "");
    }
}
