//! Output formatting for simulation results.
//!
//! Supports table, JSON, and raw output formats.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use satnet_common::types::{Inclination, Satellite};

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Formatted table output.
    #[default]
    Table,
    /// JSON output.
    Json,
    /// Raw output, one `id: state: inclination: altitude` line per record.
    Raw,
}

/// Formats a satellite listing according to the specified format.
pub fn format_satellites(satellites: &[Satellite], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => satellites_table(satellites),
        OutputFormat::Json => satellites_json(satellites),
        OutputFormat::Raw => satellites_raw(satellites),
    }
}

/// Formats per-inclination counts according to the specified format.
pub fn format_counts(counts: &[(Inclination, usize)], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(vec!["Inclination", "Satellites"]);
            for (inclination, count) in counts {
                table.add_row(vec![
                    Cell::new(inclination),
                    Cell::new(count).set_alignment(CellAlignment::Right),
                ]);
            }
            table.to_string()
        }
        OutputFormat::Json => {
            let mut obj = serde_json::Map::new();
            for (inclination, count) in counts {
                obj.insert(inclination.to_string(), json!(count));
            }
            serde_json::to_string_pretty(&JsonValue::Object(obj))
                .unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Raw => counts
            .iter()
            .map(|(inclination, count)| format!("{inclination}: {count}\n"))
            .collect(),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// Formats the listing as a table.
fn satellites_table(satellites: &[Satellite]) -> String {
    let mut table = new_table();
    table.set_header(vec!["ID", "State", "Inclination", "Altitude"]);

    for satellite in satellites {
        table.add_row(vec![
            Cell::new(satellite.id()).set_alignment(CellAlignment::Right),
            Cell::new(satellite.state()),
            Cell::new(satellite.inclination()),
            Cell::new(satellite.altitude()),
        ]);
    }

    table.to_string()
}

/// Formats the listing as JSON, using the same labels as the other formats.
fn satellites_json(satellites: &[Satellite]) -> String {
    let rows: Vec<JsonValue> = satellites.iter().map(satellite_to_json).collect();
    serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
}

fn satellite_to_json(satellite: &Satellite) -> JsonValue {
    json!({
        "id": satellite.id().as_u32(),
        "state": satellite.state().as_str(),
        "inclination": satellite.inclination().as_str(),
        "altitude": satellite.altitude().as_str(),
    })
}

/// Formats the listing as raw lines.
fn satellites_raw(satellites: &[Satellite]) -> String {
    let mut output = String::new();
    for satellite in satellites {
        output.push_str(&satellite.to_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use satnet_common::types::{Altitude, SatId, SatState};

    fn make_test_fleet() -> Vec<Satellite> {
        vec![
            Satellite::new(SatId::new(10000), Altitude::Mi208, Inclination::I48),
            Satellite::new(SatId::new(10001), Altitude::Mi350, Inclination::I97)
                .with_state(SatState::Decaying),
        ]
    }

    #[test]
    fn test_format_table() {
        let output = format_satellites(&make_test_fleet(), OutputFormat::Table);
        assert!(output.contains("ID"));
        assert!(output.contains("Inclination"));
        assert!(output.contains("10001"));
        assert!(output.contains("Decaying"));
        assert!(output.contains("MI350"));
    }

    #[test]
    fn test_format_json() {
        let output = format_satellites(&make_test_fleet(), OutputFormat::Json);

        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["id"], 10000);
        assert_eq!(parsed[1]["state"], "Decaying");
        assert_eq!(parsed[1]["inclination"], "I97");
    }

    #[test]
    fn test_format_raw() {
        let output = format_satellites(&make_test_fleet(), OutputFormat::Raw);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec!["10000: Active: I48: MI208", "10001: Decaying: I97: MI350"]
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_satellites(&[], OutputFormat::Raw), "");
        assert_eq!(format_satellites(&[], OutputFormat::Json), "[]");
    }

    #[test]
    fn test_format_counts() {
        let counts = vec![(Inclination::I48, 3), (Inclination::I70, 0)];

        let raw = format_counts(&counts, OutputFormat::Raw);
        assert_eq!(raw, "I48: 3\nI70: 0\n");

        let parsed: serde_json::Value =
            serde_json::from_str(&format_counts(&counts, OutputFormat::Json)).unwrap();
        assert_eq!(parsed["I48"], 3);

        assert!(format_counts(&counts, OutputFormat::Table).contains("Satellites"));
    }

    #[test]
    fn test_output_format_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let wrapper: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(wrapper.format, OutputFormat::Json);
    }
}
