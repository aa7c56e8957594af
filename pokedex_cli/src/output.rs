use anyhow::Result;
use pokedex_lib::{DetailRecord, ListPage, Summary, TypeDescriptor};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unrecognized values fall back to a plain table.
    pub fn from_flag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "markdown" | "md" => Self::Markdown,
            _ => Self::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    #[serde(rename = "Types")]
    types: String,
}

#[derive(Tabled, Serialize)]
struct DetailRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct TypeRow {
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    name: String,
    #[tabled(rename = "Display Name")]
    #[serde(rename = "Display Name")]
    display_name: String,
}

// -- Row builders --

fn build_summary_rows(items: &[Summary]) -> Vec<SummaryRow> {
    items
        .iter()
        .map(|s| SummaryRow {
            id: s.id,
            name: s.display_name.clone(),
            types: join_or_dash(&s.types, " / "),
        })
        .collect()
}

fn build_detail_rows(record: &DetailRecord) -> Vec<DetailRow> {
    let abilities: Vec<String> = record
        .abilities
        .iter()
        .map(|a| {
            if a.is_hidden {
                format!("{} (hidden)", a.name)
            } else {
                a.name.clone()
            }
        })
        .collect();

    let mut rows = vec![
        row("ID", record.id.to_string()),
        row("Name", record.display_name.clone()),
        row("Types", join_or_dash(&record.types, " / ")),
        row("Genus", or_dash(record.genus.as_deref())),
        row("Height", format_measure(record.height, "m")),
        row("Weight", format_measure(record.weight, "kg")),
        row("Abilities", join_or_dash(&abilities, ", ")),
    ];
    rows.extend(
        record
            .stats
            .iter()
            .map(|s| row(&s.name, s.base_value.to_string())),
    );
    rows.extend([
        row("Color", record.color.clone()),
        row("Description", record.description.clone()),
        row("Sprite", or_dash(record.sprite_url.as_deref())),
        row("Artwork", or_dash(record.artwork_url.as_deref())),
    ]);
    rows
}

fn build_type_rows(types: &[TypeDescriptor]) -> Vec<TypeRow> {
    types
        .iter()
        .map(|t| TypeRow {
            name: t.name.clone(),
            display_name: t.display_name.clone(),
        })
        .collect()
}

fn row(field: &str, value: String) -> DetailRow {
    DetailRow {
        field: field.to_string(),
        value,
    }
}

// -- Rendering --

fn render_table<R: Tabled>(rows: Vec<R>, markdown: bool) -> String {
    let mut table = Table::new(rows);
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

fn write_csv<R: Serialize, W: std::io::Write>(rows: &[R], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_table(rows, false)),
        OutputFormat::Markdown => println!("{}", render_table(rows, true)),
        OutputFormat::Csv => write_csv(&rows, std::io::stdout())?,
        // JSON callers serialize the view model itself, not the rows.
        OutputFormat::Json => {}
    }
    Ok(())
}

/// Prints a list page. JSON output carries the paging metadata; the other
/// formats only the items.
pub fn print_page(page: &ListPage, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(page);
            Ok(())
        }
        _ => print_rows(build_summary_rows(&page.items), format),
    }
}

pub fn print_detail(record: &DetailRecord, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(record);
            Ok(())
        }
        _ => print_rows(build_detail_rows(record), format),
    }
}

pub fn print_types(types: &[TypeDescriptor], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&types);
            Ok(())
        }
        _ => print_rows(build_type_rows(types), format),
    }
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_measure(value: f64, unit: &str) -> String {
    format!("{:.1} {}", value, unit)
}

fn join_or_dash(values: &[String], separator: &str) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(separator)
    }
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_lib::detail::{merge_detail, SpeciesLookup};
    use pokedex_lib::types::{Pokemon, Species};

    fn load_pikachu() -> Pokemon {
        serde_json::from_str(include_str!(
            "../../pokeapi_client/tests/fixtures/pikachu.json"
        ))
        .unwrap()
    }

    fn load_pikachu_species() -> Species {
        serde_json::from_str(include_str!(
            "../../pokeapi_client/tests/fixtures/pikachu_species.json"
        ))
        .unwrap()
    }

    fn pikachu_record() -> DetailRecord {
        merge_detail(
            &load_pikachu(),
            &SpeciesLookup::Loaded(load_pikachu_species()),
        )
    }

    fn detail_value<'a>(rows: &'a [DetailRow], field: &str) -> &'a str {
        rows.iter()
            .find(|r| r.field == field)
            .map(|r| r.value.as_str())
            .unwrap_or_else(|| panic!("no row named {}", field))
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut buf = Vec::new();
        write_csv(rows, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // -- OutputFormat --

    #[test]
    fn test_output_format_from_flag() {
        assert_eq!(OutputFormat::from_flag("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_flag("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_flag("markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_flag("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_flag("xml"), OutputFormat::Table);
    }

    // -- format_measure --

    #[test]
    fn test_format_measure_keeps_one_decimal() {
        assert_eq!(format_measure(0.4, "m"), "0.4 m");
        assert_eq!(format_measure(6.0, "kg"), "6.0 kg");
        assert_eq!(format_measure(90.5, "kg"), "90.5 kg");
    }

    // -- Row builders --

    #[test]
    fn test_build_summary_rows_mapping() {
        let items = vec![
            Summary {
                id: 6,
                name: "charizard".to_string(),
                display_name: "Charizard".to_string(),
                types: vec!["fire".to_string(), "flying".to_string()],
            },
            Summary::minimal(132, "ditto"),
        ];
        let rows = build_summary_rows(&items);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 6);
        assert_eq!(rows[0].name, "Charizard");
        assert_eq!(rows[0].types, "fire / flying");
        assert_eq!(rows[1].types, "-");
    }

    #[test]
    fn test_build_summary_rows_empty() {
        assert!(build_summary_rows(&[]).is_empty());
    }

    #[test]
    fn test_build_detail_rows_mapping() {
        let rows = build_detail_rows(&pikachu_record());
        assert_eq!(detail_value(&rows, "ID"), "25");
        assert_eq!(detail_value(&rows, "Name"), "Pikachu");
        assert_eq!(detail_value(&rows, "Types"), "electric");
        assert_eq!(detail_value(&rows, "Height"), "0.4 m");
        assert_eq!(detail_value(&rows, "Weight"), "6.0 kg");
        assert_eq!(detail_value(&rows, "Abilities"), "static, lightning-rod (hidden)");
        assert_eq!(detail_value(&rows, "speed"), "90");
        assert_eq!(detail_value(&rows, "Color"), "yellow");
        assert_eq!(detail_value(&rows, "Genus"), "Mouse Pokémon");
    }

    #[test]
    fn test_build_detail_rows_defaults() {
        let record = merge_detail(&load_pikachu(), &SpeciesLookup::Unavailable);
        let rows = build_detail_rows(&record);
        assert_eq!(detail_value(&rows, "Genus"), "-");
        assert_eq!(detail_value(&rows, "Color"), "gray");
        assert_eq!(
            detail_value(&rows, "Description"),
            "No description available."
        );
    }

    #[test]
    fn test_build_detail_rows_missing_sprites() {
        let mut record = pikachu_record();
        record.sprite_url = None;
        record.artwork_url = None;
        let rows = build_detail_rows(&record);
        assert_eq!(detail_value(&rows, "Sprite"), "-");
        assert_eq!(detail_value(&rows, "Artwork"), "-");
    }

    #[test]
    fn test_build_type_rows_mapping() {
        let rows = build_type_rows(&[TypeDescriptor::new("fire"), TypeDescriptor::new("water")]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "fire");
        assert_eq!(rows[0].display_name, "Fire");
    }

    // -- CSV output --

    #[test]
    fn test_csv_summary_headers() {
        let csv = csv_from_rows(&build_summary_rows(&[Summary::minimal(1, "bulbasaur")]));
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("ID,Name,Types"));
        assert_eq!(lines.next(), Some("1,Bulbasaur,-"));
    }

    #[test]
    fn test_csv_detail_headers() {
        let csv = csv_from_rows(&build_detail_rows(&pikachu_record()));
        assert_eq!(csv.lines().next(), Some("Field,Value"));
    }

    #[test]
    fn test_csv_type_headers() {
        let csv = csv_from_rows(&build_type_rows(&[TypeDescriptor::new("fire")]));
        assert_eq!(csv.lines().next(), Some("Type,Display Name"));
    }

    #[test]
    fn test_csv_quotes_values_with_commas() {
        let csv = csv_from_rows(&build_detail_rows(&pikachu_record()));
        assert!(csv.contains("Abilities,\"static, lightning-rod (hidden)\""));
    }

    // -- Table output --

    #[test]
    fn test_markdown_table_style() {
        let rendered = render_table(build_summary_rows(&[Summary::minimal(25, "pikachu")]), true);
        assert!(rendered.starts_with("| ID |"));
        assert!(rendered.contains("Pikachu"));
    }

    #[test]
    fn test_plain_table_contains_headers() {
        let rendered = render_table(build_type_rows(&[TypeDescriptor::new("grass")]), false);
        assert!(rendered.contains("Display Name"));
        assert!(rendered.contains("Grass"));
    }
}
