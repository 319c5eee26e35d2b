//! Field extraction from the CAFCP station page.
//!
//! The station details endpoint returns the rendered station page as an HTML
//! fragment. Most fields sit in a table whose row order is fixed by the page
//! layout; we read them by position.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::StationStaticDetail;

use super::error::SossError;
use super::types::Location;

static RENEWABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".renewable-content p").expect("valid selector"));
static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));
static RENEWABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Renewable Hydrogen: ([0-9]+)%").expect("valid regex"));

/// Row index of each table field. Values live in the row's second cell.
const ROW_TYPE: usize = 2;
const ROW_STATUS: usize = 3;
const ROW_OPEN_DATE: usize = 4;
const ROW_PRESSURE: usize = 5;
const ROW_SOURCE: usize = 6;
const ROW_HOURS: usize = 7;
const ROW_WEBSITE: usize = 8;
const ROW_PHONE: usize = 9;

/// The eight descriptive fields read from the station table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFields {
    pub station_type: String,
    pub status: String,
    pub open_date: String,
    pub pressure: String,
    pub source: String,
    pub hours: String,
    pub website: String,
    pub phone: String,
}

/// Build a `StationStaticDetail` from the location block and page fragment.
pub fn station_detail(
    location: &Location,
    node_view: &str,
) -> Result<StationStaticDetail, SossError> {
    let page = Html::parse_fragment(node_view);
    let renewable = extract_renewable(&page)?;
    let table = extract_table_fields(&page);

    Ok(StationStaticDetail {
        longitude: parse_number(location.longitude.as_deref()),
        latitude: parse_number(location.latitude.as_deref()),
        country: location.country.clone().unwrap_or_default(),
        state: location.province.clone().unwrap_or_default(),
        city: location.city.clone().unwrap_or_default(),
        street: location.street.clone().unwrap_or_default(),
        zip: parse_number(location.postal_code.as_deref()),
        renewable,
        station_type: table.station_type,
        status: table.status,
        open_date: table.open_date,
        pressure: table.pressure,
        source: table.source,
        hours: table.hours,
        website: table.website,
        phone: table.phone,
    })
}

/// Read the renewable hydrogen percentage.
///
/// Text from every `.renewable-content p` is concatenated and the first
/// `Renewable Hydrogen: N%` match wins.
pub fn extract_renewable(page: &Html) -> Result<u32, SossError> {
    let text: String = page
        .select(&RENEWABLE_SELECTOR)
        .flat_map(|p| p.text())
        .collect();

    RENEWABLE_PATTERN
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(SossError::RenewableNotFound { text })
}

/// Read the descriptive fields from the first table, by row position.
///
/// Rows are counted over every `tr` in the table (0-based). A missing table,
/// row, cell or link gives an empty string for that field.
pub fn extract_table_fields(page: &Html) -> TableFields {
    let Some(table) = page.select(&TABLE_SELECTOR).next() else {
        return TableFields::default();
    };
    let rows: Vec<ElementRef<'_>> = table.select(&ROW_SELECTOR).collect();
    let value_cell = |row: usize| {
        rows.get(row)
            .and_then(|tr| tr.select(&CELL_SELECTOR).nth(1))
    };
    let cell_text = |row: usize| {
        let text = value_cell(row).map(|td| td.text().collect::<String>());
        trim_or_empty(text.as_deref())
    };

    let website = value_cell(ROW_WEBSITE)
        .and_then(|td| td.select(&LINK_SELECTOR).next())
        .and_then(|a| a.value().attr("href"));
    let phone = value_cell(ROW_PHONE).map(|td| td.inner_html());

    TableFields {
        station_type: cell_text(ROW_TYPE),
        status: cell_text(ROW_STATUS),
        open_date: cell_text(ROW_OPEN_DATE),
        pressure: cell_text(ROW_PRESSURE),
        source: cell_text(ROW_SOURCE),
        hours: cell_text(ROW_HOURS),
        website: trim_or_empty(website),
        phone: trim_or_empty(phone.as_deref()),
    }
}

/// Absent input maps to an empty string; present input is trimmed.
pub fn trim_or_empty(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Coerce an upstream string to a number the way the station page expects.
///
/// Absent or unparsable input is `NaN`; blank input is `0`.
pub fn parse_number(value: Option<&str>) -> f64 {
    match value.map(str::trim) {
        None => f64::NAN,
        Some("") => 0.0,
        Some(v) => v.parse().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = include_str!("../../data/fixtures/station_view.html");

    fn page(html: &str) -> Html {
        Html::parse_fragment(html)
    }

    fn table(rows: &[&str]) -> String {
        let rows: String = rows.iter().map(|r| format!("<tr>{r}</tr>")).collect();
        format!("<table>{rows}</table>")
    }

    #[test]
    fn renewable_from_fixture() {
        assert_eq!(extract_renewable(&page(PAGE)).unwrap(), 42);
    }

    #[test]
    fn renewable_first_match_wins() {
        let html = r#"<div class="renewable-content">
            <p>Renewable Hydrogen: 33%</p><p>Renewable Hydrogen: 100%</p>
        </div>"#;
        assert_eq!(extract_renewable(&page(html)).unwrap(), 33);
    }

    #[test]
    fn renewable_missing_pattern_is_error() {
        let html = r#"<div class="renewable-content"><p>Renewable Hydrogen: TBD</p></div>"#;
        let err = extract_renewable(&page(html)).unwrap_err();
        assert!(matches!(err, SossError::RenewableNotFound { ref text } if text == "Renewable Hydrogen: TBD"));
    }

    #[test]
    fn renewable_missing_element_is_error() {
        let html = "<p>Renewable Hydrogen: 50%</p>";
        assert!(extract_renewable(&page(html)).is_err());
    }

    #[test]
    fn renewable_overflow_is_error() {
        let html = r#"<div class="renewable-content"><p>Renewable Hydrogen: 99999999999%</p></div>"#;
        assert!(extract_renewable(&page(html)).is_err());
    }

    #[test]
    fn table_fields_from_fixture() {
        let fields = extract_table_fields(&page(PAGE));
        assert_eq!(
            fields,
            TableFields {
                station_type: "Retail".into(),
                status: "Open".into(),
                open_date: "June 2016".into(),
                pressure: "H70".into(),
                source: "Delivered gaseous".into(),
                hours: "24/7".into(),
                website: "https://www.example-hydrogen.com/stations".into(),
                phone: "(800) 555-0100<br>Option 2".into(),
            }
        );
    }

    #[test]
    fn phone_keeps_markup_other_fields_are_text() {
        let mut rows = vec!["<td>x</td><td>x</td>"; 10];
        let hours = "<td>Hours</td><td> <b>6am</b> - 10pm </td>";
        let phone = "<td>Phone</td><td> <b>555</b><br>1234 </td>";
        rows[ROW_HOURS] = hours;
        rows[ROW_PHONE] = phone;

        let fields = extract_table_fields(&page(&table(&rows)));
        assert_eq!(fields.hours, "6am - 10pm");
        assert_eq!(fields.phone, "<b>555</b><br>1234");
    }

    #[test]
    fn website_without_link_is_empty() {
        let mut rows = vec!["<td>x</td><td>x</td>"; 10];
        rows[ROW_WEBSITE] = "<td>Website</td><td>example.com</td>";

        let fields = extract_table_fields(&page(&table(&rows)));
        assert_eq!(fields.website, "");
    }

    #[test]
    fn website_href_is_trimmed() {
        let mut rows = vec!["<td>x</td><td>x</td>"; 10];
        rows[ROW_WEBSITE] = r#"<td>Website</td><td><a href=" https://h2.example/ ">Visit</a></td>"#;

        let fields = extract_table_fields(&page(&table(&rows)));
        assert_eq!(fields.website, "https://h2.example/");
    }

    #[test]
    fn short_table_gives_empty_fields() {
        let rows = ["<td>Name</td><td>A</td>", "<td>Addr</td><td>B</td>", "<td>Type</td><td>Retail</td>"];

        let fields = extract_table_fields(&page(&table(&rows)));
        assert_eq!(fields.station_type, "Retail");
        assert_eq!(fields.status, "");
        assert_eq!(fields.website, "");
        assert_eq!(fields.phone, "");
    }

    #[test]
    fn missing_second_cell_gives_empty_field() {
        let mut rows = vec!["<td>x</td><td>x</td>"; 10];
        rows[ROW_STATUS] = "<td>Status only</td>";

        let fields = extract_table_fields(&page(&table(&rows)));
        assert_eq!(fields.status, "");
        assert_eq!(fields.station_type, "x");
    }

    #[test]
    fn no_table_gives_default() {
        assert_eq!(extract_table_fields(&page("<p>nothing</p>")), TableFields::default());
    }

    #[test]
    fn only_first_table_is_read() {
        let mut first = vec!["<td>x</td><td>first</td>"; 10];
        first[ROW_TYPE] = "<td>Type</td><td>Retail</td>";
        let second = vec!["<td>x</td><td>second</td>"; 10];
        let html = format!("{}{}", table(&first), table(&second));

        let fields = extract_table_fields(&page(&html));
        assert_eq!(fields.station_type, "Retail");
        assert_eq!(fields.phone, "first");
    }

    #[test]
    fn trim_or_empty_contract() {
        assert_eq!(trim_or_empty(None), "");
        assert_eq!(trim_or_empty(Some("")), "");
        assert_eq!(trim_or_empty(Some("  24/7 \n")), "24/7");
    }

    #[test]
    fn parse_number_coercion() {
        assert!(parse_number(None).is_nan());
        assert!(parse_number(Some("n/a")).is_nan());
        assert_eq!(parse_number(Some("  ")), 0.0);
        assert_eq!(parse_number(Some(" -117.81 ")), -117.81);
        assert_eq!(parse_number(Some("91765")), 91765.0);
    }

    #[test]
    fn station_detail_combines_location_and_page() {
        let location = Location {
            longitude: Some("-117.8105".into()),
            latitude: Some("34.0086".into()),
            country: Some("us".into()),
            province: Some("CA".into()),
            city: Some("Diamond Bar".into()),
            street: Some("21865 E Copley Dr".into()),
            postal_code: Some("91765".into()),
            ..Location::default()
        };

        let detail = station_detail(&location, PAGE).unwrap();
        assert_eq!(detail.longitude, -117.8105);
        assert_eq!(detail.latitude, 34.0086);
        assert_eq!(detail.state, "CA");
        assert_eq!(detail.zip, 91765.0);
        assert_eq!(detail.renewable, 42);
        assert_eq!(detail.station_type, "Retail");
    }

    #[test]
    fn station_detail_missing_location_fields() {
        let detail = station_detail(&Location::default(), PAGE).unwrap();
        assert!(detail.longitude.is_nan());
        assert!(detail.zip.is_nan());
        assert_eq!(detail.country, "");
        assert_eq!(detail.street, "");
    }
}
