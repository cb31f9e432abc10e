//! Flat-File-Codec für die Besucht-Liste: eine Länder-Kennung pro Zeile.
//!
//! Nur Parsen und Formatieren — Dateisystem-Zugriffe liegen in den
//! Use-Cases.

/// Parst den Dateiinhalt zu einer ID-Liste.
///
/// Leerzeilen und umgebender Randraum werden ignoriert; die Zeilen-
/// Reihenfolge bleibt erhalten.
pub fn parse_visited_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Formatiert die IDs als zeilenweise Datei (kompletter Overwrite, kein Append).
pub fn format_visited_list<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut output = String::new();
    for id in ids {
        output.push_str(id);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines_and_whitespace() {
        let parsed = parse_visited_list("USA\n\n  CAN  \nMEX\n");
        assert_eq!(parsed, vec!["USA", "CAN", "MEX"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_visited_list("").is_empty());
        assert!(parse_visited_list("\n\n").is_empty());
    }

    #[test]
    fn test_format_one_id_per_line() {
        let text = format_visited_list(["USA", "CAN"]);
        assert_eq!(text, "USA\nCAN\n");
    }

    #[test]
    fn test_format_empty_list_is_empty_file() {
        assert_eq!(format_visited_list(std::iter::empty()), "");
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let ids = vec!["DEU", "FRA", "ITA"];
        let parsed = parse_visited_list(&format_visited_list(ids.iter().copied()));
        assert_eq!(parsed, ids);
    }
}
