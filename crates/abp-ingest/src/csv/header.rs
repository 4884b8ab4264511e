//! CSV header parsing.

/// Column names read from the first line of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Required columns not present in the header, in the order given.
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|column| !self.contains(column))
            .collect()
    }

    /// First column name that appears more than once.
    pub fn first_duplicate(&self) -> Option<&str> {
        self.columns
            .iter()
            .enumerate()
            .find(|(idx, name)| self.columns[..*idx].contains(name))
            .map(|(_, name)| name.as_str())
    }
}

/// Parses a CSV line into fields, handling quoted values.
///
/// Names are kept as written; the DataFrame reader does not trim them either.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> CsvHeaders {
        CsvHeaders::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_missing_columns_preserves_order() {
        let h = headers(&["UPRN", "CATEGORY"]);
        assert_eq!(
            h.missing_columns(&["POSTCODE", "UPRN", "EASTING"]),
            vec!["POSTCODE", "EASTING"]
        );
        assert!(h.missing_columns(&["UPRN"]).is_empty());
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(headers(&["A", "B", "A"]).first_duplicate(), Some("A"));
        assert_eq!(headers(&["A", "B"]).first_duplicate(), None);
    }

    #[test]
    fn test_parse_csv_line_simple() {
        let result = parse_csv_line("UPRN,POSTCODE,CATEGORY");
        assert_eq!(result, vec!["UPRN", "POSTCODE", "CATEGORY"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"BUILDING, NAME\",b,c");
        assert_eq!(result, vec!["BUILDING, NAME", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"the \"\"old\"\" mill\",b");
        assert_eq!(result, vec!["the \"old\" mill", "b"]);
    }

    #[test]
    fn test_parse_csv_line_keeps_whitespace() {
        let result = parse_csv_line("UPRN, UDPRN");
        assert_eq!(result, vec!["UPRN", " UDPRN"]);
    }
}
