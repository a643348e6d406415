/// Types that can be exported as CSV rows
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values for one row, in header order
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds a comma-separated document with every cell quoted.
pub fn build_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut content = String::new();

    content.push_str(&join_row(T::headers().into_iter().map(str::to_string)));
    content.push('\n');

    for row in rows {
        content.push_str(&join_row(row.to_csv_row().into_iter()));
        content.push('\n');
    }

    content
}

fn join_row(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| quote_cell(&cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Wraps a cell in quotes, doubling embedded quotes
fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Qty"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_csv_quotes_every_cell() {
        let csv = build_csv(&[Row("Lay's \"Classic\"", 3), Row("Pen, blue", 10)]);
        assert_eq!(
            csv,
            "\"Name\",\"Qty\"\n\"Lay's \"\"Classic\"\"\",\"3\"\n\"Pen, blue\",\"10\"\n"
        );
    }

    #[test]
    fn test_build_csv_without_rows_keeps_header() {
        let csv = build_csv::<Row>(&[]);
        assert_eq!(csv, "\"Name\",\"Qty\"\n");
    }
}
