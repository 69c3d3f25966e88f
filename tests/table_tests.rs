use timepunch::utils::table::Table;
use unicode_width::UnicodeWidthStr;

/// Display column where `needle` starts on `line`.
fn column_of(line: &str, needle: &str) -> usize {
    let byte = line.find(needle).unwrap();
    UnicodeWidthStr::width(&line[..byte])
}

#[test]
fn test_table_aligns_ascii_columns() {
    let mut table = Table::new(&["Date", "Hours"]);
    table.add_row(vec!["2020-01-01".into(), "08:00".into()]);
    table.add_row(vec!["x".into(), "04:00".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(column_of(lines[0], "Hours"), 12);
    assert_eq!(column_of(lines[1], "08:00"), 12);
    assert_eq!(column_of(lines[2], "04:00"), 12);
}

#[test]
fn test_table_aligns_wide_characters() {
    let mut table = Table::new(&["Reason", "Hours"]);
    table.add_row(vec!["元日元日".into(), "08:00".into()]);
    table.add_row(vec!["abcdefg".into(), "08:00".into()]);
    table.add_row(vec!["🎉".into(), "04:00".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    // widest cell is 元日元日, 8 columns
    assert_eq!(column_of(lines[0], "Hours"), 10);
    assert_eq!(column_of(lines[1], "08:00"), 10);
    assert_eq!(column_of(lines[2], "08:00"), 10);
    assert_eq!(column_of(lines[3], "04:00"), 10);
}

#[test]
fn test_table_short_rows_and_trailing_space() {
    let mut table = Table::new(&["A", "B"]);
    assert!(table.is_empty());
    table.add_row(vec!["only".into()]);

    let out = table.render();
    assert!(!table.is_empty());
    assert_eq!(out, "A     B\nonly\n");
}
