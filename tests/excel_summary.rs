use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use je_summarizer::runner::{summarize, SummarizerConfig};

fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("je-summarizer-{name}-{nanos}.xlsx"))
}

fn write_je_samples_xlsx(path: &PathBuf) {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Samples").unwrap();

    // header
    ws.write_string(0, 0, "entry_id").unwrap();
    ws.write_string(0, 1, "post_dt").unwrap();
    ws.write_string(0, 2, "amount").unwrap();
    ws.write_string(0, 3, "memo").unwrap();

    // row 1
    ws.write_number(1, 0, 1).unwrap();
    ws.write_string(1, 1, "2023-01-05").unwrap();
    ws.write_number(1, 2, 10).unwrap();
    ws.write_string(1, 3, "accrual").unwrap();

    // row 2
    ws.write_number(2, 0, 2).unwrap();
    ws.write_string(2, 1, "2023-01-07").unwrap();
    ws.write_number(2, 2, 20).unwrap();

    // row 3
    ws.write_number(3, 0, 3).unwrap();
    ws.write_string(3, 1, "not-a-date").unwrap();
    ws.write_number(3, 2, 30).unwrap();
    ws.write_string(3, 3, "reversal").unwrap();

    wb.save(path).unwrap();
}

fn write_second_sheet_xlsx(path: &PathBuf) {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();

    let ws1 = wb.add_worksheet();
    ws1.set_name("First").unwrap();
    ws1.write_string(0, 0, "a").unwrap();
    ws1.write_number(1, 0, 1).unwrap();

    let ws2 = wb.add_worksheet();
    ws2.set_name("Second").unwrap();
    ws2.write_string(0, 0, "b").unwrap();
    ws2.write_number(1, 0, 2).unwrap();
    ws2.write_number(2, 0, 4).unwrap();

    wb.save(path).unwrap();
}

#[test]
fn summarize_xlsx_first_sheet() {
    let path = tmp_file("workbook");
    write_je_samples_xlsx(&path);

    let config = SummarizerConfig {
        input_path: path.clone(),
        ..Default::default()
    };
    let summary = summarize(&config).unwrap();

    assert_eq!(summary.row_count, 3);
    assert_eq!(summary.columns, vec!["entry_id", "post_dt", "amount", "memo"]);

    let range = &summary.date_ranges["post_dt"];
    assert_eq!(range.min, "2023-01-05");
    assert_eq!(range.max, "2023-01-07");
    assert_eq!(range.non_null, 2);

    let amount = &summary.numeric_descriptive_stats["amount"];
    assert_eq!(amount.count, 3);
    assert_eq!(amount.mean, 20.0);

    // The empty memo cell in row 2 counts as missing.
    assert_eq!(summary.missing_counts["memo"], 1);

    let _ = fs::remove_file(&path);
}

#[test]
fn summarize_xlsx_named_sheet() {
    let path = tmp_file("sheets");
    write_second_sheet_xlsx(&path);

    let config = SummarizerConfig {
        input_path: path.clone(),
        sheet_name: Some("Second".to_string()),
        ..Default::default()
    };
    let summary = summarize(&config).unwrap();
    assert_eq!(summary.columns, vec!["b"]);
    assert_eq!(summary.row_count, 2);
    assert_eq!(summary.numeric_descriptive_stats["b"].max, 4.0);

    let _ = fs::remove_file(&path);
}

#[test]
fn default_sheet_is_the_first_one() {
    let path = tmp_file("first-sheet");
    write_second_sheet_xlsx(&path);

    let config = SummarizerConfig {
        input_path: path.clone(),
        ..Default::default()
    };
    let summary = summarize(&config).unwrap();
    assert_eq!(summary.columns, vec!["a"]);
    assert_eq!(summary.row_count, 1);

    let _ = fs::remove_file(&path);
}
