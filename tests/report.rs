#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use tempo_worklog::libs::report::{report_file_name, ReportWriter, COLUMNS};
    use tempo_worklog::libs::worklog::{self, WorklogRecord};

    fn record(issue_key: &str) -> WorklogRecord {
        WorklogRecord {
            issue_key: issue_key.to_string(),
            issue_summary: "Fix the widget".to_string(),
            hours: "3,5".to_string(),
            work_date: "2021-02-01".to_string(),
            full_name: "Jane Doe".to_string(),
            period: "0221".to_string(),
            month: "February".to_string(),
            issue_type: "Task".to_string(),
            issue_status: "Done".to_string(),
            project_key: "PROJ".to_string(),
            project_name: "Main Project".to_string(),
            issue_labels: None,
        }
    }

    /// Decodes the written report back to text, asserting the UTF-16LE BOM.
    fn decode_report(path: &Path) -> String {
        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE], "report must start with a UTF-16LE BOM");
        assert_eq!(bytes.len() % 2, 0);

        let units: Vec<u16> = bytes[2..].chunks(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]])).collect();
        String::from_utf16(&units).unwrap()
    }

    fn rows(text: &str) -> Vec<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_reader(text.as_bytes());
        rdr.records()
            .map(|row| row.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_round_trip_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        ReportWriter::new(&path).write(&[record("PROJ-1"), record("PROJ-2")]).unwrap();

        let rows = rows(&decode_report(&path));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], COLUMNS.to_vec());
        assert_eq!(rows[1][0], "PROJ-1");
        assert_eq!(rows[2][0], "PROJ-2");
        assert_eq!(rows[1][2], "3,5");
    }

    #[test]
    fn test_non_ascii_full_name_survives_encoding() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        let mut entry = record("PROJ-1");
        entry.full_name = "Кирилл Лахтачёв".to_string();
        ReportWriter::new(&path).write(&[entry]).unwrap();

        let rows = rows(&decode_report(&path));
        assert_eq!(rows[1][4], "Кирилл Лахтачёв");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        let writer = ReportWriter::new(&path);

        writer.write(&[record("PROJ-1"), record("PROJ-2")]).unwrap();
        writer.write(&[record("PROJ-3")]).unwrap();

        let rows = rows(&decode_report(&path));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "PROJ-3");
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        ReportWriter::new(&path).write(&[]).unwrap();

        let rows = rows(&decode_report(&path));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], COLUMNS.to_vec());
    }

    #[test]
    fn test_report_file_name_convention() {
        let date_from = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
        let date_to = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap();
        assert_eq!(
            report_file_name("PROJ", date_from, date_to),
            "tempo-worklog_PROJ_2021-02-01_2021-02-28.csv"
        );
        assert_eq!(report_file_name("", date_from, date_to), "tempo-worklog__2021-02-01_2021-02-28.csv");
    }

    #[test]
    fn test_end_to_end_two_entry_document() {
        let document = r#"<worklogs>
  <worklog>
    <issue_key>PROJ-1</issue_key>
    <issue_summary>First issue</issue_summary>
    <hours>2.5</hours>
    <work_date>2021-02-01</work_date>
    <user_details><full_name>Jane Doe</full_name></user_details>
    <issue_details>
      <type_name>Task</type_name>
      <status_name>Done</status_name>
      <project_key>PROJ</project_key>
      <project_name>Main Project</project_name>
    </issue_details>
  </worklog>
  <worklog>
    <issue_key>PROJ-2</issue_key>
    <issue_summary>Second issue</issue_summary>
    <hours>4</hours>
    <work_date>2021-02-15</work_date>
    <user_details><full_name>John Smith</full_name></user_details>
    <issue_details>
      <type_name>Bug</type_name>
      <status_name>Open</status_name>
      <project_key>PROJ</project_key>
      <project_name>Main Project</project_name>
    </issue_details>
  </worklog>
</worklogs>"#;

        let parsed = worklog::parse(document).unwrap();
        let records: Vec<WorklogRecord> = parsed
            .worklogs
            .iter()
            .map(|raw| WorklogRecord::from_raw(raw, None).unwrap())
            .collect();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(report_file_name(
            "PROJ",
            NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 2, 28).unwrap(),
        ));
        ReportWriter::new(&path).write(&records).unwrap();

        let rows = rows(&decode_report(&path));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "PROJ-1");
        assert_eq!(rows[2][0], "PROJ-2");
        // Labels were not requested: the last column stays empty.
        assert_eq!(rows[1][11], "");
        assert_eq!(rows[2][11], "");
    }
}
