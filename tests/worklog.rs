#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempo_worklog::libs::error::ReportError;
    use tempo_worklog::libs::worklog::{self, IssueDetails, RawWorklog, UserDetails, WorklogRecord};

    const TWO_ENTRY_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<worklogs>
  <worklog>
    <issue_key>PROJ-1</issue_key>
    <issue_summary>First issue</issue_summary>
    <hours>3.5</hours>
    <work_date>2021-02-01</work_date>
    <user_details>
      <full_name>Jane Doe</full_name>
    </user_details>
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
    <hours>1.25</hours>
    <work_date>2021-02-15</work_date>
    <user_details>
      <full_name>John Smith</full_name>
    </user_details>
    <issue_details>
      <type_name>Bug</type_name>
      <status_name>In Progress</status_name>
      <project_key>PROJ</project_key>
      <project_name>Main Project</project_name>
    </issue_details>
  </worklog>
</worklogs>"#;

    fn raw_entry() -> RawWorklog {
        RawWorklog {
            issue_key: "PROJ-1".to_string(),
            issue_summary: "Fix the widget".to_string(),
            hours: "3.5".to_string(),
            work_date: "2021-03-15".to_string(),
            user_details: vec![UserDetails {
                full_name: "Jane Doe".to_string(),
            }],
            issue_details: vec![IssueDetails {
                type_name: "Task".to_string(),
                status_name: "Done".to_string(),
                project_key: "PROJ".to_string(),
                project_name: "Main Project".to_string(),
            }],
        }
    }

    #[test]
    fn test_period_and_month_derivation() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        assert_eq!(worklog::period(date), "0321");
        assert_eq!(worklog::month_name(date), "March");
    }

    #[test]
    fn test_sanitize_summary_replaces_delimiter_and_tab() {
        assert_eq!(worklog::sanitize_summary("a;b\tc"), "a,b c");
    }

    #[test]
    fn test_sanitize_summary_is_idempotent() {
        let clean = worklog::sanitize_summary("a;b\tc");
        assert_eq!(worklog::sanitize_summary(&clean), clean);
    }

    #[test]
    fn test_sanitize_hours_swaps_decimal_separator() {
        assert_eq!(worklog::sanitize_hours("3.5"), "3,5");
        assert_eq!(worklog::sanitize_hours("8"), "8");
    }

    #[test]
    fn test_from_raw_derives_and_sanitizes() {
        let record = WorklogRecord::from_raw(&raw_entry(), None).unwrap();
        assert_eq!(record.issue_key, "PROJ-1");
        assert_eq!(record.hours, "3,5");
        assert_eq!(record.work_date, "2021-03-15");
        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.period, "0321");
        assert_eq!(record.month, "March");
        assert_eq!(record.issue_type, "Task");
        assert_eq!(record.issue_status, "Done");
        assert_eq!(record.project_key, "PROJ");
        assert_eq!(record.project_name, "Main Project");
        assert_eq!(record.issue_labels, None);
    }

    #[test]
    fn test_repeated_groups_last_wins() {
        let mut raw = raw_entry();
        raw.user_details.push(UserDetails {
            full_name: "Final Author".to_string(),
        });
        raw.issue_details.push(IssueDetails {
            type_name: "Story".to_string(),
            status_name: "Open".to_string(),
            project_key: "OTHER".to_string(),
            project_name: "Other Project".to_string(),
        });

        let record = WorklogRecord::from_raw(&raw, None).unwrap();
        assert_eq!(record.full_name, "Final Author");
        assert_eq!(record.issue_type, "Story");
        assert_eq!(record.project_key, "OTHER");
    }

    #[test]
    fn test_missing_user_details_fails() {
        let mut raw = raw_entry();
        raw.user_details.clear();

        let err = WorklogRecord::from_raw(&raw, None).unwrap_err();
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::MissingField { issue_key, group }) => {
                assert_eq!(issue_key, "PROJ-1");
                assert_eq!(*group, "user_details");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_issue_details_fails() {
        let mut raw = raw_entry();
        raw.issue_details.clear();

        let err = WorklogRecord::from_raw(&raw, None).unwrap_err();
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::MissingField { group, .. }) => assert_eq!(*group, "issue_details"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_work_date_fails() {
        let mut raw = raw_entry();
        raw.work_date = "15.03.2021".to_string();
        assert!(WorklogRecord::from_raw(&raw, None).is_err());
    }

    #[test]
    fn test_parse_document_preserves_order() {
        let document = worklog::parse(TWO_ENTRY_DOC).unwrap();
        assert_eq!(document.worklogs.len(), 2);
        assert_eq!(document.worklogs[0].issue_key, "PROJ-1");
        assert_eq!(document.worklogs[1].issue_key, "PROJ-2");

        let records: Vec<_> = document
            .worklogs
            .iter()
            .map(|raw| WorklogRecord::from_raw(raw, None).unwrap())
            .collect();
        assert_eq!(records[0].period, "0221");
        assert_eq!(records[0].month, "February");
        assert_eq!(records[1].hours, "1,25");
    }

    #[test]
    fn test_labels_attached_when_provided() {
        let record = WorklogRecord::from_raw(&raw_entry(), Some("backend, billing".to_string())).unwrap();
        assert_eq!(record.issue_labels.as_deref(), Some("backend, billing"));
    }
}
