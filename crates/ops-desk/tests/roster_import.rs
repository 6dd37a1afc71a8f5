use chrono::NaiveTime;
use ops_desk::identity::{RosterImportError, RosterImporter};

fn nine_am() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid time")
}

#[test]
fn roster_resolves_each_operator() {
    let csv = "Email,Team\n\
john.smith42@x.com,Approvals\n\
tonior@x.com,\n\
xk7@x.com,Transcripts\n";

    let operators = RosterImporter::from_reader(csv.as_bytes(), nine_am()).expect("roster imports");
    assert_eq!(operators.len(), 3);

    assert_eq!(operators[0].team.as_deref(), Some("Approvals"));
    assert_eq!(operators[0].profile.name.display_name, "John Smith");
    assert_eq!(operators[0].profile.greeting, "Good morning, Mr. Smith");

    assert!(operators[1].team.is_none());
    assert_eq!(operators[1].profile.initials, "TR");

    assert_eq!(operators[2].profile.name.formal_name, "Xk");
}

#[test]
fn roster_without_team_column_imports() {
    let csv = "Email\njane_doe@x.com\n";
    let operators = RosterImporter::from_reader(csv.as_bytes(), nine_am()).expect("roster imports");
    assert_eq!(operators.len(), 1);
    assert_eq!(operators[0].profile.name.last_name, "Doe");
}

#[test]
fn roster_skips_blank_and_duplicate_emails() {
    let csv = "Email,Team\n\
jane_doe@x.com,Ops\n\
,Ops\n\
JANE_DOE@X.COM,Notes\n";

    let operators = RosterImporter::from_reader(csv.as_bytes(), nine_am()).expect("roster imports");
    assert_eq!(operators.len(), 1);
    assert_eq!(operators[0].team.as_deref(), Some("Ops"));
}

#[test]
fn roster_without_email_column_is_rejected() {
    let csv = "Name,Team\nJane,Ops\n";
    let err = RosterImporter::from_reader(csv.as_bytes(), nine_am()).expect_err("email required");
    assert!(matches!(err, RosterImportError::Csv(_)));
}
