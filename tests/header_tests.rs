use groupctl::contact::ContactField;
use groupctl::error::IngestError;
use groupctl::header::{resolve, resolve_required, Column, ColumnMap};

#[test]
fn test_resolve_is_case_insensitive() {
    for spelling in ["email", "EMAIL", "Email", "eMaIl"] {
        let headers = vec!["name", spelling];
        let column = resolve(&headers, ContactField::Email.synonyms(), true)
            .unwrap()
            .unwrap();
        assert_eq!(column.index, 1);
        assert_eq!(column.header, spelling);
    }
}

#[test]
fn test_resolve_respects_candidate_priority() {
    // "first_name" outranks "fname" regardless of column order
    let headers = vec!["fname", "email", "FIRST_NAME"];
    let column = resolve(&headers, ContactField::FirstName.synonyms(), false)
        .unwrap()
        .unwrap();

    assert_eq!(
        column,
        Column {
            index: 2,
            header: "FIRST_NAME".to_string()
        }
    );
}

#[test]
fn test_resolve_ignores_padding_in_header_cells() {
    let headers = vec![" Email Address ", "Last Name"];
    let column = resolve(&headers, ContactField::Email.synonyms(), true)
        .unwrap()
        .unwrap();
    assert_eq!(column.index, 0);
}

#[test]
fn test_resolve_optional_absent() {
    let headers = vec!["email"];
    let column = resolve(&headers, ContactField::Position.synonyms(), false).unwrap();
    assert!(column.is_none());
}

#[test]
fn test_resolve_required_absent_names_candidates() {
    let headers = vec!["first_name", "last_name"];
    let err = resolve(&headers, ContactField::Email.synonyms(), true).unwrap_err();

    match err {
        IngestError::MissingRequiredHeader { candidates } => {
            assert_eq!(
                candidates,
                vec!["email", "email_address", "e-mail", "Email Address"]
            );
        }
        other => panic!("Expected MissingRequiredHeader, got {:?}", other),
    }
}

#[test]
fn test_position_synonyms_are_keyed_consistently() {
    assert!(ContactField::Position.synonyms().contains(&"Title"));

    let headers = vec!["email", "Title"];
    let columns = ColumnMap::from_headers(&headers).unwrap();
    assert_eq!(columns.position.unwrap().header, "Title");
}

#[test]
fn test_column_map_resolves_every_field() {
    let headers = vec!["E-Mail", "FirstName", "lname", "position"];
    let columns = ColumnMap::from_headers(&headers).unwrap();

    assert_eq!(columns.email.index, 0);
    assert_eq!(columns.get(ContactField::FirstName).unwrap().index, 1);
    assert_eq!(columns.get(ContactField::LastName).unwrap().index, 2);
    assert_eq!(columns.get(ContactField::Position).unwrap().index, 3);
}

#[test]
fn test_resolve_required_returns_column() {
    let headers = vec!["fname", "Email_Address"];
    let column = resolve_required(&headers, ContactField::Email.synonyms()).unwrap();

    assert_eq!(
        column,
        Column {
            index: 1,
            header: "Email_Address".to_string()
        }
    );
}

#[test]
fn test_resolve_required_absent() {
    let headers = vec!["fname", "lname"];
    let err = resolve_required(&headers, ContactField::Email.synonyms()).unwrap_err();
    assert!(matches!(err, IngestError::MissingRequiredHeader { .. }));
}

#[test]
fn test_only_email_is_required() {
    let columns = ColumnMap::from_headers(&["email"]).unwrap();
    assert_eq!(columns.email.index, 0);
    assert!(columns.first_name.is_none());
    assert!(columns.last_name.is_none());
    assert!(columns.position.is_none());

    let err = ColumnMap::from_headers(&["first_name", "last_name", "title"]).unwrap_err();
    match err {
        IngestError::MissingRequiredHeader { candidates } => {
            assert_eq!(candidates[0], "email");
        }
        other => panic!("Expected MissingRequiredHeader, got {:?}", other),
    }
}
