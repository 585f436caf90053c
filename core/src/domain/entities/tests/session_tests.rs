//! Unit tests for the session entity

use crate::domain::entities::session::{DerivedIdentity, Role, Session};
use crate::errors::ValidationError;

#[test]
fn test_new_session() {
    let session = Session::new("abc", Role::Company, "c1").unwrap();

    assert_eq!(session.token(), "abc");
    assert_eq!(session.role(), Role::Company);
    assert_eq!(session.user_id(), "c1");
    assert!(session.is_company());
    assert!(!session.is_freelancer());
}

#[test]
fn test_new_session_rejects_blank_fields() {
    let err = Session::new("  ", Role::Freelancer, "f1").unwrap_err();
    assert!(matches!(err, ValidationError::RequiredField { field } if field == "token"));

    let err = Session::new("abc", Role::Freelancer, "").unwrap_err();
    assert!(matches!(err, ValidationError::RequiredField { field } if field == "user_id"));
}

#[test]
fn test_from_parts_requires_all_three() {
    let full = Session::from_parts(
        Some("abc".to_string()),
        Some("freelancer".to_string()),
        Some("f1".to_string()),
    );
    assert!(full.is_some());

    assert!(Session::from_parts(Some("abc".to_string()), None, None).is_none());
    assert!(Session::from_parts(
        Some("abc".to_string()),
        Some("company".to_string()),
        None
    )
    .is_none());
    assert!(Session::from_parts(None, Some("company".to_string()), Some("c1".to_string())).is_none());
    assert!(Session::from_parts(
        Some(String::new()),
        Some("company".to_string()),
        Some("c1".to_string())
    )
    .is_none());
}

#[test]
fn test_from_parts_rejects_unknown_role() {
    let session = Session::from_parts(
        Some("abc".to_string()),
        Some("admin".to_string()),
        Some("a1".to_string()),
    );
    assert!(session.is_none());
}

#[test]
fn test_role_parsing() {
    assert_eq!("freelancer".parse::<Role>().unwrap(), Role::Freelancer);
    assert_eq!("company".parse::<Role>().unwrap(), Role::Company);
    assert!(matches!(
        "Company".parse::<Role>(),
        Err(ValidationError::UnknownRole { .. })
    ));
    assert_eq!(Role::Company.to_string(), "company");
}

#[test]
fn test_role_serialization() {
    assert_eq!(serde_json::to_string(&Role::Freelancer).unwrap(), "\"freelancer\"");
    assert_eq!(serde_json::to_string(&Role::Company).unwrap(), "\"company\"");
}

#[test]
fn test_debug_redacts_token() {
    let session = Session::new("secret-token", Role::Freelancer, "f1").unwrap();
    let debug = format!("{:?}", session);

    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("f1"));
}

#[test]
fn test_anonymous_identity_defaults_to_freelancer() {
    let identity = DerivedIdentity::from_session(None);

    assert!(!identity.is_logged_in);
    assert_eq!(identity.role, Role::Freelancer);
    assert!(identity.user_id.is_none());
    assert!(!identity.is_company_role());
}

#[test]
fn test_identity_from_company_session() {
    let session = Session::new("abc", Role::Company, "c1").unwrap();
    let identity = DerivedIdentity::from_session(Some(&session));

    assert!(identity.is_logged_in);
    assert!(identity.is_company_role());
    assert_eq!(identity.user_id.as_deref(), Some("c1"));
}
