use github_star_button::error::{Result, StarButtonError};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = StarButtonError::RateLimitExceeded("Rate limit hit".to_string());
    assert_eq!(format!("{}", error), "Rate limit exceeded: Rate limit hit");

    let error = StarButtonError::NotFound("Repository not found".to_string());
    assert_eq!(format!("{}", error), "Resource not found: Repository not found");

    let error = StarButtonError::ApiError("API failed".to_string());
    assert_eq!(format!("{}", error), "GitHub API error: API failed");

    let error = StarButtonError::InvalidRepository("bad/name/here".to_string());
    assert_eq!(format!("{}", error), "Invalid repository: bad/name/here");

    let error = StarButtonError::ActorError("gone".to_string());
    assert_eq!(format!("{}", error), "Actor error: gone");
}

#[test]
fn test_error_source() {
    let error = StarButtonError::RateLimitExceeded("Rate limit hit".to_string());
    assert!(error.source().is_none());

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: StarButtonError = json_error.into();
    assert!(error.source().is_some());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: StarButtonError = io_error.into();
    assert!(matches!(error, StarButtonError::IoError(_)));

    let url_error = url::Url::parse("::").unwrap_err();
    let error: StarButtonError = url_error.into();
    assert!(matches!(error, StarButtonError::UrlError(_)));
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    assert_eq!(returns_result().unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(StarButtonError::NotFound("Not found".to_string()))
    }

    assert!(returns_error().is_err());
}
