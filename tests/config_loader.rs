use quizbox::config::{Config, ConfigError, QuizConfig, SourceConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.quiz.question_seconds, 30);
    assert_eq!(config.quiz.answer_delay_seconds, 10);
    assert_eq!(
        config.source.url,
        "https://jsonplaceholder.typicode.com/posts?_limit=10"
    );
    assert_eq!(config.source.limit, 10);
    assert_eq!(config.source.timeout_seconds, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("quizbox/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[quiz]
question_seconds = 45
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.quiz.question_seconds, 45);
    assert_eq!(config.quiz.answer_delay_seconds, 10);
    assert_eq!(config.source, SourceConfig::default());
}

#[test]
fn test_full_file_round_trips_values() {
    let (_dir, path) = write_config(
        r#"
[quiz]
question_seconds = 20
answer_delay_seconds = 5

[source]
url = "http://localhost:9000/questions"
limit = 3
timeout_seconds = 4
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.url, "http://localhost:9000/questions");
    assert_eq!(config.source.limit, 3);
    assert_eq!(config.source.timeout_seconds, 4);
    assert_eq!(config.quiz.answer_delay_seconds, 5);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[quiz\nquestion_seconds = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_delay_not_shorter_than_question_fails() {
    let (_dir, path) = write_config(
        r#"
[quiz]
question_seconds = 10
answer_delay_seconds = 10
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.quiz.answer_delay_seconds, 10);
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("answer_delay_seconds"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_loading_does_not_validate() {
    let (_dir, path) = write_config("[source]\nlimit = 0\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.limit, 0);
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_question_seconds_fails() {
    let config = Config {
        quiz: QuizConfig {
            question_seconds: 0,
            answer_delay_seconds: 0,
        },
        source: SourceConfig::default(),
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_limit_and_blank_url_fail() {
    let mut config = Config::default();
    config.source.limit = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.source.url = "   ".to_string();
    assert!(config.validate().is_err());
}
