use pinpuzzle::puzzle::{DEFAULT_MAX_ATTEMPTS, MAX_KEY_LEN};
use pinpuzzle::{Instruction, PuzzleConfig, PuzzleError};

#[test]
fn config_defaults_from_json() {
    let config: PuzzleConfig = serde_json::from_str(r#"{ "domain_secret": "soil" }"#).unwrap();

    assert_eq!(config.domain_secret(), "soil");
    assert_eq!(config.key_length(), MAX_KEY_LEN);
    assert!(!config.numeric_key());
    assert_eq!(config.max_attempts(), DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn config_from_json_is_validated() {
    let short = serde_json::from_str::<PuzzleConfig>(r#"{ "domain_secret": "s", "key_length": 2 }"#);
    let zero = serde_json::from_str::<PuzzleConfig>(r#"{ "domain_secret": "s", "max_attempts": 0 }"#);

    assert!(short.is_err());
    assert!(zero.is_err());
}

#[test]
fn config_survives_serialization() {
    let config = PuzzleConfig::new("soil", 5, true)
        .unwrap()
        .with_max_attempts(42)
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let back: PuzzleConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.key_length(), 5);
    assert!(back.numeric_key());
    assert_eq!(back.max_attempts(), 42);
}

#[test]
fn zero_attempt_bound_is_rejected() {
    let result = PuzzleConfig::new("soil", 8, false).unwrap().with_max_attempts(0);

    assert!(matches!(result, Err(PuzzleError::Configuration(_))));
}

#[test]
fn debug_output_hides_domain_secret() {
    let config = PuzzleConfig::new("very-secret-soil", 8, false).unwrap();

    assert!(!format!("{config:?}").contains("very-secret-soil"));
}

#[test]
fn malformed_instruction_text() {
    for text in ["", "a.b", "a.b.c.d", "a..c", ".b.c", "a.b."] {
        assert!(
            matches!(text.parse::<Instruction>(), Err(PuzzleError::MalformedInstruction)),
            "text {text:?}"
        );
    }
}

#[test]
fn instruction_accessors_and_display() {
    let inst: Instruction = "1234567801.0998.abc-_Z".parse().unwrap();

    assert_eq!(inst.selector(), "1234567801");
    assert_eq!(inst.seed(), "0998");
    assert_eq!(inst.water(), "abc-_Z");
    assert_eq!(inst.to_string(), "1234567801.0998.abc-_Z");
}

#[test]
fn instruction_json_roundtrip() {
    let inst = Instruction::from_parts("1234567812", "77", "water").unwrap();

    let json = serde_json::to_string(&inst).unwrap();
    let back: Instruction = serde_json::from_str(&json).unwrap();

    assert_eq!(back, inst);
}

#[test]
fn instruction_json_with_separator_or_empty_field_is_rejected() {
    for json in [
        r#"{"selector":"1.2","seed":"77","water":"x"}"#,
        r#"{"selector":"12","seed":"","water":"x"}"#,
        r#"{"selector":"12","seed":"77","water":"a.b"}"#,
    ] {
        assert!(serde_json::from_str::<Instruction>(json).is_err(), "json {json}");
    }
}
