use super::*;

#[test]
fn test_empty_config_is_default() {
    assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = MatchConfig::from_toml_str(
        r#"
        games = 6
        white = "minimax"
        seed = 11
        "#,
    )
    .unwrap();
    assert_eq!(config.games, 6);
    assert_eq!(config.white, Strategy::Minimax);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.black, Strategy::Random);
    assert_eq!(config.max_moves, 200);
    assert!(config.alternate_colors);
    assert_eq!(config.output, None);
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let err = MatchConfig::from_toml_str(r#"black = "alphabeta""#).unwrap_err();
    assert!(matches!(err, SelfplayError::Config(_)));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let path = Path::new("definitely/not/here/selfplay.toml");
    assert_eq!(
        MatchConfig::load_or_default(Some(path)).unwrap(),
        MatchConfig::default()
    );
    assert!(matches!(
        MatchConfig::load(path),
        Err(SelfplayError::Read { .. })
    ));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = MatchConfig {
        games: 3,
        seed: Some(5),
        output: Some(PathBuf::from("out.json")),
        ..Default::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(MatchConfig::from_toml_str(&text).unwrap(), config);
}
