use std::path::Path;

use search_engine::Strategy;
use selfplay::{GameResult, MatchConfig, MatchRunner, Termination};

fn sample_config() -> MatchConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("selfplay.toml");
    MatchConfig::load(&path).unwrap()
}

#[test]
fn sample_config_parses() {
    let config = sample_config();
    assert_eq!(config.games, 4);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.white, Strategy::Minimax);
    assert_eq!(config.black, Strategy::Greedy);
    assert_eq!(
        config.output.as_deref(),
        Some(Path::new("selfplay_results.json"))
    );
}

#[test]
fn short_match_from_sample_config() {
    let config = MatchConfig {
        games: 2,
        max_moves: 16,
        white: Strategy::Random,
        black: Strategy::Greedy,
        output: None,
        ..sample_config()
    };
    let result = MatchRunner::new(config).run_match().unwrap();

    assert_eq!(result.total_games(), 2);
    for game in &result.games {
        match game.termination {
            Termination::MoveLimit => {
                assert_eq!(game.moves.len(), 16);
                assert_eq!(game.result, GameResult::Draw);
            }
            Termination::Stalemate => assert_eq!(game.result, GameResult::Draw),
            Termination::Checkmate => assert_ne!(game.result, GameResult::Draw),
        }
    }
    assert!(result.report().contains("random vs greedy"));
}
