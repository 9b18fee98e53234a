//! Whole-game and batch tests: determinism, parallel batches, end conditions.

use monopoly_sim::core::{ConfigError, Error, GameConfig, PlayerId};
use monopoly_sim::game::{EndReason, Game};
use monopoly_sim::simulation::{Simulation, SimulationConfig};
use monopoly_sim::strategy::StrategyConfig;

#[test]
fn test_same_seed_same_record() {
    let config = GameConfig::standard().with_max_turns(200);
    for seed in [1, 2, 3] {
        let a = Game::new(&config, seed).unwrap().play();
        let b = Game::new(&config, seed).unwrap().play();
        assert_eq!(a, b, "seed {seed}");
    }
}

#[test]
fn test_same_seed_same_event_log() {
    let config = GameConfig::standard().with_max_turns(30);
    let mut a = Game::new(&config, 8).unwrap();
    let mut b = Game::new(&config, 8).unwrap();
    while a.play_turn().is_some() {
        b.play_turn();
    }
    assert_eq!(a.events(), b.events());
    assert!(!a.events().is_empty());
}

#[test]
fn test_verbose_does_not_change_outcome() {
    let config = GameConfig::standard().with_max_turns(100);
    let quiet = Game::new(&config, 5).unwrap().play();
    let loud = Game::new(&config.clone().with_verbose(true), 5).unwrap().play();
    assert_eq!(quiet, loud);
}

#[test]
fn test_record_is_consistent() {
    let config = GameConfig::standard().with_max_turns(300);
    for seed in 0..10 {
        let record = Game::new(&config, seed).unwrap().play();

        let houses: u32 = record.players.iter().map(|p| p.houses_built).sum();
        let hotels: u32 = record.players.iter().map(|p| p.hotels_built).sum();
        assert_eq!(record.houses_available + houses, 32);
        assert_eq!(record.hotels_available + hotels, 12);

        let survivors = record.players.iter().filter(|p| !p.eliminated).count();
        match record.end {
            EndReason::LastPlayerStanding => assert_eq!(survivors, 1),
            EndReason::TurnLimit => assert_eq!(record.rounds, 300),
        }

        let winner = record.winning_player().unwrap();
        assert!(!winner.eliminated);
        for p in record.players.iter().filter(|p| p.eliminated) {
            assert_eq!(p.final_money, 0);
            assert_eq!(p.properties_owned, 0);
        }
        for p in &record.players {
            assert!(p.final_money >= 0);
        }
    }
}

#[test]
fn test_turn_limit_tie_goes_to_lowest_index() {
    let config = GameConfig::new(vec![
        StrategyConfig::conservative(),
        StrategyConfig::conservative(),
        StrategyConfig::conservative(),
    ])
    .with_max_turns(10);
    let mut game = Game::new(&config, 3).unwrap();
    let state = game.state_mut();
    state.round = 10;
    state.player_mut(PlayerId::new(0)).money = 900;
    state.player_mut(PlayerId::new(1)).money = 2000;
    state.player_mut(PlayerId::new(2)).money = 2000;

    let record = game.play();

    assert_eq!(record.end, EndReason::TurnLimit);
    assert_eq!(record.winner, Some(PlayerId::new(1)));
}

#[test]
fn test_eliminated_players_cannot_win_on_turn_limit() {
    let config = GameConfig::new(vec![StrategyConfig::aggressive(); 3]).with_max_turns(10);
    let mut game = Game::new(&config, 3).unwrap();
    let state = game.state_mut();
    state.round = 10;
    state.player_mut(PlayerId::new(0)).eliminated = true;
    state.player_mut(PlayerId::new(0)).money = 0;
    state.player_mut(PlayerId::new(2)).money = 1600;

    assert_eq!(game.winner(), Some(PlayerId::new(2)));
}

#[test]
fn test_parallel_matches_sequential() {
    let config = SimulationConfig::default()
        .with_num_games(16)
        .with_max_turns(150)
        .with_seed(2024);

    let sequential = Simulation::new(config.clone().with_parallel(false)).unwrap().run().unwrap();
    let parallel = Simulation::new(config.with_parallel(true)).unwrap().run().unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.games(), 16);
}

#[test]
fn test_stats_cover_every_seat() {
    let config = SimulationConfig::default().with_num_games(8).with_max_turns(100).with_seed(1);
    let report = Simulation::new(config).unwrap().run().unwrap();

    assert_eq!(report.stats.len(), 8);
    let wins: usize = report.stats.iter().map(|s| s.wins).sum();
    assert_eq!(wins, 8);
    for stats in &report.stats {
        assert_eq!(stats.appearances, 8);
        assert!((0.0..=1.0).contains(&stats.win_rate()));
    }
    assert_eq!(report.stats_for("House Hoarder").unwrap().total_hotels, 0);
}

#[test]
fn test_invalid_strategy_fails_before_any_game() {
    let bad = StrategyConfig::color_focused("Bad", &[monopoly_sim::ColorGroup::Utility]);
    let config = SimulationConfig::default().with_players(vec![StrategyConfig::random(), bad]);

    let err = Simulation::new(config).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidConfiguration(ConfigError::NotAStreetColor { .. })
    ));
}
