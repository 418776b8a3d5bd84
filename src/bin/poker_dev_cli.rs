// src/bin/poker_dev_cli.rs
//
// Запуск: poker_dev_cli [--seed N] [--config table.json]
// Логи движка: RUST_LOG=info poker_dev_cli --seed 42

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use poker_core::api::{build_hand_result_view, build_table_view};
use poker_core::domain::card::Card;
use poker_core::domain::chips::Chips;
use poker_core::domain::table::{GameVariant, TableConfig, TableStakes};
use poker_core::domain::SeatIndex;
use poker_core::engine::{ActionType, EngineError, GameEngine, LogSink, PlayerActionKind};
use poker_core::infra::{DeterministicRng, RandomSource, SystemRng};

/// Dev-CLI: прогоняет сценарные раздачи через движок.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed детерминированного RNG (без него – системный RNG).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON-конфиг hold'em стола (иначе 6 мест, 25/50).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn load_config(path: &Path) -> Result<TableConfig, String> {
    let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
    TableConfig::from_json_str(&json).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    println!("poker_dev_cli: стартуем dev-CLI…");

    let holdem_config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                println!("[CLI] ОШИБКА загрузки конфига {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => TableConfig::holdem(6, 25, 50),
    };
    println!(
        "[CLI] стол: {} мест, блайнды {}/{}",
        holdem_config.max_seats, holdem_config.stakes.small_blind, holdem_config.stakes.big_blind
    );

    match cli.seed {
        Some(seed) => {
            println!("[CLI] seed = {seed}");
            let mut rng = DeterministicRng::from_seed(seed);
            run_all(holdem_config, &mut rng);
        }
        None => {
            let mut rng = SystemRng;
            run_all(holdem_config, &mut rng);
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
    ExitCode::SUCCESS
}

fn run_all<R: RandomSource>(holdem_config: TableConfig, rng: &mut R) {
    let scenarios = [
        (Scenario::SimpleCheckCall, "SimpleCheckCall"),
        (Scenario::WithFold, "WithFold"),
        (Scenario::WithRaises, "WithRaises"),
        (Scenario::WithAllInSidePots, "WithAllInSidePots"),
    ];

    for (scenario, title) in scenarios {
        let stacks = match scenario {
            Scenario::WithAllInSidePots => vec![400, 1_200, 3_000, 10_000],
            _ => vec![10_000; 4],
        };
        match new_table(holdem_config.clone(), &stacks) {
            Ok(mut engine) => play_hand(&mut engine, rng, scenario, title),
            Err(e) => println!("[CLI] ОШИБКА создания стола: {e}"),
        }
    }

    let draw_config = TableConfig {
        max_seats: 4,
        variant: GameVariant::FiveCardDraw,
        stakes: TableStakes::new(Chips(25), Chips(50), Chips(5)),
    };
    match new_table(draw_config, &[5_000; 3]) {
        Ok(mut engine) => play_hand(&mut engine, rng, Scenario::SimpleCheckCall, "FiveCardDraw"),
        Err(e) => println!("[CLI] ОШИБКА создания стола: {e}"),
    }
}

fn new_table(config: TableConfig, stacks: &[u64]) -> Result<GameEngine, String> {
    let seats = usize::from(config.max_seats);
    let mut engine = GameEngine::new(config).map_err(|e| e.to_string())?;
    engine.add_sink(LogSink);
    for (i, &stack) in stacks.iter().take(seats).enumerate() {
        let seat = i as SeatIndex;
        engine
            .seat_player(seat, 100 + i as u64, format!("bot-{seat}"), Chips(stack))
            .map_err(|e| e.to_string())?;
    }
    Ok(engine)
}

/// Сценарий тестовой раздачи.
#[derive(Copy, Clone, Debug)]
enum Scenario {
    SimpleCheckCall,
    WithFold,
    WithRaises,
    WithAllInSidePots,
}

/// Одна полная раздача по выбранному сценарию.
fn play_hand<R: RandomSource>(engine: &mut GameEngine, rng: &mut R, scenario: Scenario, title: &str) {
    println!();
    println!("================ HAND {title} =================");

    if let Err(e) = engine.start_hand_with(rng) {
        println!("[CLI] ОШИБКА в start_hand: {e}");
        return;
    }
    debug_print_table_state(engine);

    match run_scenario(engine, rng, scenario) {
        Ok(()) => {}
        Err(e) => {
            println!("[CLI] ОШИБКА ({:?}): {e}", e.kind());
            debug_print_table_state(engine);
        }
    }

    println!("============ END HAND {title} ============");
}

/// Прогон раздачи до расчёта.
fn run_scenario<R: RandomSource>(
    engine: &mut GameEngine,
    rng: &mut R,
    scenario: Scenario,
) -> Result<(), EngineError> {
    const MAX_STEPS: u32 = 200;
    let mut step: u32 = 0;

    while !engine.is_hand_complete() {
        step += 1;
        if step > MAX_STEPS {
            println!("[CLI] Превышен лимит шагов ({MAX_STEPS}), выходим.");
            return Ok(());
        }

        let Some(seat) = engine.current_player() else {
            // Торговля закрыта: обмен (в дро) и следующая улица.
            engine.advance_street()?;
            exchange_all(engine, rng)?;
            debug_print_table_state(engine);
            continue;
        };

        let action = pick_scenario_action(engine, scenario, step, seat);
        let street = engine.hand().map(|h| h.street()).unwrap_or_default();
        println!("[CLI] [step={step}] street={street} seat={seat} -> {action}");

        engine.apply_action(seat, action)?;
    }

    let summary = engine.settle_showdown()?;
    let view = build_hand_result_view(&summary);

    println!("=== РАЗДАЧА ЗАВЕРШЕНА ===");
    println!(
        "hand #{} total_pot={} ended_early={} board={}",
        view.hand_number,
        view.total_pot,
        view.ended_early,
        cards_str(&view.board)
    );
    println!("Результаты игроков:");
    for r in view.players {
        println!(
            "  seat={} player_id={} | net_chips={} | winner={} | {}",
            r.seat_index,
            r.player_id,
            r.net_chips,
            r.is_winner,
            r.rank_description.unwrap_or_else(|| "-".to_string())
        );
    }
    println!("Фишек за столом: {}", engine.total_chips());
    Ok(())
}

/// Дро: каждый меняет пары и выше оставляет, остальное сбрасывает (до трёх карт).
fn exchange_all<R: RandomSource>(engine: &mut GameEngine, rng: &mut R) -> Result<(), EngineError> {
    if engine.config().variant != GameVariant::FiveCardDraw {
        return Ok(());
    }
    let seats: Vec<SeatIndex> = engine
        .table()
        .occupied()
        .filter(|(_, p)| p.is_in_hand())
        .map(|(seat, _)| seat)
        .collect();

    for seat in seats {
        let hand: Vec<Card> = engine
            .player(seat)
            .map(|p| p.hole_cards.clone())
            .unwrap_or_default();
        let discards: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| hand.iter().filter(|o| o.rank == c.rank).count() == 1)
            .take(3)
            .collect();
        let received = engine.exchange_cards_with(seat, &discards, rng)?;
        println!(
            "[CLI] seat={seat} сбросил [{}] получил [{}]",
            cards_str(&discards),
            cards_str(&received)
        );
    }
    Ok(())
}

/// Базовая стратегия бота: check/call, короткий стек – all-in.
fn pick_base_action(engine: &GameEngine, seat: SeatIndex) -> PlayerActionKind {
    let valid = engine.get_valid_actions(seat);
    if valid.contains(ActionType::Check) {
        PlayerActionKind::Check
    } else if valid.contains(ActionType::Call) {
        PlayerActionKind::Call
    } else if valid.contains(ActionType::AllIn) {
        PlayerActionKind::AllIn
    } else {
        PlayerActionKind::Fold
    }
}

/// Логика выбора действия в зависимости от сценария.
fn pick_scenario_action(
    engine: &GameEngine,
    scenario: Scenario,
    step: u32,
    seat: SeatIndex,
) -> PlayerActionKind {
    let valid = engine.get_valid_actions(seat);
    let street = engine.hand().map(|h| h.street()).unwrap_or_default();

    match scenario {
        Scenario::SimpleCheckCall => pick_base_action(engine, seat),

        Scenario::WithFold => {
            if street == 0 && step <= 2 {
                return PlayerActionKind::Fold;
            }
            pick_base_action(engine, seat)
        }

        Scenario::WithRaises => {
            if step % 3 == 1 && valid.contains(ActionType::Raise) {
                PlayerActionKind::Raise(valid.min_amount)
            } else if valid.contains(ActionType::Bet) {
                PlayerActionKind::Bet(valid.min_amount)
            } else {
                pick_base_action(engine, seat)
            }
        }

        Scenario::WithAllInSidePots => {
            if street == 0 && valid.contains(ActionType::AllIn) {
                PlayerActionKind::AllIn
            } else {
                pick_base_action(engine, seat)
            }
        }
    }
}

fn cards_str(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn debug_print_table_state(engine: &GameEngine) {
    let view = build_table_view(engine, None);
    println!(
        "[TABLE] phase={:?} street={:?} button={:?} board=[{}] pot={} to_act={:?}",
        view.phase,
        view.street,
        view.dealer_button,
        cards_str(&view.board),
        view.total_pot,
        view.current_actor_seat
    );
    for (i, pot) in view.pots.iter().enumerate() {
        println!("  pot[{i}] = {} eligible={:?}", pot.amount, pot.eligible_seats);
    }
    for p in view.seats.iter().flatten() {
        println!(
            "  seat {} {:<8} stack={:<6} bet={:<5} total={:<5} {:?}",
            p.seat_index, p.display_name, p.stack, p.street_bet, p.total_bet, p.status
        );
    }
}
