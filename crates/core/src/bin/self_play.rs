//! Quick AI vs AI run without delays

use chess_board_core::{to_fen, AiCommit, GameConfig, GameStore, ThinkDelay};

fn main() {
    let plies: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("Usage: self_play [plies]");
            std::process::exit(1);
        }),
        None => 20,
    };

    let config = GameConfig {
        ai_delay: ThinkDelay::instant(),
        ..GameConfig::default()
    };
    let mut store = GameStore::new(config);
    let mut rng = rand::rng();
    store.start_ai_game();

    println!("Playing {} plies...\n", plies);

    for _ in 0..plies {
        let ticket = match store.next_auto_move(&mut rng) {
            Ok(Some(ticket)) => ticket,
            Ok(None) => break,
            Err(e) => {
                println!("Stopped: {}", e);
                break;
            }
        };
        match store.commit_ai_move(&ticket, &mut rng) {
            Ok(AiCommit::Applied(mv)) => {
                let ply = store.state().history().len();
                println!("  {:>3}. {}", ply, mv.notation());
            }
            Ok(AiCommit::Stale) => break,
            Err(e) => {
                println!("Stopped: {}", e);
                break;
            }
        }
    }

    println!("\n{}\n", store.state().board());
    println!("FEN: {}", to_fen(store.state()));
}
