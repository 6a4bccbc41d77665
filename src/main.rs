// Roque - jogar contra o motor no terminal
use clap::{Parser, ValueEnum};
use roque::*;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

/// Joga xadrez contra o motor Roque no terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// beginner, easy, medium, hard ou master
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Cor jogada pelo humano
    #[arg(short, long, value_enum, default_value = "white")]
    side: Side,

    /// Carrega um jogo gravado (JSON) ou uma posição FEN
    #[arg(long)]
    load: Option<PathBuf>,

    /// Pesos de avaliação em JSON
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Motor contra motor
    #[arg(long)]
    autoplay: bool,
}

fn print_help() {
    println!("Comandos: <lance UCI> (ex.: e2e4, e7e8q) | moves | undo | save <ficheiro> | fen | help | quit");
}

fn load_game(path: &PathBuf) -> EngineResult<Game> {
    let text = fs::read_to_string(path)?;
    let text = text.trim();
    if text.starts_with('{') {
        Game::from_json(text)
    } else {
        Game::from_fen(text)
    }
}

fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let evaluator = match &args.weights {
        Some(path) => Evaluator::new(EvalWeights::from_json(&fs::read_to_string(path)?)?),
        None => Evaluator::default(),
    };
    let config = args.difficulty.config();
    let engine = Engine::with_evaluator(evaluator, config.tt_size_mb);

    let mut game = match &args.load {
        Some(path) => load_game(path)?,
        None => Game::new(),
    };
    let human = match args.side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    };
    info!(difficulty = %args.difficulty, %human, "new game");

    print_help();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}\n", game.board());

        let status = game.status();
        if status.is_over() {
            println!("Fim do jogo: {}", status);
            break;
        }

        let to_move = game.board().to_move;
        if args.autoplay || to_move != human {
            match engine.search(game.board(), &config) {
                SearchOutcome::BestMove(result) => {
                    println!("Motor joga {} (score {}, profundidade {})", result.best_move, result.score, result.depth);
                    game.play(result.best_move)?;
                }
                SearchOutcome::GameOver(status) => {
                    println!("Fim do jogo: {}", status);
                    break;
                }
            }
            continue;
        }

        print!("{} > ", to_move);
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("help") => print_help(),
            Some("fen") => println!("{}", game.board().to_fen()),
            Some("moves") => {
                let moves: Vec<String> = game.board().generate_legal_moves().iter().map(|mv| mv.to_uci()).collect();
                println!("{}", moves.join(" "));
            }
            Some("undo") => {
                // Desfaz o lance do motor e o nosso.
                game.undo();
                if game.board().to_move != human {
                    game.undo();
                }
            }
            Some("save") => match words.next() {
                Some(path) => match game.to_json().and_then(|json| Ok(fs::write(path, json)?)) {
                    Ok(()) => println!("Jogo gravado em {}", path),
                    Err(err) => warn!(%err, path, "failed to save game"),
                },
                None => println!("Uso: save <ficheiro>"),
            },
            Some(text) => {
                if let Err(err) = game.play_uci(text) {
                    println!("{}", err);
                }
            }
        }
    }

    Ok(())
}
