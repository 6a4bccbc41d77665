// Interface UCI (Universal Chess Interface) para o motor Roque

use roque::search::{is_mate_score, SearchConfig, SearchOutcome, DEFAULT_TT_MB};
use roque::*;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const MAX_DEPTH: u8 = 64;
const INFINITE_BUDGET: Duration = Duration::from_secs(30);

struct UCIEngine {
    board: Board,
    engine: Engine,
    hash_mb: usize,
    threads: usize,
}

impl UCIEngine {
    fn new() -> Self {
        UCIEngine {
            board: Board::new(),
            engine: Engine::new(),
            hash_mb: DEFAULT_TT_MB,
            threads: num_cpus::get().max(1),
        }
    }

    fn run(&mut self) {
        let stdin = io::stdin();

        for line in stdin.lock().lines() {
            let input = match line {
                Ok(input) => input,
                Err(err) => {
                    warn!(%err, "failed to read from stdin");
                    break;
                }
            };
            let parts: Vec<&str> = input.split_whitespace().collect();

            if parts.is_empty() {
                continue;
            }

            match parts[0] {
                "uci" => self.handle_uci(),
                "isready" => println!("readyok"),
                "ucinewgame" => self.handle_new_game(),
                "setoption" => self.handle_setoption(&parts),
                "position" => self.handle_position(&parts),
                "go" => self.handle_go(&parts),
                "d" => println!("{}\n{}", self.board, self.board.to_fen()),
                // `go` só responde depois de `bestmove`: não há busca a parar.
                "stop" => {}
                "quit" => break,
                _ => {} // Ignora comandos desconhecidos
            }
            let _ = io::stdout().flush();
        }
    }

    fn handle_uci(&self) {
        println!("id name Roque {}", env!("CARGO_PKG_VERSION"));
        println!("id author Pedro Contessoto");

        // Opções UCI
        println!("option name Hash type spin default {} min 1 max 4096", DEFAULT_TT_MB);
        println!("option name Threads type spin default {} min 1 max 128", self.threads);

        println!("uciok");
    }

    fn handle_new_game(&mut self) {
        self.board = Board::new();
        self.engine.new_game();
    }

    fn handle_setoption(&mut self, parts: &[&str]) {
        // setoption name <Name> value <N>
        let (Some(name), Some(value)) = (parts.get(2), parts.get(4)) else { return };
        let Ok(value) = value.parse::<usize>() else {
            warn!(option = %name, value = %value, "ignoring non-numeric option value");
            return;
        };
        match name.to_ascii_lowercase().as_str() {
            "hash" => {
                self.hash_mb = value.max(1);
                self.engine = Engine::with_evaluator(Evaluator::default(), self.hash_mb);
            }
            "threads" => self.threads = value.clamp(1, 128),
            _ => {}
        }
    }

    fn handle_position(&mut self, parts: &[&str]) {
        if parts.len() < 2 {
            return;
        }

        let mut idx = 1;

        match parts[idx] {
            "startpos" => {
                self.board = Board::new();
                idx += 1;
            }
            "fen" => {
                idx += 1;
                let mut fen_parts = Vec::new();

                // Coleta partes do FEN até "moves" ou fim
                while idx < parts.len() && parts[idx] != "moves" {
                    fen_parts.push(parts[idx]);
                    idx += 1;
                }

                let fen = fen_parts.join(" ");
                match Board::from_fen(&fen) {
                    Ok(board) => self.board = board,
                    Err(err) => {
                        println!("info string {}", err);
                        return;
                    }
                }
            }
            _ => return,
        }

        // Processa movimentos se houver
        if idx < parts.len() && parts[idx] == "moves" {
            for text in &parts[idx + 1..] {
                match self.board.parse_move(text) {
                    Ok(mv) => {
                        self.board.make_move(mv);
                    }
                    Err(err) => {
                        println!("info string {}", err);
                        break;
                    }
                }
            }
        }
    }

    /// Traduz os parâmetros de `go` numa configuração de busca.
    /// A busca é síncrona: `infinite` não espera por `stop`, fica limitada a
    /// `INFINITE_BUDGET`.
    fn go_config(&self, parts: &[&str]) -> SearchConfig {
        let mut config = SearchConfig {
            max_depth: 6,
            workers: self.threads,
            time_budget: None,
            tt_size_mb: self.hash_mb,
        };
        let mut idx = 1;
        let arg = |idx: usize| parts.get(idx + 1).and_then(|v| v.parse::<u64>().ok());

        // Parse parâmetros
        while idx < parts.len() {
            match parts[idx] {
                "depth" => {
                    if let Some(d) = arg(idx) {
                        config.max_depth = d.clamp(1, MAX_DEPTH as u64) as u8;
                    }
                    idx += 2;
                }
                "movetime" => {
                    if let Some(ms) = arg(idx) {
                        config.time_budget = Some(Duration::from_millis(ms));
                    }
                    idx += 2;
                }
                "wtime" | "btime" => {
                    let ours = (parts[idx] == "wtime") == (self.board.to_move == Color::White);
                    if let (true, Some(ms)) = (ours, arg(idx)) {
                        // Usa 2% do tempo restante
                        config.time_budget = Some(Duration::from_millis(ms / 50));
                    }
                    idx += 2;
                }
                "infinite" => {
                    config.max_depth = MAX_DEPTH;
                    config.time_budget = Some(INFINITE_BUDGET);
                    idx += 1;
                }
                _ => idx += 1,
            }
        }
        config
    }

    fn handle_go(&mut self, parts: &[&str]) {
        let config = self.go_config(parts);
        match self.engine.search(&self.board, &config) {
            SearchOutcome::BestMove(result) => {
                let score = if is_mate_score(result.score) {
                    let plies = MATE_SCORE - result.score.abs();
                    format!("mate {}", result.score.signum() * (plies + 1) / 2)
                } else {
                    format!("cp {}", result.score)
                };
                println!(
                    "info depth {} score {} nodes {} time {} hashfull {}",
                    result.depth,
                    score,
                    result.nodes,
                    result.elapsed.as_millis(),
                    self.engine.tt().hashfull()
                );
                println!("bestmove {}", result.best_move);
            }
            SearchOutcome::GameOver(status) => {
                info!(%status, "no legal moves");
                println!("info string {}", status);
                println!("bestmove 0000");
            }
        }
    }
}

fn main() {
    // Logs vão para stderr: stdout é do protocolo.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut engine = UCIEngine::new();
    engine.run();
}
