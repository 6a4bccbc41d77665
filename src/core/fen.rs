// Ficheiro: src/core/fen.rs
// Descrição: Importação/exportação FEN e leitura de lances em notação UCI.

use super::board::Board;
use super::types::*;
use crate::error::{EngineError, EngineResult};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Cria um tabuleiro a partir de uma string FEN.
    /// Os contadores de lances são opcionais (4 ou 6 campos).
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 4 && parts.len() != 6 {
            return Err(EngineError::invalid_fen(fen, "wrong number of fields"));
        }

        let mut board = Board::empty();

        // Parse board (parts[0])
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(EngineError::invalid_fen(fen, "wrong number of rows"));
        }

        for (row_index, row) in rows.iter().enumerate() {
            let rank = 7 - row_index as u8;
            let mut file = 0u8;
            for ch in row.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    if digit == 0 || digit > 8 {
                        return Err(EngineError::invalid_fen(fen, format!("bad empty count `{}`", ch)));
                    }
                    file += digit as u8; // Skip empty squares
                } else {
                    let kind = PieceKind::from_char(ch)
                        .ok_or_else(|| EngineError::invalid_fen(fen, format!("invalid piece `{}`", ch)))?;
                    if file >= 8 {
                        return Err(EngineError::invalid_fen(fen, format!("rank {} overflows", rank + 1)));
                    }
                    let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
                    board.toggle_piece(Piece::new(kind, color), rank * 8 + file);
                    file += 1;
                }
                if file > 8 {
                    return Err(EngineError::invalid_fen(fen, format!("rank {} overflows", rank + 1)));
                }
            }
            if file != 8 {
                return Err(EngineError::invalid_fen(fen, format!("rank {} is incomplete", rank + 1)));
            }
        }

        for color in [Color::White, Color::Black] {
            if board.pieces(PieceKind::King, color).count_ones() != 1 {
                return Err(EngineError::invalid_fen(fen, format!("{} must have exactly one king", color)));
            }
        }
        if board.pawns & 0xFF00_0000_0000_00FF != 0 {
            return Err(EngineError::invalid_fen(fen, "pawn on the first or last rank"));
        }

        // To move (parts[1])
        board.to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(EngineError::invalid_fen(fen, format!("invalid side to move `{}`", other))),
        };

        // Castling (parts[2])
        if parts[2] != "-" {
            for ch in parts[2].chars() {
                board.castling_rights |= match ch {
                    'K' => WHITE_KINGSIDE,
                    'Q' => WHITE_QUEENSIDE,
                    'k' => BLACK_KINGSIDE,
                    'q' => BLACK_QUEENSIDE,
                    _ => return Err(EngineError::invalid_fen(fen, format!("invalid castling flag `{}`", ch))),
                };
            }
        }
        // Direitos sem rei/torre na casa original não fazem sentido: descartam-se.
        board.castling_rights &= board.consistent_castling_rights();

        // En passant (parts[3])
        if parts[3] != "-" {
            let square = parse_square(parts[3])
                .ok_or_else(|| EngineError::invalid_fen(fen, format!("invalid en passant square `{}`", parts[3])))?;
            let expected_rank = if board.to_move == Color::White { 5 } else { 2 };
            if rank_of(square) != expected_rank {
                return Err(EngineError::invalid_fen(fen, "en passant square on the wrong rank"));
            }
            board.en_passant_target = Some(square);
        }

        if parts.len() == 6 {
            board.halfmove_clock = parts[4]
                .parse()
                .map_err(|_| EngineError::invalid_fen(fen, "invalid halfmove clock"))?;
            board.fullmove_number = parts[5]
                .parse()
                .map_err(|_| EngineError::invalid_fen(fen, "invalid fullmove number"))?;
        }

        board.zobrist_hash = board.compute_zobrist_hash();
        Ok(board)
    }

    /// Máscara dos direitos cujas peças ainda estão nas casas de origem.
    fn consistent_castling_rights(&self) -> u8 {
        let king = |color, sq| self.pieces(PieceKind::King, color) & square_bb(sq) != 0;
        let rook = |color, sq| self.pieces(PieceKind::Rook, color) & square_bb(sq) != 0;
        let mut mask = 0;
        if king(Color::White, 4) && rook(Color::White, 7) { mask |= WHITE_KINGSIDE; }
        if king(Color::White, 4) && rook(Color::White, 0) { mask |= WHITE_QUEENSIDE; }
        if king(Color::Black, 60) && rook(Color::Black, 63) { mask |= BLACK_KINGSIDE; }
        if king(Color::Black, 60) && rook(Color::Black, 56) { mask |= BLACK_QUEENSIDE; }
        mask
    }

    /// Exporta a posição em FEN (6 campos).
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(rank * 8 + file) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.to_move == Color::White { 'w' } else { 'b' });
        fen.push(' ');

        if self.castling_rights == 0 {
            fen.push('-');
        } else {
            for (flag, ch) in [(WHITE_KINGSIDE, 'K'), (WHITE_QUEENSIDE, 'Q'), (BLACK_KINGSIDE, 'k'), (BLACK_QUEENSIDE, 'q')] {
                if self.castling_rights & flag != 0 {
                    fen.push(ch);
                }
            }
        }

        fen.push(' ');
        match self.en_passant_target {
            Some(sq) => fen.push_str(&square_name(sq)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    /// Converte texto UCI (ex.: "e2e4", "e7e8q") no lance legal correspondente.
    pub fn parse_move(&self, text: &str) -> EngineResult<Move> {
        let text = text.trim();
        if (text.len() != 4 && text.len() != 5) || !text.is_ascii() {
            return Err(EngineError::InvalidNotation(text.to_string()));
        }
        let from = parse_square(&text[0..2]).ok_or_else(|| EngineError::InvalidNotation(text.to_string()))?;
        let to = parse_square(&text[2..4]).ok_or_else(|| EngineError::InvalidNotation(text.to_string()))?;
        let promotion = match text[4..].chars().next() {
            Some(ch) => match PieceKind::from_char(ch) {
                Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
                _ => return Err(EngineError::InvalidNotation(text.to_string())),
            },
            None => None,
        };

        self.generate_legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion() == promotion)
            .ok_or_else(|| EngineError::IllegalMove(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_fen_matches_new() {
        let board = Board::from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_four_field_fen() {
        let board = Board::from_fen("8/8/8/8/8/8/8/K6k b - -").unwrap();
        assert_eq!(board.to_move, Color::Black);
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.fullmove_number, 1);
    }

    #[test]
    fn test_rejects_bad_fens() {
        let bad = [
            "",
            "8/8/8/8/8/8/8/8 w - - 0 1",                                   // sem reis
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",             // 7 linhas
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",    // 9 vazias
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",    // lado inválido
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkx - 0 1",    // roque inválido
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",    // peça inválida
            "kk6/8/8/8/8/8/8/K7 w - - 0 1",                                // dois reis pretos
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",                              // en passant na linha errada
        ];
        for fen in bad {
            assert!(matches!(Board::from_fen(fen), Err(EngineError::InvalidFen { .. })), "{}", fen);
        }
    }

    #[test]
    fn test_castling_rights_without_rooks_are_dropped() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w KQkq - 0 1").unwrap();
        assert_eq!(board.castling_rights, WHITE_KINGSIDE);
    }

    #[test]
    fn test_parse_move() {
        let board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert!(mv.is_double_push());
        assert!(matches!(board.parse_move("e2e5"), Err(EngineError::IllegalMove(_))));
        assert!(matches!(board.parse_move("zz"), Err(EngineError::InvalidNotation(_))));
        assert!(matches!(board.parse_move("e7e8x"), Err(EngineError::InvalidNotation(_))));
    }

    #[test]
    fn test_parse_promotion() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8n").unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Knight));
        assert!(board.parse_move("a7a8").is_err());
    }
}
