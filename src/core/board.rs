// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::types::*;
use super::zobrist::zobrist_keys;
use crate::moves;
use std::fmt;

/// Máscaras de direitos de roque: o que sobra depois de uma peça sair de
/// (ou chegar a) cada casa.
const fn generate_castling_masks() -> [u8; 64] {
    let mut masks = [ALL_CASTLING; 64];
    masks[0] = ALL_CASTLING & !WHITE_QUEENSIDE; // a1
    masks[7] = ALL_CASTLING & !WHITE_KINGSIDE; // h1
    masks[4] = ALL_CASTLING & !(WHITE_KINGSIDE | WHITE_QUEENSIDE); // e1
    masks[56] = ALL_CASTLING & !BLACK_QUEENSIDE; // a8
    masks[63] = ALL_CASTLING & !BLACK_KINGSIDE; // h8
    masks[60] = ALL_CASTLING & !(BLACK_KINGSIDE | BLACK_QUEENSIDE); // e8
    masks
}

static CASTLING_MASKS: [u8; 64] = generate_castling_masks();

/// Casas de origem e destino da torre num roque.
#[inline]
pub fn castle_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    match (color, side) {
        (Color::White, CastleSide::King) => (7, 5),
        (Color::White, CastleSide::Queen) => (0, 3),
        (Color::Black, CastleSide::King) => (63, 61),
        (Color::Black, CastleSide::Queen) => (56, 59),
    }
}

/// Casa do peão capturado en passant.
#[inline]
pub fn en_passant_victim(target: Square, mover: Color) -> Square {
    match mover {
        Color::White => target - 8,
        Color::Black => target + 8,
    }
}

// A struct principal do tabuleiro, usando Bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Bitboards para cada tipo de peça.
    pub pawns: Bitboard,
    pub knights: Bitboard,
    pub bishops: Bitboard,
    pub rooks: Bitboard,
    pub queens: Bitboard,
    pub kings: Bitboard,

    // Bitboards para as peças de cada cor.
    pub white_pieces: Bitboard,
    pub black_pieces: Bitboard,

    // De quem é a vez de jogar.
    pub to_move: Color,

    pub en_passant_target: Option<Square>,

    pub castling_rights: u8, // Bits: 0=K, 1=Q, 2=k, 3=q

    pub halfmove_clock: u16,   // Contador para regra dos 50 movimentos
    pub fullmove_number: u16,
    pub zobrist_hash: u64,     // Mantido incrementalmente por make/undo
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Tabuleiro vazio, sem reis. Só serve de ponto de partida ao parser FEN.
    pub(crate) fn empty() -> Self {
        Board {
            pawns: 0, knights: 0, bishops: 0, rooks: 0, queens: 0, kings: 0,
            white_pieces: 0, black_pieces: 0,
            to_move: Color::White, en_passant_target: None, castling_rights: 0,
            halfmove_clock: 0, fullmove_number: 1, zobrist_hash: 0,
        }
    }

    /// Cria um novo tabuleiro na posição inicial padrão usando bitboards.
    pub fn new() -> Self {
        const WHITE_PAWNS: Bitboard = 0x0000_0000_0000_FF00;
        const WHITE_ROOKS: Bitboard = 0x0000_0000_0000_0081;
        const WHITE_KNIGHTS: Bitboard = 0x0000_0000_0000_0042;
        const WHITE_BISHOPS: Bitboard = 0x0000_0000_0000_0024;
        const WHITE_QUEEN: Bitboard = 0x0000_0000_0000_0008;
        const WHITE_KING: Bitboard = 0x0000_0000_0000_0010;

        const BLACK_PAWNS: Bitboard = WHITE_PAWNS << 40;
        const BLACK_ROOKS: Bitboard = WHITE_ROOKS << 56;
        const BLACK_KNIGHTS: Bitboard = WHITE_KNIGHTS << 56;
        const BLACK_BISHOPS: Bitboard = WHITE_BISHOPS << 56;
        const BLACK_QUEEN: Bitboard = WHITE_QUEEN << 56;
        const BLACK_KING: Bitboard = WHITE_KING << 56;

        let mut board = Board {
            pawns: WHITE_PAWNS | BLACK_PAWNS,
            knights: WHITE_KNIGHTS | BLACK_KNIGHTS,
            bishops: WHITE_BISHOPS | BLACK_BISHOPS,
            rooks: WHITE_ROOKS | BLACK_ROOKS,
            queens: WHITE_QUEEN | BLACK_QUEEN,
            kings: WHITE_KING | BLACK_KING,
            white_pieces: WHITE_PAWNS | WHITE_ROOKS | WHITE_KNIGHTS | WHITE_BISHOPS | WHITE_QUEEN | WHITE_KING,
            black_pieces: BLACK_PAWNS | BLACK_ROOKS | BLACK_KNIGHTS | BLACK_BISHOPS | BLACK_QUEEN | BLACK_KING,
            to_move: Color::White,
            en_passant_target: None,
            castling_rights: ALL_CASTLING, // Todos os roques inicialmente permitidos
            halfmove_clock: 0,
            fullmove_number: 1,
            zobrist_hash: 0,
        };

        board.zobrist_hash = board.compute_zobrist_hash();
        board
    }

    // ------------------------------------------------------------------
    // Consultas de peças
    // ------------------------------------------------------------------

    #[inline(always)]
    pub fn pieces_of(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white_pieces,
            Color::Black => self.black_pieces,
        }
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.white_pieces | self.black_pieces
    }

    #[inline(always)]
    pub fn kind_bb(&self, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::Pawn => self.pawns,
            PieceKind::Knight => self.knights,
            PieceKind::Bishop => self.bishops,
            PieceKind::Rook => self.rooks,
            PieceKind::Queen => self.queens,
            PieceKind::King => self.kings,
        }
    }

    #[inline(always)]
    fn kind_bb_mut(&mut self, kind: PieceKind) -> &mut Bitboard {
        match kind {
            PieceKind::Pawn => &mut self.pawns,
            PieceKind::Knight => &mut self.knights,
            PieceKind::Bishop => &mut self.bishops,
            PieceKind::Rook => &mut self.rooks,
            PieceKind::Queen => &mut self.queens,
            PieceKind::King => &mut self.kings,
        }
    }

    /// Bitboard das peças de um tipo e de uma cor.
    #[inline(always)]
    pub fn pieces(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.kind_bb(kind) & self.pieces_of(color)
    }

    /// Identifica o tipo de peça numa casa usando bitboards
    #[inline]
    pub fn kind_at(&self, square: Square) -> Option<PieceKind> {
        let bb = square_bb(square);
        if self.occupied() & bb == 0 { None }
        else if (self.pawns & bb) != 0 { Some(PieceKind::Pawn) }
        else if (self.knights & bb) != 0 { Some(PieceKind::Knight) }
        else if (self.bishops & bb) != 0 { Some(PieceKind::Bishop) }
        else if (self.rooks & bb) != 0 { Some(PieceKind::Rook) }
        else if (self.queens & bb) != 0 { Some(PieceKind::Queen) }
        else { Some(PieceKind::King) }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let kind = self.kind_at(square)?;
        let color = if self.white_pieces & square_bb(square) != 0 { Color::White } else { Color::Black };
        Some(Piece::new(kind, color))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king_bb = self.pieces(PieceKind::King, color);
        if king_bb == 0 { None } else { Some(king_bb.trailing_zeros() as Square) }
    }

    /// Retorna o número de peças de cada tipo para avaliação
    pub fn piece_count(&self, color: Color, piece_kind: PieceKind) -> u32 {
        self.pieces(piece_kind, color).count_ones()
    }

    // ------------------------------------------------------------------
    // Make / undo
    // ------------------------------------------------------------------

    /// Liga/desliga uma peça numa casa, atualizando o hash Zobrist.
    /// É a única primitiva que altera os bitboards.
    #[inline(always)]
    pub(crate) fn toggle_piece(&mut self, piece: Piece, square: Square) {
        let bb = square_bb(square);
        *self.kind_bb_mut(piece.kind) ^= bb;
        match piece.color {
            Color::White => self.white_pieces ^= bb,
            Color::Black => self.black_pieces ^= bb,
        }
        self.zobrist_hash ^= zobrist_keys().piece(piece, square);
    }

    #[inline(always)]
    fn shift_piece(&mut self, piece: Piece, from: Square, to: Square) {
        self.toggle_piece(piece, from);
        self.toggle_piece(piece, to);
    }

    /// Executa um lance, atualizando o estado do tabuleiro e o hash.
    /// Devolve o token necessário para o desfazer com [`Board::undo_move`].
    ///
    /// # Panics
    ///
    /// Se a casa de origem não contiver a peça do jogador a mover: só lances
    /// devolvidos pelo gerador podem ser aplicados.
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        let us = self.to_move;
        let them = !us;
        assert!(
            self.pieces(mv.piece, us) & square_bb(mv.from) != 0,
            "make_move: lance ilegal {} ({:?}) para {}",
            mv, mv.piece, us
        );

        let keys = zobrist_keys();
        let undo = UndoInfo {
            mv,
            old_castling_rights: self.castling_rights,
            old_en_passant_target: self.en_passant_target,
            old_halfmove_clock: self.halfmove_clock,
            old_fullmove_number: self.fullmove_number,
            old_zobrist_hash: self.zobrist_hash,
        };

        // Atualiza hash Zobrist - remove estado atual
        if let Some(ep_square) = self.en_passant_target {
            self.zobrist_hash ^= keys.en_passant_file(ep_square);
        }
        self.zobrist_hash ^= keys.castling_rights(self.castling_rights);
        self.en_passant_target = None;

        let mover = Piece::new(mv.piece, us);
        match mv.kind {
            MoveKind::Quiet => self.shift_piece(mover, mv.from, mv.to),
            MoveKind::DoublePush => {
                self.shift_piece(mover, mv.from, mv.to);
                self.en_passant_target = Some((mv.from + mv.to) / 2);
            }
            MoveKind::Capture(captured) => {
                // A peça capturada sai primeiro: pode partilhar o bitboard do atacante.
                self.toggle_piece(Piece::new(captured, them), mv.to);
                self.shift_piece(mover, mv.from, mv.to);
            }
            MoveKind::EnPassant => {
                self.toggle_piece(Piece::new(PieceKind::Pawn, them), en_passant_victim(mv.to, us));
                self.shift_piece(mover, mv.from, mv.to);
            }
            MoveKind::Castle(side) => {
                self.shift_piece(mover, mv.from, mv.to);
                let (rook_from, rook_to) = castle_rook_squares(us, side);
                self.shift_piece(Piece::new(PieceKind::Rook, us), rook_from, rook_to);
            }
            MoveKind::Promotion { promote_to, captured } => {
                if let Some(captured) = captured {
                    self.toggle_piece(Piece::new(captured, them), mv.to);
                }
                self.toggle_piece(mover, mv.from);
                self.toggle_piece(Piece::new(promote_to, us), mv.to);
            }
        }

        self.castling_rights &= CASTLING_MASKS[mv.from as usize] & CASTLING_MASKS[mv.to as usize];

        if mv.piece == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.to_move = them;

        // Atualiza hash Zobrist - adiciona novo estado
        self.zobrist_hash ^= keys.side_to_move;
        if let Some(ep_square) = self.en_passant_target {
            self.zobrist_hash ^= keys.en_passant_file(ep_square);
        }
        self.zobrist_hash ^= keys.castling_rights(self.castling_rights);

        undo
    }

    /// Desfaz o lance registado em `undo`, repondo o estado anterior bit a bit.
    /// O hash é revertido com os mesmos XOR usados em `make_move`.
    pub fn undo_move(&mut self, undo: UndoInfo) {
        let mv = undo.mv;
        let them = self.to_move;
        let us = !them;
        let keys = zobrist_keys();

        self.zobrist_hash ^= keys.side_to_move;
        if let Some(ep_square) = self.en_passant_target {
            self.zobrist_hash ^= keys.en_passant_file(ep_square);
        }
        self.zobrist_hash ^= keys.castling_rights(self.castling_rights);

        let mover = Piece::new(mv.piece, us);
        match mv.kind {
            MoveKind::Quiet | MoveKind::DoublePush => self.shift_piece(mover, mv.to, mv.from),
            MoveKind::Capture(captured) => {
                self.shift_piece(mover, mv.to, mv.from);
                self.toggle_piece(Piece::new(captured, them), mv.to);
            }
            MoveKind::EnPassant => {
                self.shift_piece(mover, mv.to, mv.from);
                self.toggle_piece(Piece::new(PieceKind::Pawn, them), en_passant_victim(mv.to, us));
            }
            MoveKind::Castle(side) => {
                let (rook_from, rook_to) = castle_rook_squares(us, side);
                self.shift_piece(Piece::new(PieceKind::Rook, us), rook_to, rook_from);
                self.shift_piece(mover, mv.to, mv.from);
            }
            MoveKind::Promotion { promote_to, captured } => {
                self.toggle_piece(Piece::new(promote_to, us), mv.to);
                self.toggle_piece(mover, mv.from);
                if let Some(captured) = captured {
                    self.toggle_piece(Piece::new(captured, them), mv.to);
                }
            }
        }

        self.to_move = us;
        self.castling_rights = undo.old_castling_rights;
        self.en_passant_target = undo.old_en_passant_target;
        self.halfmove_clock = undo.old_halfmove_clock;
        self.fullmove_number = undo.old_fullmove_number;

        if let Some(ep_square) = self.en_passant_target {
            self.zobrist_hash ^= keys.en_passant_file(ep_square);
        }
        self.zobrist_hash ^= keys.castling_rights(self.castling_rights);

        debug_assert_eq!(self.zobrist_hash, undo.old_zobrist_hash);
    }

    // ------------------------------------------------------------------
    // Ataques e xeque
    // ------------------------------------------------------------------

    /// Verifica se uma casa é atacada por peças da cor especificada
    pub fn is_square_attacked_by(&self, square: Square, attacking_color: Color) -> bool {
        let attacking_pieces = self.pieces_of(attacking_color);

        // Early exit: se não há peças atacantes, não há ataques
        if attacking_pieces == 0 { return false; }

        // Um peão atacante está onde um peão da outra cor, nesta casa, atacaria.
        let pawn_sources = moves::pawn::pawn_attacks(square, !attacking_color);
        if (pawn_sources & self.pawns & attacking_pieces) != 0 { return true; }

        if (moves::knight::knight_attacks(square) & self.knights & attacking_pieces) != 0 { return true; }

        if (moves::king::king_attacks(square) & self.kings & attacking_pieces) != 0 { return true; }

        let occupancy = self.occupied();
        let diagonal = (self.bishops | self.queens) & attacking_pieces;
        if diagonal != 0 && (moves::sliding::bishop_attacks(square, occupancy) & diagonal) != 0 {
            return true;
        }

        let straight = (self.rooks | self.queens) & attacking_pieces;
        straight != 0 && (moves::sliding::rook_attacks(square, occupancy) & straight) != 0
    }

    /// Verifica se o rei da cor especificada está em xeque
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_square) => self.is_square_attacked_by(king_square, !color),
            None => false, // Não há rei (situação anormal)
        }
    }

    /// O jogador a mover está em xeque?
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_in_check(self.to_move)
    }

    // ------------------------------------------------------------------
    // Geração de lances
    // ------------------------------------------------------------------

    /// Gera todos os lances pseudo-legais para todas as peças do jogador atual.
    pub fn generate_all_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        moves::pawn::generate_pawn_moves_into(self, &mut moves);
        moves::knight::generate_knight_moves_into(self, &mut moves);
        moves::sliding::generate_sliding_moves_into(self, PieceKind::Bishop, &mut moves);
        moves::sliding::generate_sliding_moves_into(self, PieceKind::Rook, &mut moves);
        moves::sliding::generate_sliding_moves_into(self, PieceKind::Queen, &mut moves);
        moves::king::generate_king_moves_into(self, &mut moves);
        moves
    }

    /// Gera apenas movimentos legais (filtra movimentos que deixam o rei em xeque)
    pub fn generate_legal_moves(&self) -> Vec<Move> {
        let us = self.to_move;
        let mut scratch = *self;
        let mut moves = self.generate_all_moves();
        moves.retain(|&mv| {
            let undo = scratch.make_move(mv);
            let legal = !scratch.is_king_in_check(us);
            scratch.undo_move(undo);
            legal
        });
        moves
    }

    /// Existe pelo menos um lance legal? Pára no primeiro encontrado.
    pub fn has_legal_move(&self) -> bool {
        let us = self.to_move;
        let mut scratch = *self;
        self.generate_all_moves().into_iter().any(|mv| {
            let undo = scratch.make_move(mv);
            let legal = !scratch.is_king_in_check(us);
            scratch.undo_move(undo);
            legal
        })
    }

    /// Verifica se um movimento é legal
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.generate_legal_moves().contains(&mv)
    }

    // ------------------------------------------------------------------
    // Estados terminais
    // ------------------------------------------------------------------

    /// Verifica se a posição atual é xeque-mate
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    /// Verifica se a posição atual é empate por afogamento
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    /// Verifica se há empate por material insuficiente
    pub fn is_draw_by_insufficient_material(&self) -> bool {
        let piece_count = self.occupied().count_ones();

        // King vs King
        if piece_count == 2 {
            return true;
        }

        // King + minor piece vs King
        if piece_count == 3 {
            let has_major_pieces = (self.pawns | self.rooks | self.queens) != 0;
            if !has_major_pieces {
                let minors = self.knights | self.bishops;
                return minors.count_ones() == 1;
            }
        }

        // King + Bishop vs King + Bishop (same color squares)
        if piece_count == 4 && (self.pawns | self.rooks | self.queens | self.knights) == 0 {
            let white_bishops = self.bishops & self.white_pieces;
            let black_bishops = self.bishops & self.black_pieces;

            if white_bishops.count_ones() == 1 && black_bishops.count_ones() == 1 {
                let light_squares = 0x55AA55AA55AA55AA;
                let white_on_light = (white_bishops & light_squares) != 0;
                let black_on_light = (black_bishops & light_squares) != 0;
                return white_on_light == black_on_light;
            }
        }

        false
    }

    /// Verifica se há empate pela regra dos 50 movimentos
    pub fn is_draw_by_50_moves(&self) -> bool {
        self.halfmove_clock >= 100 // 50 movimentos = 100 half-moves
    }

    /// Empate decidível só a partir da posição (sem histórico de repetições).
    /// Um xeque-mate nunca é empate, mesmo com o relógio dos 50 lances esgotado.
    pub fn is_draw(&self) -> bool {
        if !self.has_legal_move() {
            return !self.in_check();
        }
        self.is_draw_by_50_moves() || self.is_draw_by_insufficient_material()
    }

    /// Verifica se o jogo acabou (xeque-mate ou empate)
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move() || self.is_draw_by_insufficient_material() || self.is_draw_by_50_moves()
    }

    // ------------------------------------------------------------------
    // Hash
    // ------------------------------------------------------------------

    /// Calcula o hash Zobrist da posição atual de raiz
    pub fn compute_zobrist_hash(&self) -> u64 {
        let keys = zobrist_keys();
        let mut hash = 0u64;

        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let mut bb = self.pieces(kind, color);
                while bb != 0 {
                    let square = bb.trailing_zeros() as Square;
                    hash ^= keys.piece(Piece::new(kind, color), square);
                    bb &= bb - 1;
                }
            }
        }

        // Hash dos direitos de roque
        hash ^= keys.castling_rights(self.castling_rights);

        // Hash do en passant
        if let Some(ep_square) = self.en_passant_target {
            hash ^= keys.en_passant_file(ep_square);
        }

        // Hash de quem joga
        if self.to_move == Color::Black {
            hash ^= keys.side_to_move;
        }

        hash
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let ch = self.piece_at(rank * 8 + file).map_or('.', Piece::to_char);
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(board: &Board, uci: &str) -> Move {
        board
            .generate_legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == uci)
            .unwrap_or_else(|| panic!("{} não é legal", uci))
    }

    #[test]
    fn test_start_position() {
        let board = Board::new();
        assert_eq!(board.generate_legal_moves().len(), 20);
        assert_eq!(board.zobrist_hash, board.compute_zobrist_hash());
        assert_eq!(board.king_square(Color::White), Some(4));
        assert_eq!(board.king_square(Color::Black), Some(60));
        assert!(!board.in_check());
    }

    #[test]
    fn test_double_push_sets_en_passant() {
        let mut board = Board::new();
        let undo = board.make_move(find(&board, "e2e4"));
        assert_eq!(board.en_passant_target, Some(20)); // e3
        assert_eq!(board.to_move, Color::Black);
        assert_eq!(board.zobrist_hash, board.compute_zobrist_hash());
        board.undo_move(undo);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_halfmove_and_fullmove_counters() {
        let mut board = Board::new();
        board.make_move(find(&board, "g1f3"));
        assert_eq!(board.halfmove_clock, 1);
        assert_eq!(board.fullmove_number, 1);
        board.make_move(find(&board, "g8f6"));
        assert_eq!(board.halfmove_clock, 2);
        assert_eq!(board.fullmove_number, 2);
        board.make_move(find(&board, "e2e4"));
        assert_eq!(board.halfmove_clock, 0);
    }

    #[test]
    #[should_panic(expected = "lance ilegal")]
    fn test_make_move_rejects_foreign_piece() {
        let mut board = Board::new();
        // Peão preto numa jogada das brancas.
        let bogus = Move::new(52, 36, PieceKind::Pawn, MoveKind::DoublePush);
        board.make_move(bogus);
    }

    #[test]
    fn test_checkmate_beats_fifty_move_rule() {
        let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 99 80").unwrap();
        board.make_move(find(&board, "a1a8"));
        assert_eq!(board.halfmove_clock, 100);
        assert!(board.is_checkmate());
        assert!(!board.is_draw());
        assert!(board.is_game_over());

        // Sem mate, o mesmo relógio empata.
        let quiet = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 b - - 100 80").unwrap();
        assert!(quiet.is_draw());
    }

    #[test]
    fn test_insufficient_material() {
        let mut board = Board::empty();
        board.toggle_piece(Piece::new(PieceKind::King, Color::White), 4);
        board.toggle_piece(Piece::new(PieceKind::King, Color::Black), 60);
        assert!(board.is_draw_by_insufficient_material());

        board.toggle_piece(Piece::new(PieceKind::Knight, Color::White), 1);
        assert!(board.is_draw_by_insufficient_material());

        board.toggle_piece(Piece::new(PieceKind::Pawn, Color::Black), 48);
        assert!(!board.is_draw_by_insufficient_material());
    }
}
