// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;

// Um Bitboard é um inteiro de 64 bits sem sinal. Cada bit representa uma casa.
// Bit 0 = a1, Bit 1 = b1, ..., Bit 63 = h8.
pub type Bitboard = u64;

/// Índice de casa (0 = a1, 63 = h8).
pub type Square = u8;

// Direitos de roque: Bits 0=K, 1=Q, 2=k, 3=q
pub const WHITE_KINGSIDE: u8 = 0b0001;
pub const WHITE_QUEENSIDE: u8 = 0b0010;
pub const BLACK_KINGSIDE: u8 = 0b0100;
pub const BLACK_QUEENSIDE: u8 = 0b1000;
pub const ALL_CASTLING: u8 = 0b1111;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Ordem em que as promoções são geradas.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Valor nominal usado na ordenação de lances (MVV-LVA).
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn   => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook   => 500,
            PieceKind::Queen  => 900,
            PieceKind::King   => 20000, // Valor alto para evitar trocas
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Letra FEN da peça (maiúscula para as brancas).
    pub fn to_char(self) -> char {
        let ch = self.kind.to_char();
        if self.color == Color::White { ch.to_ascii_uppercase() } else { ch }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

/// Variante fechada com exatamente os dados que cada tipo de lance precisa
/// para ser aplicado e desfeito.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    DoublePush,
    Capture(PieceKind),
    EnPassant,
    Castle(CastleSide),
    Promotion {
        promote_to: PieceKind,
        captured: Option<PieceKind>,
    },
}

// Struct para representar um lance no jogo.
// A peça capturada é fixada no momento da geração.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: PieceKind, kind: MoveKind) -> Self {
        Move { from, to, piece, kind }
    }

    #[inline]
    pub fn captured(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Capture(piece) => Some(piece),
            MoveKind::EnPassant => Some(PieceKind::Pawn),
            MoveKind::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub fn is_double_push(&self) -> bool {
        matches!(self.kind, MoveKind::DoublePush)
    }

    /// Lance silencioso: nem captura nem promoção.
    #[inline]
    pub fn is_quiet(&self) -> bool {
        !self.is_capture() && self.promotion().is_none()
    }

    /// Notação UCI (e2e4, e7e8q).
    pub fn to_uci(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(p) = self.promotion() {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}

/// Estrutura para armazenar o estado do tabuleiro antes de um movimento.
/// Tudo o que não pode ser derivado do próprio lance fica aqui.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    pub mv: Move,
    pub old_castling_rights: u8,
    pub old_en_passant_target: Option<Square>,
    pub old_halfmove_clock: u16,
    pub old_fullmove_number: u16,
    pub old_zobrist_hash: u64,
}

#[inline(always)]
pub fn file_of(sq: Square) -> u8 {
    sq % 8
}

#[inline(always)]
pub fn rank_of(sq: Square) -> u8 {
    sq / 8
}

#[inline(always)]
pub fn square_bb(sq: Square) -> Bitboard {
    1u64 << sq
}

pub fn square_name(sq: Square) -> String {
    let file = (sq % 8) + b'a';
    let rank = (sq / 8) + b'1';
    format!("{}{}", file as char, rank as char)
}

/// Converte "e4" no índice da casa.
pub fn parse_square(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a')?;
    let rank = bytes[1].checked_sub(b'1')?;
    if file < 8 && rank < 8 {
        Some(rank * 8 + file)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_names() {
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(63), "h8");
        assert_eq!(parse_square("e4"), Some(28));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
    }

    #[test]
    fn test_move_display() {
        let push = Move::new(12, 28, PieceKind::Pawn, MoveKind::DoublePush);
        assert_eq!(push.to_string(), "e2e4");

        let promo = Move::new(
            52,
            60,
            PieceKind::Pawn,
            MoveKind::Promotion { promote_to: PieceKind::Knight, captured: None },
        );
        assert_eq!(promo.to_string(), "e7e8n");
        assert!(!promo.is_capture());
        assert!(!promo.is_quiet());
    }

    #[test]
    fn test_captured_piece_by_kind() {
        let ep = Move::new(36, 43, PieceKind::Pawn, MoveKind::EnPassant);
        assert_eq!(ep.captured(), Some(PieceKind::Pawn));

        let castle = Move::new(4, 6, PieceKind::King, MoveKind::Castle(CastleSide::King));
        assert_eq!(castle.captured(), None);
        assert!(castle.is_castling());
    }
}
