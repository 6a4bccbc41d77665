// Ficheiro: src/core/zobrist.rs
// Descrição: Chaves Zobrist para o hash incremental das posições.

use super::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

// Semente fixa: o mesmo tabuleiro tem sempre o mesmo hash entre execuções.
const ZOBRIST_SEED: u64 = 0x5EED_0F_C0FF_EE42;

pub struct ZobristKeys {
    pub pieces: [[[u64; 64]; 6]; 2], // [color][piece_type][square]
    pub castling: [u64; 4],          // Um por bit de direito de roque
    pub en_passant: [u64; 8],        // Para en passant por coluna
    pub side_to_move: u64,           // Aplicada quando jogam as pretas
}

impl ZobristKeys {
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut keys = ZobristKeys {
            pieces: [[[0; 64]; 6]; 2],
            castling: [0; 4],
            en_passant: [0; 8],
            side_to_move: 0,
        };

        for color in keys.pieces.iter_mut() {
            for piece in color.iter_mut() {
                for square in piece.iter_mut() {
                    *square = rng.gen();
                }
            }
        }
        for key in keys.castling.iter_mut() {
            *key = rng.gen();
        }
        for key in keys.en_passant.iter_mut() {
            *key = rng.gen();
        }
        keys.side_to_move = rng.gen();

        keys
    }

    #[inline(always)]
    pub fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.color.index()][piece.kind.index()][square as usize]
    }

    /// XOR de todas as chaves dos bits de roque ativos.
    #[inline]
    pub fn castling_rights(&self, rights: u8) -> u64 {
        let mut hash = 0;
        for (bit, key) in self.castling.iter().enumerate() {
            if rights & (1 << bit) != 0 {
                hash ^= key;
            }
        }
        hash
    }

    #[inline(always)]
    pub fn en_passant_file(&self, square: Square) -> u64 {
        self.en_passant[file_of(square) as usize]
    }
}

static ZOBRIST_KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Instância global das chaves Zobrist
#[inline]
pub fn zobrist_keys() -> &'static ZobristKeys {
    ZOBRIST_KEYS.get_or_init(ZobristKeys::generate)
}
