// Transposition Table partilhada entre threads, sem locks.
//
// Cada slot são duas palavras atómicas: (chave ^ dados, dados). Uma leitura
// que apanhe metade de uma escrita concorrente não reconstrói a chave e é
// tratada como miss.

use crate::core::{Move, PieceKind, Square};
use crate::search::MATE_THRESHOLD;
use std::sync::atomic::{AtomicU64, Ordering};

const MIN_ENTRIES: usize = 1024;
const ENTRY_BYTES: usize = 16;
const GENERATION_MASK: u8 = 0x3F;

/// Flags para entrada da TT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact, // Score exato
    Lower, // Score >= beta (fail-high)
    Upper, // Score <= alpha (fail-low)
}

impl Bound {
    fn to_bits(self) -> u64 {
        match self {
            Bound::Exact => 1,
            Bound::Lower => 2,
            Bound::Upper => 3,
        }
    }

    fn from_bits(bits: u64) -> Option<Bound> {
        match bits {
            1 => Some(Bound::Exact),
            2 => Some(Bound::Lower),
            3 => Some(Bound::Upper),
            _ => None,
        }
    }
}

/// Lance compactado em 16 bits: origem, destino e promoção.
/// A TT não guarda o lance completo; é reconciliado com os lances legais.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveKey {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveKey {
    pub fn matches(&self, mv: &Move) -> bool {
        mv.from == self.from && mv.to == self.to && mv.promotion() == self.promotion
    }

    fn pack(mv: Option<&Move>) -> u64 {
        let Some(mv) = mv else { return 0 };
        let promo = match mv.promotion() {
            None => 0,
            Some(PieceKind::Knight) => 1,
            Some(PieceKind::Bishop) => 2,
            Some(PieceKind::Rook) => 3,
            Some(_) => 4,
        };
        (mv.from as u64) | ((mv.to as u64) << 6) | (promo << 12) | (1 << 15)
    }

    fn unpack(bits: u64) -> Option<MoveKey> {
        if bits & (1 << 15) == 0 {
            return None;
        }
        let promotion = match (bits >> 12) & 0x7 {
            1 => Some(PieceKind::Knight),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Queen),
            _ => None,
        };
        Some(MoveKey {
            from: (bits & 0x3F) as Square,
            to: ((bits >> 6) & 0x3F) as Square,
            promotion,
        })
    }
}

/// Entrada descompactada da transposition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<MoveKey>,
    pub generation: u8,
}

impl TTEntry {
    // bits 0..15 lance, 16..23 profundidade, 24..25 bound, 26..31 geração, 32..63 score
    fn pack(depth: u8, score: i32, bound: Bound, best_move: Option<&Move>, generation: u8) -> u64 {
        MoveKey::pack(best_move)
            | ((depth as u64) << 16)
            | (bound.to_bits() << 24)
            | (((generation & GENERATION_MASK) as u64) << 26)
            | ((score as u32 as u64) << 32)
    }

    fn unpack(data: u64) -> Option<TTEntry> {
        let bound = Bound::from_bits((data >> 24) & 0x3)?;
        Some(TTEntry {
            depth: ((data >> 16) & 0xFF) as u8,
            score: (data >> 32) as u32 as i32,
            bound,
            best_move: MoveKey::unpack(data & 0xFFFF),
            generation: ((data >> 26) & GENERATION_MASK as u64) as u8,
        })
    }
}

struct Slot {
    key_xor_data: AtomicU64,
    data: AtomicU64,
}

/// Transposition Table thread-safe com substituição por profundidade.
pub struct TranspositionTable {
    slots: Box<[Slot]>,
    mask: usize,
    generation: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TranspositionTable {
    /// Cria nova TT com tamanho em MB (arredondado para potência de 2)
    pub fn new(size_mb: usize) -> Self {
        let wanted = (size_mb * 1024 * 1024) / ENTRY_BYTES;
        let size = if wanted.is_power_of_two() { wanted } else { wanted.next_power_of_two() / 2 };
        Self::with_entries(size)
    }

    /// Cria uma TT com (pelo menos) `entries` slots.
    pub fn with_entries(entries: usize) -> Self {
        let size = entries.max(MIN_ENTRIES).next_power_of_two();
        TranspositionTable {
            slots: (0..size)
                .map(|_| Slot { key_xor_data: AtomicU64::new(0), data: AtomicU64::new(0) })
                .collect(),
            mask: size - 1,
            generation: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> &Slot {
        &self.slots[(hash as usize) & self.mask]
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn generation(&self) -> u8 {
        (self.generation.load(Ordering::Relaxed) as u8) & GENERATION_MASK
    }

    /// Lê a entrada, se existir e não estiver corrompida por uma escrita concorrente.
    fn read(&self, hash: u64) -> Option<TTEntry> {
        let slot = self.slot(hash);
        let data = slot.data.load(Ordering::Relaxed);
        let key_xor_data = slot.key_xor_data.load(Ordering::Relaxed);
        if key_xor_data ^ data != hash {
            return None;
        }
        TTEntry::unpack(data)
    }

    /// Busca entrada na TT
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        let entry = self.read(hash);
        let counter = if entry.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        entry
    }

    /// Armazena entrada na TT.
    /// Substitui se o slot estiver vazio, pertencer a uma busca anterior ou
    /// se a nova profundidade for >= à guardada.
    pub fn store(&self, hash: u64, depth: u8, score: i32, bound: Bound, best_move: Option<&Move>) {
        let slot = self.slot(hash);
        let generation = self.generation();

        let current = TTEntry::unpack(slot.data.load(Ordering::Relaxed));
        let should_replace = match current {
            None => true,
            Some(entry) => entry.generation != generation || depth >= entry.depth,
        };
        if !should_replace {
            return;
        }

        // Mantém o lance anterior da mesma posição se não houver um novo.
        let keep_move = best_move.is_none()
            && self.read(hash).and_then(|entry| entry.best_move).is_some();
        let mut data = TTEntry::pack(depth, score, bound, best_move, generation);
        if keep_move {
            data |= slot.data.load(Ordering::Relaxed) & 0xFFFF;
        }

        slot.key_xor_data.store(hash ^ data, Ordering::Relaxed);
        slot.data.store(data, Ordering::Relaxed);
    }

    /// Incrementa a geração para a política de substituição
    pub fn new_search(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// Limpa a TT
    pub fn clear(&self) {
        for slot in self.slots.iter() {
            slot.key_xor_data.store(0, Ordering::Relaxed);
            slot.data.store(0, Ordering::Relaxed);
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Retorna estatísticas (hits, misses)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits.load(Ordering::Relaxed), self.misses.load(Ordering::Relaxed))
    }

    /// Ocupação por mil das primeiras 1000 entradas (formato UCI `hashfull`).
    pub fn hashfull(&self) -> u32 {
        let sample = self.slots.len().min(1000);
        let used = self.slots[..sample]
            .iter()
            .filter(|slot| slot.data.load(Ordering::Relaxed) != 0)
            .count();
        (used * 1000 / sample) as u32
    }
}

/// Ajusta score de mate para armazenar na TT (relativo ao nó)
#[inline]
pub fn score_to_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply
    } else if score <= -MATE_THRESHOLD {
        score - ply
    } else {
        score
    }
}

/// Ajusta score de mate lido da TT (relativo à raiz)
#[inline]
pub fn score_from_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply
    } else if score <= -MATE_THRESHOLD {
        score + ply
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveKind;

    fn quiet(from: Square, to: Square) -> Move {
        Move::new(from, to, PieceKind::Knight, MoveKind::Quiet)
    }

    #[test]
    fn test_store_and_probe() {
        let tt = TranspositionTable::with_entries(1024);
        let mv = quiet(6, 21);
        tt.store(0xDEAD_BEEF, 5, -123, Bound::Lower, Some(&mv));

        let entry = tt.probe(0xDEAD_BEEF).unwrap();
        assert_eq!(entry.depth, 5);
        assert_eq!(entry.score, -123);
        assert_eq!(entry.bound, Bound::Lower);
        assert!(entry.best_move.unwrap().matches(&mv));
        assert!(tt.probe(0xDEAD_BEEF ^ (1 << 40)).is_none());
        assert_eq!(tt.stats(), (1, 1));
    }

    #[test]
    fn test_promotion_key() {
        let tt = TranspositionTable::with_entries(1024);
        let promo = Move::new(52, 60, PieceKind::Pawn, MoveKind::Promotion { promote_to: PieceKind::Knight, captured: None });
        tt.store(42, 1, 0, Bound::Exact, Some(&promo));
        let key = tt.probe(42).unwrap().best_move.unwrap();
        assert_eq!(key.promotion, Some(PieceKind::Knight));
        assert!(key.matches(&promo));
    }

    #[test]
    fn test_depth_preferred_replacement() {
        let tt = TranspositionTable::with_entries(1024);
        let hash = 7;
        tt.store(hash, 6, 10, Bound::Exact, None);
        tt.store(hash, 3, 20, Bound::Exact, None);
        assert_eq!(tt.probe(hash).unwrap().score, 10);

        tt.store(hash, 6, 30, Bound::Exact, None);
        assert_eq!(tt.probe(hash).unwrap().score, 30);

        // Uma nova busca pode sobrescrever entradas antigas mais profundas.
        tt.new_search();
        tt.store(hash, 1, 40, Bound::Upper, None);
        assert_eq!(tt.probe(hash).unwrap().score, 40);
    }

    #[test]
    fn test_size_rounding_and_clear() {
        let tt = TranspositionTable::new(1);
        assert_eq!(tt.capacity(), 65536);
        assert_eq!(TranspositionTable::with_entries(1).capacity(), MIN_ENTRIES);

        tt.store(99, 2, 5, Bound::Exact, None);
        assert!(tt.hashfull() <= 1000);
        tt.clear();
        assert!(tt.probe(99).is_none());
    }

    #[test]
    fn test_mate_score_adjustment() {
        // Mate visto a 5 meios-lances da raiz, guardado num nó a ply 2.
        let root_score = crate::search::MATE_SCORE - 5;
        let stored = score_to_tt(root_score, 2);
        assert_eq!(stored, crate::search::MATE_SCORE - 3);
        assert_eq!(score_from_tt(stored, 2), root_score);
        // A mesma posição alcançada mais fundo fica mais longe do mate.
        assert_eq!(score_from_tt(stored, 4), crate::search::MATE_SCORE - 7);
        assert_eq!(score_to_tt(150, 4), 150);
    }
}
