use crate::config::GameConfig;

/// Deck indices for the next round.
///
/// Each slot advances by its offset modulo `loadout_size`. A slot landing on
/// an index already taken by an earlier slot in this rotation steps forward
/// by one (wrapping) until it is free, so the hand always holds distinct
/// abilities without any randomness.
///
/// `loadout_size` must exceed [`GameConfig::HAND_SIZE`] for a free index to
/// exist; callers pass [`GameConfig::LOADOUT_SIZE`].
pub fn rotate_deck(
    indices: [u8; GameConfig::HAND_SIZE],
    offsets: [u8; GameConfig::HAND_SIZE],
    loadout_size: u8,
) -> [u8; GameConfig::HAND_SIZE] {
    debug_assert!(usize::from(loadout_size) > GameConfig::HAND_SIZE);

    let size = u16::from(loadout_size);
    let mut next = [0u8; GameConfig::HAND_SIZE];

    for slot in 0..GameConfig::HAND_SIZE {
        let mut candidate = ((u16::from(indices[slot]) + u16::from(offsets[slot])) % size) as u8;
        while next[..slot].contains(&candidate) {
            candidate = ((u16::from(candidate) + 1) % size) as u8;
        }
        next[slot] = candidate;
    }

    next
}
