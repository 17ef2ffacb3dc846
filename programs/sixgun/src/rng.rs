use crate::constants::*;
use crate::error::SixgunError;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

// the shuffle consumes one seed byte per chamber
const _: () = assert!(CHAMBER_COUNT <= 32);

/// Mix the most recent slot hash with both player identities and the current
/// slot. Neither player can choose the slot hash, and the result is fully
/// reproducible from on-chain data.
pub fn mix_seed(slot_hash: &[u8; 32], player_one: &Pubkey, player_two: &Pubkey, slot: u64) -> [u8; 32] {
    hashv(&[
        slot_hash,
        player_one.as_ref(),
        player_two.as_ref(),
        &slot.to_le_bytes(),
    ])
    .to_bytes()
}

/// Derive the chamber load: shuffle the chamber indices with the seed and
/// mark the first `lethal` of them.
pub fn load_chambers(seed: &[u8; 32], lethal: usize) -> Result<[bool; CHAMBER_COUNT]> {
    require!(
        lethal >= 1 && lethal <= CHAMBER_COUNT,
        SixgunError::InternalGameError
    );

    let mut order = [0usize; CHAMBER_COUNT];
    for (i, chamber) in order.iter_mut().enumerate() {
        *chamber = i;
    }
    for i in (1..CHAMBER_COUNT).rev() {
        let j = seed[i] as usize % (i + 1);
        order.swap(i, j);
    }

    let mut load = [false; CHAMBER_COUNT];
    for &chamber in &order[..lethal] {
        load[chamber] = true;
    }
    Ok(load)
}
