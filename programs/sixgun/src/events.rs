use anchor_lang::prelude::*;

#[event]
pub struct SessionStarted {
    pub session: Pubkey,
    pub player_one: Pubkey,
    pub player_two: Pubkey,
    pub stake_each: u64,
    pub timestamp: i64,
}

// emitted at most once per session, when a lethal chamber fires
#[event]
pub struct FatalShot {
    pub session: Pubkey,
    pub shooter: Pubkey,
    pub target: Pubkey,
    pub winner: Pubkey,
}
