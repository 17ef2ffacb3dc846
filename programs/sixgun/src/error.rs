use anchor_lang::prelude::*;

#[error_code]
pub enum SixgunError {
    #[msg("a session already exists for this player pair")]
    SessionAlreadyStarted,
    #[msg("session is over")]
    SessionAlreadyOver,
    #[msg("not this player's turn")]
    NotPlayersTurn,
    #[msg("target is not part of this session")]
    InvalidTarget,
    #[msg("stake must be greater than zero")]
    InvalidStake,
    #[msg("players must be distinct")]
    SamePlayer,
    #[msg("slot hashes sysvar is empty or malformed")]
    EntropyUnavailable,
    #[msg("internal game invariant violated")]
    InternalGameError,
}
