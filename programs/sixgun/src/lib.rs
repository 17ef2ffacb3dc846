pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod rng;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("3tknHVpJDQXGucAcSTAf4JwpcJ4mXqdU7HvTjd6DTAv6");

#[program]
pub mod sixgun {
    use super::*;

    pub fn start_session(ctx: Context<StartSession>, stake_each: u64) -> Result<()> {
        instructions::start_session::start_session(ctx, stake_each)
    }

    pub fn shoot(ctx: Context<Shoot>, target: Pubkey) -> Result<()> {
        instructions::shoot::shoot(ctx, target)
    }

    pub fn pass(ctx: Context<Pass>) -> Result<()> {
        instructions::pass::pass(ctx)
    }
}
