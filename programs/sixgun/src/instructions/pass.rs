use crate::constants::*;
use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Pass<'info> {
    #[account(
        mut,
        seeds = [
            SESSION_SEED,
            std::cmp::min(session.player_one, session.player_two).as_ref(),
            std::cmp::max(session.player_one, session.player_two).as_ref(),
        ],
        bump = session.bump
    )]
    pub session: Account<'info, Session>,

    pub passer: Signer<'info>,
}

pub fn pass(ctx: Context<Pass>) -> Result<()> {
    let session = &mut ctx.accounts.session;
    require!(session.is_active(), SixgunError::SessionAlreadyOver);
    session.assert_turn(&ctx.accounts.passer.key())?;
    session.pass()
}
