use crate::constants::*;
use crate::error::*;
use crate::events::FatalShot;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Shoot<'info> {
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

    #[account(
        mut,
        seeds = [VAULT_SEED, session.key().as_ref()],
        bump = session.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub shooter: Signer<'info>,

    #[account(
        mut,
        constraint = player_one_token.owner == session.player_one,
        constraint = player_one_token.mint == session.mint
    )]
    pub player_one_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = player_two_token.owner == session.player_two,
        constraint = player_two_token.mint == session.mint
    )]
    pub player_two_token: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn shoot(ctx: Context<Shoot>, target: Pubkey) -> Result<()> {
    let session = &mut ctx.accounts.session;
    require!(session.is_active(), SixgunError::SessionAlreadyOver);
    session.assert_turn(&ctx.accounts.shooter.key())?;

    match session.shoot(target)? {
        ShotOutcome::Survived => {}
        ShotOutcome::Fatal {
            shooter,
            target,
            winner,
        } => {
            // pay the full pot to the winner in the same instruction that
            // freezes the session
            let session_key = session.key();
            let player_one = session.player_one;
            let player_two = session.player_two;
            let lo = std::cmp::min(player_one, player_two);
            let hi = std::cmp::max(player_one, player_two);
            let bump = [session.bump];
            let seeds: &[&[u8]] = &[SESSION_SEED, lo.as_ref(), hi.as_ref(), &bump];
            let signer = &[seeds];

            let winner_token = if winner == player_one {
                ctx.accounts.player_one_token.to_account_info()
            } else {
                ctx.accounts.player_two_token.to_account_info()
            };

            let pot = ctx.accounts.vault.amount;
            let cpi_accounts = Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: winner_token,
                authority: session.to_account_info(),
            };
            let cpi_ctx = CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                cpi_accounts,
                signer,
            );
            token::transfer(cpi_ctx, pot)?;

            emit!(FatalShot {
                session: session_key,
                shooter,
                target,
                winner,
            });
            msg!("payout of {} settled to winner", pot);
        }
    }

    Ok(())
}
