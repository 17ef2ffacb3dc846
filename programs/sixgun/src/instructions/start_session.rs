use crate::constants::*;
use crate::error::*;
use crate::events::SessionStarted;
use crate::rng;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use arrayref::array_ref;

#[derive(Accounts)]
pub struct StartSession<'info> {
    // addressed by the unordered player pair, so at most one live session
    // can exist for any two players
    #[account(
        init_if_needed,
        payer = player_one,
        space = Session::SPACE,
        seeds = [
            SESSION_SEED,
            std::cmp::min(player_one.key(), player_two.key()).as_ref(),
            std::cmp::max(player_one.key(), player_two.key()).as_ref(),
        ],
        bump
    )]
    pub session: Account<'info, Session>,

    // escrow vault; the session account itself is the only transfer authority
    #[account(
        init_if_needed,
        payer = player_one,
        seeds = [VAULT_SEED, session.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = session
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub player_one: Signer<'info>,
    pub player_two: Signer<'info>,

    #[account(
        mut,
        constraint = player_one_token.owner == player_one.key(),
        constraint = player_one_token.mint == mint.key()
    )]
    pub player_one_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = player_two_token.owner == player_two.key(),
        constraint = player_two_token.mint == mint.key()
    )]
    pub player_two_token: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    /// CHECK: address constraint pins this to the slot hashes sysvar
    #[account(address = sysvar::slot_hashes::id())]
    pub recent_slothashes: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn start_session(ctx: Context<StartSession>, stake_each: u64) -> Result<()> {
    require!(
        !ctx.accounts.session.is_started(),
        SixgunError::SessionAlreadyStarted
    );
    require_keys_neq!(
        ctx.accounts.player_one.key(),
        ctx.accounts.player_two.key(),
        SixgunError::SamePlayer
    );
    require!(stake_each > 0, SixgunError::InvalidStake);

    // sample entropy before any funds move so a bad source aborts cleanly;
    // layout of the sysvar data: u64 entry count, then (slot, hash) pairs
    // newest first
    let entropy = {
        let data = ctx.accounts.recent_slothashes.data.borrow();
        require!(data.len() >= 48, SixgunError::EntropyUnavailable);
        let entries = u64::from_le_bytes(*array_ref![data, 0, 8]);
        require!(entries > 0, SixgunError::EntropyUnavailable);
        *array_ref![data, 16, 32]
    };

    let clock = Clock::get()?;
    let player_one = ctx.accounts.player_one.key();
    let player_two = ctx.accounts.player_two.key();
    let seed = rng::mix_seed(&entropy, &player_one, &player_two, clock.slot);
    let load = rng::load_chambers(&seed, LETHAL_CHAMBERS)?;

    // escrow both stakes before the session goes live
    let cpi_accounts = Transfer {
        from: ctx.accounts.player_one_token.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.player_one.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, stake_each)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.player_two_token.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.player_two.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, stake_each)?;

    let session = &mut ctx.accounts.session;
    session.start(
        player_one,
        player_two,
        ctx.accounts.mint.key(),
        stake_each,
        load,
        ctx.bumps.session,
        ctx.bumps.vault,
    )?;

    emit!(SessionStarted {
        session: session.key(),
        player_one,
        player_two,
        stake_each,
        timestamp: clock.unix_timestamp,
    });
    msg!("session funded with {} per player", stake_each);

    Ok(())
}
