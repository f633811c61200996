use anchor_lang::prelude::*;

use crate::state::GiftRecord;

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct GetAccount<'info> {
    #[account(
        seeds = [GiftRecord::SEED, token_id.to_le_bytes().as_ref()],
        bump = gift.bump,
    )]
    pub gift: Account<'info, GiftRecord>,
}

pub fn handler(ctx: Context<GetAccount>, _token_id: u64) -> Result<Pubkey> {
    Ok(ctx.accounts.gift.account)
}
