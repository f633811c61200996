use anchor_lang::prelude::*;

use crate::errors::RedPacketError;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    /// Current protocol admin.
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
        has_one = admin @ RedPacketError::Unauthorized,
    )]
    pub config: Account<'info, ProtocolConfig>,
}

/// Proposes `new_admin` as the next admin of the coordinator settings. The
/// default key withdraws an outstanding proposal.
pub fn handler(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.pending_admin = new_admin;
    if new_admin == Pubkey::default() {
        msg!("pending admin cleared");
    } else {
        msg!("admin {} proposed {}", config.admin, new_admin);
    }
    Ok(())
}
