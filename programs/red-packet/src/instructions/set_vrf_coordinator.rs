use anchor_lang::prelude::*;

use crate::errors::RedPacketError;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct SetVrfCoordinator<'info> {
    #[account(
        constraint = admin.key() == config.admin @ RedPacketError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,
}

/// Requests already in flight can only be fulfilled by the new coordinator.
pub fn handler(
    ctx: Context<SetVrfCoordinator>,
    vrf_coordinator: Pubkey,
    key_hash: [u8; 32],
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.vrf_coordinator = vrf_coordinator;
    config.key_hash = key_hash;
    msg!("vrf coordinator set to {}", vrf_coordinator);
    Ok(())
}
