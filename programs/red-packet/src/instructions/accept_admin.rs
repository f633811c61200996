use anchor_lang::prelude::*;

use crate::errors::RedPacketError;
use crate::events::AdminChanged;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct AcceptAdmin<'info> {
    /// The proposed admin from the last `transfer_admin`.
    pub new_admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,
}

pub fn handler(ctx: Context<AcceptAdmin>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let new_admin = ctx.accounts.new_admin.key();
    require_keys_neq!(
        config.pending_admin,
        Pubkey::default(),
        RedPacketError::Unauthorized
    );
    require_keys_eq!(config.pending_admin, new_admin, RedPacketError::Unauthorized);

    let previous = config.admin;
    config.admin = new_admin;
    config.pending_admin = Pubkey::default();

    emit!(AdminChanged {
        previous,
        admin: new_admin,
    });
    Ok(())
}
