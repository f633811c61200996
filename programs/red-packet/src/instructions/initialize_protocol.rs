use anchor_lang::prelude::*;

use crate::state::{GiftCollection, ProtocolConfig};

#[derive(Accounts)]
pub struct InitializeProtocol<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ProtocolConfig::SIZE,
        seeds = [ProtocolConfig::SEED],
        bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    /// The gift NFT collection. Mint authority of every gift NFT.
    #[account(
        init,
        payer = admin,
        space = GiftCollection::SIZE,
        seeds = [GiftCollection::SEED],
        bump,
    )]
    pub collection: Account<'info, GiftCollection>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeProtocol>,
    chain_id: u64,
    vrf_coordinator: Pubkey,
    key_hash: [u8; 32],
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.pending_admin = Pubkey::default();
    config.vrf_coordinator = vrf_coordinator;
    config.key_hash = key_hash;
    config.chain_id = chain_id;
    config.pool_count = 0;
    config.request_count = 0;
    config.bump = ctx.bumps.config;

    let collection = &mut ctx.accounts.collection;
    collection.next_token_id = 0;
    collection.bump = ctx.bumps.collection;

    msg!(
        "protocol initialized: chain_id={} coordinator={}",
        chain_id,
        vrf_coordinator
    );
    Ok(())
}
