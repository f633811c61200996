use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::constants::{NFT_DECIMALS, NFT_MINT_SEED};
use crate::errors::RedPacketError;
use crate::events::GiftIssued;
use crate::registry::{salt_for_token_id, AccountIdentity};
use crate::state::{GiftCollection, GiftRecord, ProtocolConfig};

#[derive(Accounts)]
pub struct IssueRedPacket<'info> {
    #[account(mut)]
    pub issuer: Signer<'info>,

    /// The wallet receiving the gift NFT.
    /// CHECK: Any wallet can receive a gift.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        seeds = [GiftCollection::SEED],
        bump = collection.bump,
    )]
    pub collection: Box<Account<'info, GiftCollection>>,

    /// Gift NFT mint for the next token id.
    #[account(
        init,
        payer = issuer,
        mint::decimals = NFT_DECIMALS,
        mint::authority = collection,
        seeds = [
            NFT_MINT_SEED,
            collection.key().as_ref(),
            collection.next_token_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub nft_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = issuer,
        associated_token::mint = nft_mint,
        associated_token::authority = recipient,
    )]
    pub recipient_nft_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = issuer,
        space = GiftRecord::SIZE,
        seeds = [GiftRecord::SEED, collection.next_token_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub gift: Box<Account<'info, GiftRecord>>,

    /// The token-bound account for the new NFT. Not deployed here, only funded.
    /// CHECK: Address checked against the derived identity in the handler.
    pub bound_account: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = issuer,
        associated_token::mint = mint,
        associated_token::authority = bound_account,
    )]
    pub bound_token_account: Box<Account<'info, TokenAccount>>,

    /// Mint of the gifted funds.
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = issuer,
    )]
    pub issuer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Mints gift NFT `next_token_id` to the recipient and moves `amount` of
/// `mint` from the issuer into the NFT's token-bound account.
pub fn handler(ctx: Context<IssueRedPacket>, amount: u64) -> Result<Pubkey> {
    require!(amount > 0, RedPacketError::InvalidAmount);

    let collection_key = ctx.accounts.collection.key();
    let token_id = ctx.accounts.collection.advance()?;
    let identity = AccountIdentity {
        implementation: crate::ID,
        salt: salt_for_token_id(token_id),
        chain_id: ctx.accounts.config.chain_id,
        token_contract: collection_key,
        token_id,
    };
    let (account, _) = identity.address();
    require_keys_eq!(
        ctx.accounts.bound_account.key(),
        account,
        RedPacketError::InvalidBoundAccount
    );

    let bump = ctx.accounts.collection.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[GiftCollection::SEED, &[bump]]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.nft_mint.to_account_info(),
                to: ctx.accounts.recipient_nft_account.to_account_info(),
                authority: ctx.accounts.collection.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.issuer_token_account.to_account_info(),
                to: ctx.accounts.bound_token_account.to_account_info(),
                authority: ctx.accounts.issuer.to_account_info(),
            },
        ),
        amount,
    )?;

    let gift = &mut ctx.accounts.gift;
    gift.token_id = token_id;
    gift.nft_mint = ctx.accounts.nft_mint.key();
    gift.account = account;
    gift.implementation = identity.implementation;
    gift.salt = identity.salt;
    gift.chain_id = identity.chain_id;
    gift.token_contract = identity.token_contract;
    gift.mint = ctx.accounts.mint.key();
    gift.amount = amount;
    gift.issuer = ctx.accounts.issuer.key();
    gift.recipient = ctx.accounts.recipient.key();
    gift.bump = ctx.bumps.gift;

    emit!(GiftIssued {
        token_id,
        account,
        recipient: gift.recipient,
        mint: gift.mint,
        amount,
    });
    Ok(account)
}
