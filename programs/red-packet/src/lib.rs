use anchor_lang::prelude::*;

pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod registry;
pub mod state;

use instructions::*;
use state::{BoundToken, Operation};

declare_id!("C3PEy3L4KLAhjyhDjbzdKMcSpAHJjHYQPbgvLzmVS2y9");

#[program]
pub mod red_packet {
    use super::*;

    /// Initialize the global config and the gift collection. Called once by the deployer.
    pub fn initialize_protocol(
        ctx: Context<InitializeProtocol>,
        chain_id: u64,
        vrf_coordinator: Pubkey,
        key_hash: [u8; 32],
    ) -> Result<()> {
        instructions::initialize_protocol::handler(ctx, chain_id, vrf_coordinator, key_hash)
    }

    /// Propose a new admin (current admin only). Takes effect on `accept_admin`.
    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin::handler(ctx, new_admin)
    }

    /// Accept a pending admin transfer (pending admin only).
    pub fn accept_admin(ctx: Context<AcceptAdmin>) -> Result<()> {
        instructions::accept_admin::handler(ctx)
    }

    /// Replace the randomness coordinator and key hash (admin only).
    pub fn set_vrf_coordinator(
        ctx: Context<SetVrfCoordinator>,
        vrf_coordinator: Pubkey,
        key_hash: [u8; 32],
    ) -> Result<()> {
        instructions::set_vrf_coordinator::handler(ctx, vrf_coordinator, key_hash)
    }

    // -----------------------------------------------------------------------
    // Account registry
    // -----------------------------------------------------------------------

    /// Deploy the token-bound account for this identity, or return the existing one.
    pub fn create_account(
        ctx: Context<CreateAccount>,
        implementation: Pubkey,
        salt: [u8; 32],
        chain_id: u64,
        token_contract: Pubkey,
        token_id: u64,
    ) -> Result<Pubkey> {
        instructions::create_account::handler(
            ctx,
            implementation,
            salt,
            chain_id,
            token_contract,
            token_id,
        )
    }

    /// Address the identity's token-bound account has (or will have).
    pub fn account_address(
        ctx: Context<AccountAddress>,
        implementation: Pubkey,
        salt: [u8; 32],
        chain_id: u64,
        token_contract: Pubkey,
        token_id: u64,
    ) -> Result<Pubkey> {
        instructions::account_address::handler(
            ctx,
            implementation,
            salt,
            chain_id,
            token_contract,
            token_id,
        )
    }

    // -----------------------------------------------------------------------
    // Token-bound account
    // -----------------------------------------------------------------------

    /// Current holder of the bound NFT.
    pub fn account_owner(ctx: Context<BoundAccountHolder>) -> Result<Pubkey> {
        instructions::bound_account_view::owner_handler(ctx)
    }

    /// Signer-validation magic value for the holder, zeroes for anyone else.
    pub fn is_valid_signer(
        ctx: Context<BoundAccountHolder>,
        signer: Pubkey,
        context: Vec<u8>,
    ) -> Result<[u8; 4]> {
        instructions::bound_account_view::is_valid_signer_handler(ctx, signer, context)
    }

    /// The (chain id, token contract, token id) the account is bound to.
    pub fn account_token(ctx: Context<BoundAccountView>) -> Result<BoundToken> {
        instructions::bound_account_view::token_handler(ctx)
    }

    /// The account's execution nonce.
    pub fn account_state(ctx: Context<BoundAccountView>) -> Result<u64> {
        instructions::bound_account_view::state_handler(ctx)
    }

    /// Make a call as the token-bound account (NFT holder only).
    pub fn execute<'info>(
        ctx: Context<'_, '_, '_, 'info, Execute<'info>>,
        to: Pubkey,
        value: u64,
        data: Vec<u8>,
        operation: Operation,
    ) -> Result<Vec<u8>> {
        instructions::execute::handler(ctx, to, value, data, operation)
    }

    // -----------------------------------------------------------------------
    // Gifts
    // -----------------------------------------------------------------------

    /// Mint a gift NFT to `recipient` and fund its token-bound account with `amount`.
    pub fn issue_red_packet(ctx: Context<IssueRedPacket>, amount: u64) -> Result<Pubkey> {
        instructions::issue_red_packet::handler(ctx, amount)
    }

    /// Token-bound account address of gift `token_id`.
    pub fn get_account(ctx: Context<GetAccount>, token_id: u64) -> Result<Pubkey> {
        instructions::get_account::handler(ctx, token_id)
    }

    /// Sweep gift `token_id`'s funds to the NFT holder.
    pub fn redeem_red_packet<'info>(
        ctx: Context<'_, '_, '_, 'info, RedeemRedPacket<'info>>,
        token_id: u64,
    ) -> Result<Vec<u8>> {
        instructions::redeem_red_packet::handler(ctx, token_id)
    }

    // -----------------------------------------------------------------------
    // Random distribution pools
    // -----------------------------------------------------------------------

    /// Fund a new pool of `num_packets` randomly sized packets.
    pub fn create_red_packet(
        ctx: Context<CreateRedPacket>,
        num_packets: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::create_red_packet::handler(ctx, num_packets, amount)
    }

    /// Request randomness for a claim on pool `pool_id`. Returns the request id.
    pub fn claim_red_packet(ctx: Context<ClaimRedPacket>, pool_id: u64) -> Result<u64> {
        instructions::claim_red_packet::handler(ctx, pool_id)
    }

    /// Deliver random words for a request (coordinator only) and pay the claim.
    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::handler(ctx, request_id, random_words)
    }

    /// Cancel a request that was not fulfilled in time (claimer only).
    pub fn cancel_randomness_request(
        ctx: Context<CancelRandomnessRequest>,
        request_id: u64,
    ) -> Result<()> {
        instructions::cancel_randomness_request::handler(ctx, request_id)
    }
}
