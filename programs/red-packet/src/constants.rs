use anchor_lang::prelude::*;

/// `bytes4(keccak256("isValidSigner(address,bytes)"))`, returned by
/// `is_valid_signer` when the signer currently holds the bound token.
#[constant]
pub const IS_VALID_SIGNER_MAGIC: [u8; 4] = [0x52, 0x3e, 0x32, 0x60];

/// Returned by `is_valid_signer` for anyone else.
#[constant]
pub const INVALID_SIGNER: [u8; 4] = [0; 4];

// Randomness request configuration, reported with every request.

/// Slots that must pass between a claim and its fulfillment.
#[constant]
pub const REQUEST_CONFIRMATIONS: u64 = 3;

/// Compute units the coordinator should budget for the fulfillment transaction.
#[constant]
pub const CALLBACK_COMPUTE_LIMIT: u32 = 200_000;

/// Random words requested per claim.
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Age (in slots) after which an unfulfilled request may be cancelled by its claimer.
/// Roughly ten minutes at 400ms slots.
#[constant]
pub const REQUEST_TIMEOUT_SLOTS: u64 = 1_500;

// Gift NFT metadata.

/// Decimals of every gift NFT mint.
pub const NFT_DECIMALS: u8 = 0;

/// Seed of the per-token-id gift NFT mint. Seeds = [NFT_MINT_SEED, collection, token_id_le].
#[constant]
pub const NFT_MINT_SEED: &[u8] = b"nft_mint";

/// Seed of a pool's token vault. Seeds = [POOL_VAULT_SEED, pool].
#[constant]
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";
