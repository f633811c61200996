use anchor_lang::prelude::*;

/// Emitted the first time a token-bound account record is created.
#[event]
pub struct AccountCreated {
    pub account: Pubkey,
    pub implementation: Pubkey,
    pub salt: [u8; 32],
    pub chain_id: u64,
    pub token_contract: Pubkey,
    pub token_id: u64,
}

/// Emitted when a gift NFT is minted and its bound account funded.
#[event]
pub struct GiftIssued {
    pub token_id: u64,
    pub account: Pubkey,
    pub recipient: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

/// Emitted when a distribution pool is funded.
#[event]
pub struct RedPacketCreated {
    pub id: u64,
    pub total_amount: u64,
    pub num_packets: u64,
}

/// Emitted when a claim asks the coordinator for randomness.
#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub claimer: Pubkey,
    pub pool_id: u64,
    pub key_hash: [u8; 32],
    pub confirmations: u64,
    pub callback_compute_limit: u32,
    pub num_words: u32,
}

/// Emitted when a fulfilled request pays out a share.
#[event]
pub struct RedPacketClaimed {
    pub id: u64,
    pub claimer: Pubkey,
    pub amount: u64,
    pub randomness: [u8; 32],
}

/// Emitted when a claimer abandons a request that timed out.
#[event]
pub struct RandomnessRequestCancelled {
    pub request_id: u64,
    pub claimer: Pubkey,
    pub pool_id: u64,
}

/// Emitted when a proposed admin accepts control of the protocol config.
#[event]
pub struct AdminChanged {
    pub previous: Pubkey,
    pub admin: Pubkey,
}
