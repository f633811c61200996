use anchor_lang::prelude::*;

#[error_code]
pub enum RedPacketError {
    // Validation errors
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Packet count must be between one and the pool amount")]
    InvalidPacketCount,
    #[msg("Token mint must not be the default address")]
    InvalidMint,
    #[msg("Target account does not match `to`")]
    TargetMismatch,
    #[msg("Account is not the derived token-bound account")]
    InvalidBoundAccount,

    // Permission errors
    #[msg("Signer is not the owner of the bound token")]
    Unauthorized,
    #[msg("Token account does not hold the bound token")]
    NotTokenHolder,
    #[msg("Token account is for a different mint")]
    InvalidTokenAccount,
    #[msg("Only the configured VRF coordinator may fulfill randomness")]
    UnauthorizedFulfiller,

    // Account execution errors
    #[msg("No implementation is installed for this account")]
    ImplementationMissing,
    #[msg("Only the call operation is supported")]
    UnsupportedOperation,
    #[msg("Native value cannot be attached to a program call")]
    NativeValueToProgram,
    #[msg("Call target with data must be an executable program")]
    TargetNotExecutable,
    #[msg("Insufficient funds for this operation")]
    InsufficientFunds,

    // Distribution errors
    #[msg("This address has already claimed from this red packet")]
    AlreadyClaimed,
    #[msg("The red packet has no packets left")]
    PoolExhausted,
    #[msg("A randomness request is already pending for this claimer")]
    RequestPending,
    #[msg("Randomness request has already been fulfilled")]
    RequestAlreadyFulfilled,
    #[msg("No random words were delivered")]
    MissingRandomWords,
    #[msg("Randomness request has not reached the required confirmations")]
    ConfirmationsPending,
    #[msg("Randomness request has not timed out yet")]
    RequestNotExpired,
    #[msg("Randomness request does not belong to this pool or claimer")]
    RequestMismatch,

    // Arithmetic
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
