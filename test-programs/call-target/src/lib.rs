use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult, program::set_return_data,
    program_error::ProgramError, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// Instruction tag: succeed and echo the payload back as return data.
pub const ECHO: u8 = 0x00;
/// Instruction tag: like `ECHO`, but the first account must have signed.
pub const REQUIRE_SIGNER: u8 = 0x01;
/// Instruction tag: always fail.
pub const FAIL: u8 = 0xFF;

/// Mock call target that echoes, checks a signer, or fails on demand.
/// Used only in integration tests for the red-packet program.
fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    match instruction_data.first() {
        None => Ok(()),
        Some(&FAIL) => Err(ProgramError::Custom(1)),
        Some(&REQUIRE_SIGNER) => {
            let caller = accounts.first().ok_or(ProgramError::NotEnoughAccountKeys)?;
            if !caller.is_signer {
                return Err(ProgramError::MissingRequiredSignature);
            }
            set_return_data(instruction_data);
            Ok(())
        }
        Some(_) => {
            set_return_data(instruction_data);
            Ok(())
        }
    }
}
