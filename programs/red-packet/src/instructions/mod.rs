pub mod accept_admin;
pub mod account_address;
pub mod bound_account_view;
pub mod cancel_randomness_request;
pub mod claim_red_packet;
pub mod create_account;
pub mod create_red_packet;
pub mod execute;
pub mod fulfill_random_words;
pub mod get_account;
pub mod initialize_protocol;
pub mod issue_red_packet;
pub mod redeem_red_packet;
pub mod set_vrf_coordinator;
pub mod transfer_admin;
pub mod validate_holder;

#[allow(ambiguous_glob_reexports)]
pub use accept_admin::*;
pub use account_address::*;
pub use bound_account_view::*;
pub use cancel_randomness_request::*;
pub use claim_red_packet::*;
pub use create_account::*;
pub use create_red_packet::*;
pub use execute::*;
pub use fulfill_random_words::*;
pub use get_account::*;
pub use initialize_protocol::*;
pub use issue_red_packet::*;
pub use redeem_red_packet::*;
pub use set_vrf_coordinator::*;
pub use transfer_admin::*;
pub use validate_holder::*;
