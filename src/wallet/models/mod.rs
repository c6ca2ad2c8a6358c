pub mod create_transaction_response;
pub mod transaction;
pub mod wallet_balance;
