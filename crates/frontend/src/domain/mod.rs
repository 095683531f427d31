pub mod categories;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod settings;
pub mod tickets;
pub mod wallet;
pub mod withdrawals;
