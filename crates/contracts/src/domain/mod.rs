pub mod category;
pub mod dashboard;
pub mod inventory;
pub mod order;
pub mod product;
pub mod seller;
pub mod ticket;
pub mod wallet;
