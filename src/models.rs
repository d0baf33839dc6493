pub mod auth;
pub mod catalog;
pub mod customer;
pub mod purchase;
pub mod report;
