pub mod admin;
pub mod election;
pub mod registry;
pub mod vote;
pub mod views;
pub mod voters;
