//! Request handlers

pub mod efiling;
pub mod health;
