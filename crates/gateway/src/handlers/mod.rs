//! API handlers module

pub mod corpus;
pub mod health;
pub mod prompts;
pub mod search;
pub mod tools;
