//! SQL for the ledger, one module per concern. Every function takes a plain
//! `&Connection` so it runs the same inside or outside a transaction.

pub mod admin;
pub mod sweep;
pub mod user_data;
pub mod vote_ops;
pub mod word_crud;
