//! The four cleaning stages that run after loading, in pipeline order.

pub mod header;
pub mod extract;
pub mod filter;
pub mod spillover;
