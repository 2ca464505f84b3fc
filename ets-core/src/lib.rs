//! ets-core: Shared configuration and observability plumbing for the ETS client.
pub mod config;
pub mod observability;
