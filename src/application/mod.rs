//! Application layer: request validation and merchant lookup in front of the
//! pure payload encoder.
//!
//! `PixService` mirrors what the server-authoritative endpoint does: callers
//! only name an organization and an amount, and the PIX key never leaves the
//! merchant store except inside the rendered payload.

pub mod service;
