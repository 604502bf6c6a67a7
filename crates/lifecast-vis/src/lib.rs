//! Lifecast Visualization
//!
//! The transport adapter around the lifecast core: an axum web server
//! exposing the board over HTTP and streaming updates over WebSocket,
//! plus a minimal static viewer page.
//!
//! # Routes
//!
//! - `GET /` — the viewer page
//! - `GET /api/grid` — full board snapshot
//! - `POST /api/cell` — toggle one cell, body `{"x": .., "y": ..}`
//! - `POST /api/reset` — reseed the board
//! - `GET /ws` — update stream: one `full`, then `changes`
//!
//! The adapter owns no simulation state; every operation goes through the
//! hub, and out-of-range coordinates surface as HTTP 400.

mod server;

pub use server::VisServer;
