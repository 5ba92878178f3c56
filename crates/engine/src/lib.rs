//! Session layer over the core rules
//!
//! [`Session`] owns one board and the falling piece, and exposes the moves
//! a game loop needs: spawn, shift, rotate, soft/hard drop, lock. It does not
//! keep time; gravity, lock delay and input are the caller's business.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Catalog;
//! use blockfall_engine::{Session, SessionConfig};
//!
//! let catalog = Catalog::tetrominoes();
//! let mut session = Session::new(&catalog, SessionConfig::default(), 1).unwrap();
//!
//! assert!(session.spawn_next());
//! session.move_left();
//! session.try_rotate(true);
//! session.hard_drop();
//!
//! assert!(session.active().is_none());
//! assert_eq!(session.board().occupied_count(), 4);
//! ```

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::Session;
