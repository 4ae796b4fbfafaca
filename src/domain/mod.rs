//! Domain Layer
//!
//! Pure deploy rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - App document, document states, attempt state machine
//! - `value_objects/` - App names, attempt tokens, image refs, phases
//! - `services/` - Staging path resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
