//! External auth provider integration.
//!
//! ARCHITECTURE
//! ============
//! Route handlers depend only on the [`AuthProvider`] trait; the concrete
//! backend (`SupabaseAuth`) is constructed once at startup from the loaded
//! config and injected through `AppState`. Swapping providers means adding an
//! implementation here, not touching the UI.

pub mod supabase;
pub mod types;

pub use supabase::SupabaseAuth;
pub use types::{AuthError, AuthProvider, Session, SignUpOutcome};
