//! Server-rendered markup.
//!
//! Pure `Markup` builders only — no session checks, no provider calls. Route
//! handlers decide what to render; these functions decide how it looks.

pub mod landing;
pub mod layout;
pub mod shell;
