//! Bearer-token identification for rating submissions.
//!
//! Tokens are issued by the hosted identity provider and are treated as
//! opaque here: the server never stores them, only a SHA-256 digest that
//! serves as the rater id.

mod crypto;
mod extractor;

pub use crypto::hash_token;
pub use extractor::{AuthError, AuthRater};
