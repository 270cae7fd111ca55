//! Authentication: JWT issuing/validation and request extraction

pub mod extractor;
pub mod jwt;

pub use extractor::MaybeUser;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
