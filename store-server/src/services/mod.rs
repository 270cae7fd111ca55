pub mod email;
pub mod media;

pub use email::{EmailService, EmailTransport, LoggingTransport, OutgoingEmail};
pub use media::{MediaStore, StoredImage};
