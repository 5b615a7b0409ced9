pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Expiring;
pub use codec::TokenCodec;
pub use errors::TokenError;
