pub mod codec;
pub mod inspect;
