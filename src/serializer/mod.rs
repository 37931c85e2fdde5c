pub mod deserializer;
pub mod json;

pub use deserializer::ProfileDeserializer;
pub use json::JsonProfileDeserializer;
