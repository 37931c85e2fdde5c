pub mod client;
pub mod reqwest_client;

pub use client::{HttpClient, HttpResponse};
pub use reqwest_client::ReqwestHttpClient;
