//! 网络请求

mod http_client;

pub use http_client::{
    GetRequest, HttpClient, HttpClientConfig, PostEncoding, ResponseBody, ResponseType,
};
