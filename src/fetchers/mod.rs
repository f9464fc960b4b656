mod request;

pub use request::RequestFetcher;
