use crate::error::ImportError;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Duration;

/// Blocking HTTP client for recipe pages and their images.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; MealkitImportBot/1.0)")
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a recipe page; anything but 200 is an error.
    pub fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ImportError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }

    /// Download an image, optionally asking for its content type first.
    pub fn fetch_image(
        &self,
        url: &str,
        verify_content_type: bool,
    ) -> Result<Vec<u8>, ImportError> {
        if url.is_empty() {
            return Err(ImportError::ImageFetchError("no image URL".to_string()));
        }

        if verify_content_type {
            debug!("HEAD {}", url);
            let head = self.client.head(url).send().map_err(image_error)?;
            let content_type = head
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            if !content_type.contains("image") {
                return Err(ImportError::ImageFetchError(format!(
                    "{url} is not an image (content-type '{content_type}')"
                )));
            }
        }

        debug!("GET {}", url);
        let response = self.client.get(url).send().map_err(image_error)?;
        if !response.status().is_success() {
            return Err(ImportError::ImageFetchError(format!(
                "{url} returned status {}",
                response.status().as_u16()
            )));
        }
        let bytes = response.bytes().map_err(image_error)?;
        Ok(bytes.to_vec())
    }
}

fn image_error(err: reqwest::Error) -> ImportError {
    ImportError::ImageFetchError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> RequestFetcher {
        RequestFetcher::new(Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_fetch_page() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/recipe")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><h1>Tacos</h1></html>")
            .create();

        let body = fetcher().fetch(&format!("{}/recipe", server.url())).unwrap();
        assert!(body.contains("Tacos"));
    }

    #[test]
    fn test_fetch_page_non_200() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/gone").with_status(404).create();

        let err = fetcher()
            .fetch(&format!("{}/gone", server.url()))
            .unwrap_err();
        assert!(matches!(err, ImportError::HttpStatus { status: 404, .. }));
    }

    #[test]
    fn test_fetch_image_rejects_non_image() {
        let mut server = mockito::Server::new();
        let _head = server
            .mock("HEAD", "/photo.jpg")
            .with_status(200)
            .with_header("content-type", "text/html")
            .create();

        let err = fetcher()
            .fetch_image(&format!("{}/photo.jpg", server.url()), true)
            .unwrap_err();
        assert!(matches!(err, ImportError::ImageFetchError(_)));
    }

    #[test]
    fn test_fetch_image_after_head_check() {
        let mut server = mockito::Server::new();
        let _head = server
            .mock("HEAD", "/photo.jpg")
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .create();
        let _get = server
            .mock("GET", "/photo.jpg")
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body([0xFF, 0xD8, 0xFF])
            .create();

        let bytes = fetcher()
            .fetch_image(&format!("{}/photo.jpg", server.url()), true)
            .unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
    }
}
