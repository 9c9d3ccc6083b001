use super::AioClient;
use crate::domain::model::Data;
use crate::utils::error::{Result, ViewerError};

/// Data operations scoped to the client's selected feed.
pub struct DataService<'a> {
    client: &'a AioClient,
}

impl<'a> DataService<'a> {
    pub(crate) fn new(client: &'a AioClient) -> Self {
        Self { client }
    }

    fn feed_key(&self) -> Result<&'a str> {
        self.client
            .feed()
            .and_then(|feed| feed.key.as_deref())
            .ok_or(ViewerError::MissingFeedError)
    }

    pub async fn send(&self, data: &Data) -> Result<Data> {
        let url = self.client.endpoint(&["feeds", self.feed_key()?, "data"])?;
        self.client.post_json(url, data).await
    }

    pub async fn all(&self) -> Result<Vec<Data>> {
        let url = self.client.endpoint(&["feeds", self.feed_key()?, "data"])?;
        self.client.get_json(url).await
    }

    pub async fn get(&self, id: &str) -> Result<Data> {
        let url = self
            .client
            .endpoint(&["feeds", self.feed_key()?, "data", id])?;
        self.client.get_json(url).await
    }

    pub async fn last(&self) -> Result<Data> {
        let url = self
            .client
            .endpoint(&["feeds", self.feed_key()?, "data", "last"])?;
        self.client.get_json(url).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self
            .client
            .endpoint(&["feeds", self.feed_key()?, "data", id])?;
        self.client.delete(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Feed;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer, username: &str) -> AioClient {
        let mut client = AioClient::new(username, "12345ABC");
        client.set_base_url(&server.base_url()).unwrap();
        client.set_feed(Feed::with_key("beta-test"));
        client
    }

    #[tokio::test]
    async fn test_send_posts_value_with_key_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v2/feeds/beta-test/data")
                    .header("x-aio-key", "12345ABC")
                    .header("content-type", "application/json")
                    .header("accept", "application/json")
                    .json_body(serde_json::json!({"value": "22"}));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"id": "0EXZ", "value": "22", "feed_key": "beta-test"}));
            })
            .await;

        let client = client_for(&server, "");
        let created = client.data().send(&Data::with_value("22")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created.id.as_deref(), Some("0EXZ"));
        assert_eq!(created.value.as_deref(), Some("22"));
    }

    #[tokio::test]
    async fn test_last_uses_username_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/jane/feeds/beta-test/data/last");
                then.status(200).json_body(serde_json::json!({"value": "7"}));
            })
            .await;

        let client = client_for(&server, "jane");
        let last = client.data().last().await.unwrap();

        mock.assert_async().await;
        assert_eq!(last.value.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/v2/feeds/beta-test/data/42");
                then.status(401).body("unauthorized");
            })
            .await;

        let client = client_for(&server, "");
        let err = client.data().delete("42").await.unwrap_err();

        match err {
            ViewerError::ApiStatusError { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_feed_fails_before_sending() {
        let client = AioClient::new("", "12345ABC");
        let err = client.data().all().await.unwrap_err();
        assert!(matches!(err, ViewerError::MissingFeedError));
    }
}
