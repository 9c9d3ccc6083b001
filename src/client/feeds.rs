use super::AioClient;
use crate::domain::model::Feed;
use crate::utils::error::Result;

pub struct FeedService<'a> {
    client: &'a AioClient,
}

impl<'a> FeedService<'a> {
    pub(crate) fn new(client: &'a AioClient) -> Self {
        Self { client }
    }

    pub async fn all(&self) -> Result<Vec<Feed>> {
        let url = self.client.endpoint(&["feeds"])?;
        self.client.get_json(url).await
    }

    pub async fn get(&self, key: &str) -> Result<Feed> {
        let url = self.client.endpoint(&["feeds", key])?;
        self.client.get_json(url).await
    }

    pub async fn create(&self, feed: &Feed) -> Result<Feed> {
        let url = self.client.endpoint(&["feeds"])?;
        self.client.post_json(url, feed).await
    }

    pub async fn delete(&self, key: &str) -> Result<()> {
        let url = self.client.endpoint(&["feeds", key])?;
        self.client.delete(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_create_posts_feed_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v2/jane/feeds")
                    .json_body(serde_json::json!({"name": "Beta Test", "key": "beta-test"}));
                then.status(201)
                    .json_body(serde_json::json!({"id": 1, "name": "Beta Test", "key": "beta-test"}));
            })
            .await;

        let mut client = AioClient::new("jane", "12345ABC");
        client.set_base_url(&server.base_url()).unwrap();

        let feed = Feed {
            name: Some("Beta Test".to_string()),
            ..Feed::with_key("beta-test")
        };
        let created = client.feeds().create(&feed).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn test_all_decodes_feed_list() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/feeds")
                    .header("x-aio-key", "12345ABC");
                then.status(200)
                    .json_body(serde_json::json!([{"key": "one"}, {"key": "two"}]));
            })
            .await;

        let mut client = AioClient::new("", "12345ABC");
        client.set_base_url(&server.base_url()).unwrap();

        let feeds = client.feeds().all().await.unwrap();
        let keys: Vec<_> = feeds.iter().filter_map(|f| f.key.as_deref()).collect();
        assert_eq!(keys, vec!["one", "two"]);
    }
}
