//! Built-in API calls the viewer can be pointed at.
//!
//! Each one configures the client as needed and issues a single request. The
//! decoded result is only logged; the request dump is what matters.

use crate::client::AioClient;
use crate::core::{ApiCall, Data, Feed, Result};
use async_trait::async_trait;

pub const DEFAULT_FEED: &str = "beta-test";
pub const DEFAULT_VALUE: &str = "22";

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallKind {
    #[default]
    SendData,
    ListData,
    LastData,
    ListFeeds,
    GetFeed,
    CreateFeed,
    DeleteFeed,
}

impl CallKind {
    pub fn build(self, feed: &str, value: &str) -> Box<dyn ApiCall> {
        let feed = feed.to_string();
        match self {
            CallKind::SendData => Box::new(SendData {
                feed,
                value: value.to_string(),
            }),
            CallKind::ListData => Box::new(ListData { feed }),
            CallKind::LastData => Box::new(LastData { feed }),
            CallKind::ListFeeds => Box::new(ListFeeds),
            CallKind::GetFeed => Box::new(GetFeed { feed }),
            CallKind::CreateFeed => Box::new(CreateFeed { feed }),
            CallKind::DeleteFeed => Box::new(DeleteFeed { feed }),
        }
    }
}

/// Selects `feed` and sends one data point with `value`.
#[derive(Debug, Clone)]
pub struct SendData {
    pub feed: String,
    pub value: String,
}

impl Default for SendData {
    fn default() -> Self {
        Self {
            feed: DEFAULT_FEED.to_string(),
            value: DEFAULT_VALUE.to_string(),
        }
    }
}

#[async_trait]
impl ApiCall for SendData {
    fn name(&self) -> &str {
        "send-data"
    }

    async fn invoke(&self, client: &mut AioClient) -> Result<()> {
        client.set_feed(Feed::with_key(self.feed.as_str()));
        let data = client.data().send(&Data::with_value(self.value.as_str())).await?;
        tracing::debug!("send-data returned {:?}", data);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ListData {
    pub feed: String,
}

#[async_trait]
impl ApiCall for ListData {
    fn name(&self) -> &str {
        "list-data"
    }

    async fn invoke(&self, client: &mut AioClient) -> Result<()> {
        client.set_feed(Feed::with_key(self.feed.as_str()));
        let data = client.data().all().await?;
        tracing::debug!("list-data returned {} points", data.len());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LastData {
    pub feed: String,
}

#[async_trait]
impl ApiCall for LastData {
    fn name(&self) -> &str {
        "last-data"
    }

    async fn invoke(&self, client: &mut AioClient) -> Result<()> {
        client.set_feed(Feed::with_key(self.feed.as_str()));
        let data = client.data().last().await?;
        tracing::debug!("last-data returned {:?}", data);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListFeeds;

#[async_trait]
impl ApiCall for ListFeeds {
    fn name(&self) -> &str {
        "list-feeds"
    }

    async fn invoke(&self, client: &mut AioClient) -> Result<()> {
        let feeds = client.feeds().all().await?;
        tracing::debug!("list-feeds returned {} feeds", feeds.len());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct GetFeed {
    pub feed: String,
}

#[async_trait]
impl ApiCall for GetFeed {
    fn name(&self) -> &str {
        "get-feed"
    }

    async fn invoke(&self, client: &mut AioClient) -> Result<()> {
        let feed = client.feeds().get(&self.feed).await?;
        tracing::debug!("get-feed returned {:?}", feed);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeed {
    pub feed: String,
}

#[async_trait]
impl ApiCall for CreateFeed {
    fn name(&self) -> &str {
        "create-feed"
    }

    async fn invoke(&self, client: &mut AioClient) -> Result<()> {
        let feed = Feed {
            name: Some(self.feed.clone()),
            ..Feed::with_key(self.feed.as_str())
        };
        let created = client.feeds().create(&feed).await?;
        tracing::debug!("create-feed returned {:?}", created);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DeleteFeed {
    pub feed: String,
}

#[async_trait]
impl ApiCall for DeleteFeed {
    fn name(&self) -> &str {
        "delete-feed"
    }

    async fn invoke(&self, client: &mut AioClient) -> Result<()> {
        client.feeds().delete(&self.feed).await
    }
}
