use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelType {
    NaverBlog,
    Youtube,
    Instagram,
    Threads,
}

impl ChannelType {
    pub const ALL: [ChannelType; 4] = [
        ChannelType::NaverBlog,
        ChannelType::Youtube,
        ChannelType::Instagram,
        ChannelType::Threads,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::NaverBlog => "NAVER_BLOG",
            ChannelType::Youtube => "YOUTUBE",
            ChannelType::Instagram => "INSTAGRAM",
            ChannelType::Threads => "THREADS",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// A channel as owned by an influencer profile. Channels have no identity of
/// their own and are always replaced as a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Channel {
    pub channel_type: ChannelType,
    pub channel_name: String,
    pub channel_url: String,
    pub follower_count: i64,
}
