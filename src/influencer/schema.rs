use crate::database::{Channel, ChannelType};
use crate::validation::{self, FieldErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
pub struct ChannelPayload {
    #[serde(default)]
    pub channel_type: Option<String>,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub channel_url: String,
    #[serde(default)]
    pub follower_count: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InfluencerProfilePayload {
    #[serde(default)]
    pub channels: Option<Vec<ChannelPayload>>,
}

impl InfluencerProfilePayload {
    /// Validates every channel; the list itself may be empty.
    pub fn validate(self) -> Result<Vec<Channel>, FieldErrors> {
        let mut errors = FieldErrors::new();
        let Some(payloads) = self.channels else {
            errors.add("channels", "채널 정보를 추가해주세요");
            return Err(errors);
        };

        let mut channels = Vec::with_capacity(payloads.len());
        for (index, payload) in payloads.into_iter().enumerate() {
            let field = |name: &str| format!("channels[{}].{}", index, name);

            let channel_type = payload.channel_type.as_deref().and_then(ChannelType::parse);
            if channel_type.is_none() {
                errors.add(field("channel_type"), "지원하지 않는 채널 유형입니다");
            }
            if payload.channel_name.is_empty() {
                errors.add(field("channel_name"), "채널 이름을 입력해주세요");
            }
            if !validation::is_valid_url(&payload.channel_url) {
                errors.add(field("channel_url"), "올바른 URL 형식을 입력해주세요");
            }
            let follower_count = payload.follower_count.filter(|count| *count >= 0);
            if follower_count.is_none() {
                errors.add(field("follower_count"), "팔로워 수는 0 이상이어야 합니다");
            }

            if let (Some(channel_type), Some(follower_count)) = (channel_type, follower_count) {
                channels.push(Channel {
                    channel_type,
                    channel_name: payload.channel_name,
                    channel_url: payload.channel_url,
                    follower_count,
                });
            }
        }

        errors.finish(channels)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfileSaved {
    pub influencer_id: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfileResponse {
    pub message: String,
    pub influencer_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfileStatus {
    pub is_influencer: bool,
    pub has_profile: bool,
    pub needs_onboarding: bool,
}
