mod advertiser;
mod influencer;
mod user;

pub use advertiser::AdvertiserProfile;
pub use influencer::{Channel, ChannelType};
pub use user::{NewUser, User, UserRole};
