use std::sync::Arc;
use crate::common::structs::custom_error::CustomError;
use crate::metainfo::structs::content_id::ContentId;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;

/// Builds the announce request for a content id at the moment it is sent.
pub type AnnounceRequestFactory = Arc<dyn Fn(AnnounceEvent, ContentId) -> Result<AnnounceRequest, CustomError> + Send + Sync>;
