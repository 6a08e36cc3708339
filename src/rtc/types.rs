use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use crate::rtc::enums::negotiation_error::NegotiationError;
use crate::rtc::structs::data_channel_context::DataChannelContext;
use crate::rtc::traits::data_channel_io::DataChannelIo;

/// An open, bidirectional peer data channel.
pub type DataChannelConn = Box<dyn DataChannelIo>;

/// Resolves once an answered channel opens.
pub type PendingChannel = Pin<Box<dyn Future<Output = Result<DataChannelConn, NegotiationError>> + Send>>;

/// Invoked with every newly connected data channel.
pub type OnConn = Arc<dyn Fn(DataChannelConn, DataChannelContext) + Send + Sync>;
