/// Error carrying a human readable message.
///
/// Used where a caller-supplied hook (announce request factories, configuration
/// loading) needs to fail without a richer error type of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub message: String,
}
