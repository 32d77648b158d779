pub(crate) mod message_bubble;
pub(crate) mod message_composer;
pub(crate) mod transcript;
pub(crate) mod typing_indicator;

// Re-export components for convenience
pub use message_bubble::MessageBubble;
pub use message_composer::MessageComposer;
pub use transcript::Transcript;
pub use typing_indicator::TypingIndicator;
