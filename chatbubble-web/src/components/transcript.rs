use shared::models::{AvatarSet, Message};
use yew::{Html, Properties, function_component, html};

use super::message_bubble::MessageBubble;
use super::typing_indicator::TypingIndicator;

#[derive(Properties, PartialEq, Clone)]
pub struct TranscriptProps {
    /// Messages in display order. The full sequence is rendered every pass;
    /// transcripts are assumed small enough that no windowing is needed.
    pub messages: Vec<Message>,
    #[prop_or_default]
    pub avatars: AvatarSet,
    #[prop_or(false)]
    pub is_typing: bool,
}

/// The transcript view: one bubble per message, in input order, with an
/// optional trailing typing indicator. Pure function of its props; all
/// message state lives with the host.
#[function_component(Transcript)]
pub fn transcript(props: &TranscriptProps) -> Html {
    html! {
        <div class="flex flex-col h-full overflow-y-auto bg-base-100 p-4">
            { for props.messages.iter().cloned().map(|message| {
                let key = message.id.to_string();
                let avatar = props.avatars.for_role(message.role).map(str::to_string);
                html! { <MessageBubble key={key} {message} {avatar} /> }
            }) }
            { if props.is_typing { html! { <TypingIndicator /> } } else { Html::default() } }
        </div>
    }
}
