use gloo_timers::callback::Timeout;
use shared::models::{AvatarSet, Message};
use yew::{Callback, Html, function_component, html, use_state};

use crate::components::{MessageComposer, Transcript};

/// How long the demo pretends to compose a reply before answering.
const REPLY_DELAY_MS: u32 = 1_200;

const CANNED_REPLIES: &[&str] = &[
    "Hello! What can I help you with today?",
    "Good question. Let me think about that for a moment.",
    "That makes sense. Anything else on your mind?",
    "I see what you mean.\nCould you tell me a bit more?",
];

fn canned_reply(turn: usize) -> &'static str {
    CANNED_REPLIES[turn % CANNED_REPLIES.len()]
}

/// Demo shell hosting the transcript. The host owns the message list and the
/// typing flag; the transcript itself is stateless. Sending a message shows
/// the typing indicator, then a canned reply lands after a short delay.
#[function_component(App)]
pub fn app() -> Html {
    let messages = use_state(Vec::<Message>::new);
    let draft = use_state(String::new);
    let is_typing = use_state(|| false);

    let on_text_change = {
        let draft = draft.clone();
        Callback::from(move |value: String| draft.set(value))
    };

    let on_submit = {
        let messages = messages.clone();
        let draft = draft.clone();
        let is_typing = is_typing.clone();
        Callback::from(move |()| {
            let content = draft.trim().to_string();
            if content.is_empty() {
                return;
            }

            let mut next = (*messages).clone();
            next.push(Message::user(content));
            let reply = canned_reply(next.len() / 2);

            messages.set(next.clone());
            draft.set(String::new());
            is_typing.set(true);

            // The composer is disabled while "typing", so no further sends
            // can race this timeout.
            let messages = messages.clone();
            let is_typing = is_typing.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                let mut next = next;
                next.push(Message::assistant(reply));
                messages.set(next);
                is_typing.set(false);
            })
            .forget();
        })
    };

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col max-w-2xl mx-auto p-4 gap-4">
            <header class="text-lg font-semibold">{"ChatBubble"}</header>
            <div class="flex-1 min-h-0 rounded-box border border-base-300">
                <Transcript
                    messages={(*messages).clone()}
                    avatars={AvatarSet::default()}
                    is_typing={*is_typing}
                />
            </div>
            <MessageComposer
                text={(*draft).clone()}
                on_text_change={on_text_change}
                on_submit={on_submit}
                disabled={*is_typing}
                placeholder="Say something…"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::canned_reply;

    #[test]
    fn test_canned_replies_cycle() {
        let first = canned_reply(0);
        assert_eq!(canned_reply(super::CANNED_REPLIES.len()), first);
    }

    #[test]
    fn test_every_turn_has_a_reply() {
        for turn in 0..16 {
            assert!(!canned_reply(turn).is_empty());
        }
    }
}
