use shared::models::Role;
use yew::{Html, function_component, html};

use super::message_bubble::avatar_html;

/// Staggered delays for the three dots, in milliseconds.
const DOT_DELAYS_MS: [u16; 3] = [0, 150, 300];

/// Assistant-side placeholder shown while a reply is being composed: the
/// default assistant glyph next to three bouncing dots.
#[function_component(TypingIndicator)]
pub fn typing_indicator() -> Html {
    html! {
        <div class="chat chat-start">
            <div class="chat-image avatar">
                { avatar_html(Role::Assistant, None) }
            </div>
            <div class="chat-bubble bg-base-200">
                <div class="flex gap-1 py-1">
                    { for DOT_DELAYS_MS.iter().map(|delay| html! {
                        <span
                            class="w-2 h-2 rounded-full bg-base-content/40 animate-bounce"
                            style={format!("animation-delay: {delay}ms;")}
                        />
                    }) }
                </div>
            </div>
        </div>
    }
}
