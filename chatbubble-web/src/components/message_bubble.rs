use shared::models::{Message, Role};
use yew::{Html, Properties, ToHtml, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq, Clone)]
pub struct MessageBubbleProps {
    pub message: Message,
    #[prop_or_default]
    pub avatar: Option<String>,
}

/// User messages sit on the right, assistant messages on the left.
const fn side_classes(role: Role) -> &'static str {
    match role {
        Role::User => "chat chat-end",
        Role::Assistant => "chat chat-start",
    }
}

const fn bubble_classes(role: Role) -> &'static str {
    match role {
        Role::User => "chat-bubble chat-bubble-primary",
        Role::Assistant => "chat-bubble bg-base-200 text-base-content",
    }
}

const fn default_glyph(role: Role) -> IconId {
    match role {
        Role::User => IconId::HeroiconsSolidUser,
        Role::Assistant => IconId::HeroiconsSolidChatBubbleLeftRight,
    }
}

const fn avatar_alt(role: Role) -> &'static str {
    match role {
        Role::User => "User avatar",
        Role::Assistant => "Assistant avatar",
    }
}

/// The avatar slot: the configured image when one is supplied, otherwise a
/// role-specific glyph. Also used by the typing indicator for its
/// assistant-side avatar.
pub(crate) fn avatar_html(role: Role, avatar: Option<&str>) -> Html {
    match avatar {
        Some(url) => html! {
            <div class="w-10 h-10 rounded-full overflow-hidden">
                <img src={url.to_string()} alt={avatar_alt(role)} class="w-full h-full object-cover" />
            </div>
        },
        None => html! {
            <div class="w-10 h-10 rounded-full bg-base-200 flex items-center justify-center">
                <Icon icon_id={default_glyph(role)} class="h-6 w-6 text-base-content/70" />
            </div>
        },
    }
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let role = props.message.role;

    html! {
        <div class={side_classes(role)}>
            <div class="chat-image avatar">
                { avatar_html(role, props.avatar.as_deref()) }
            </div>
            <div class={classes!(bubble_classes(role), "whitespace-pre-wrap")}>
                { props.message.content.clone() }
            </div>
            <div class="chat-footer text-xs text-base-content/60 mt-1">
                { props.message.sent_at.to_html() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use shared::models::{Message, Role, Timestamp};
    use uuid::Uuid;
    use yew::ServerRenderer;
    use yew_icons::IconId;

    use super::{MessageBubble, MessageBubbleProps, bubble_classes, default_glyph, side_classes};

    fn sample_message(role: Role, content: &str) -> Message {
        Message {
            id: Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap(),
            role,
            content: content.to_string(),
            sent_at: Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap()),
        }
    }

    async fn render(props: MessageBubbleProps) -> String {
        ServerRenderer::<MessageBubble>::with_props(move || props)
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn test_user_aligns_right_assistant_left() {
        assert_eq!(side_classes(Role::User), "chat chat-end");
        assert_eq!(side_classes(Role::Assistant), "chat chat-start");
    }

    #[test]
    fn test_bubble_styling_differs_per_role() {
        assert_ne!(bubble_classes(Role::User), bubble_classes(Role::Assistant));
    }

    #[test]
    fn test_default_glyphs_distinguish_roles() {
        assert_eq!(default_glyph(Role::User), IconId::HeroiconsSolidUser);
        assert_eq!(
            default_glyph(Role::Assistant),
            IconId::HeroiconsSolidChatBubbleLeftRight
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_renders_content_and_timestamp() {
        let html = render(MessageBubbleProps {
            message: sample_message(Role::User, "Hi"),
            avatar: None,
        })
        .await;

        assert!(html.contains("chat chat-end"));
        assert!(html.contains("Hi"));
        assert!(html.contains("14:30"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_line_breaks_are_preserved_verbatim() {
        let html = render(MessageBubbleProps {
            message: sample_message(Role::Assistant, "line one\nline two"),
            avatar: None,
        })
        .await;

        assert!(html.contains("line one\nline two"));
        assert!(html.contains("whitespace-pre-wrap"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_supplied_avatar_renders_image() {
        let html = render(MessageBubbleProps {
            message: sample_message(Role::User, "Hi"),
            avatar: Some("https://example.com/me.png".to_string()),
        })
        .await;

        assert!(html.contains("https://example.com/me.png"));
        assert!(!html.contains("<svg"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_avatar_falls_back_to_glyph() {
        let html = render(MessageBubbleProps {
            message: sample_message(Role::User, "Hi"),
            avatar: None,
        })
        .await;

        assert!(html.contains("<svg"));
        assert!(!html.contains("<img"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_rendering_is_idempotent() {
        let props = MessageBubbleProps {
            message: sample_message(Role::Assistant, "Hello!"),
            avatar: None,
        };

        let first = render(props.clone()).await;
        let second = render(props).await;

        assert_eq!(first, second);
    }
}
