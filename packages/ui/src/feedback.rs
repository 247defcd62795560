//! # Feedback widget: thumbs up/down with an optional comment
//!
//! Attached to every bot reply that answers a user message. The widget moves
//! forward only:
//!
//! ```text
//! AwaitingRating --choose(rating)--> AwaitingComment { rating } --submit(comment)--> Submitted
//! ```
//!
//! [`FeedbackWidget::submit`] hands back the [`FeedbackRecord`] exactly once and
//! switches the widget to `Submitted` before the record is sent, so the
//! acknowledgment is on screen while the request is still in flight. Whatever
//! the backend answers, the user only ever sees the acknowledgment.

use api::{FeedbackRecord, Rating};
use dioxus::prelude::*;

use crate::actions::send_feedback;
use crate::client::use_client;

pub const THANKS: &str = "Thanks for your feedback!";
pub const COMMENT_PLACEHOLDER: &str = "Why did you rate this? (Optional)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStage {
    AwaitingRating,
    AwaitingComment { rating: Rating },
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackWidget {
    user_message: String,
    bot_response: String,
    stage: FeedbackStage,
}

impl FeedbackWidget {
    pub fn new(user_message: String, bot_response: String) -> Self {
        Self {
            user_message,
            bot_response,
            stage: FeedbackStage::AwaitingRating,
        }
    }

    pub fn stage(&self) -> FeedbackStage {
        self.stage
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn bot_response(&self) -> &str {
        &self.bot_response
    }

    /// Record the rating and move on to the comment step.
    /// Returns `false` if a rating was already chosen.
    pub fn choose(&mut self, rating: Rating) -> bool {
        if self.stage != FeedbackStage::AwaitingRating {
            return false;
        }
        self.stage = FeedbackStage::AwaitingComment { rating };
        true
    }

    /// Finish the widget. Returns the record to send, or `None` if no rating
    /// has been chosen yet or the feedback was already submitted.
    pub fn submit(&mut self, comment: &str) -> Option<FeedbackRecord> {
        let FeedbackStage::AwaitingComment { rating } = self.stage else {
            return None;
        };
        self.stage = FeedbackStage::Submitted;
        Some(FeedbackRecord {
            user_message: self.user_message.clone(),
            bot_response: self.bot_response.clone(),
            rating,
            comment: comment.trim().to_string(),
        })
    }
}

/// Enter in the comment box submits, the same as the Submit button.
pub(crate) fn submits_comment(key: &Key) -> bool {
    *key == Key::Enter
}

/// Rating buttons, then comment box, then a static thank-you.
#[component]
pub fn FeedbackControls(widget: FeedbackWidget) -> Element {
    let client = use_client();
    let mut widget = use_signal(move || widget);
    let mut comment = use_signal(String::new);

    // Flip the UI first, then fire the request.
    let mut submit = move |backend: api::HttpBackend| {
        let record = widget.write().submit(&comment());
        if let Some(record) = record {
            spawn(async move {
                send_feedback(&backend, record).await;
            });
        }
    };

    let on_submit_click = {
        let backend = client.backend.clone();
        move |_| submit(backend.clone())
    };

    let on_comment_key = {
        let backend = client.backend.clone();
        move |evt: KeyboardEvent| {
            if submits_comment(&evt.key()) {
                // keep Enter from reaching the chat form
                evt.prevent_default();
                submit(backend.clone());
            }
        }
    };

    let stage = widget().stage();

    rsx! {
        div {
            class: "feedback-container",
            {match stage {
                FeedbackStage::AwaitingRating => rsx! {
                    div {
                        class: "feedback-buttons",
                        button {
                            class: "feedback-btn thumb-up",
                            r#type: "button",
                            title: "Good answer",
                            onclick: move |_| {
                                widget.write().choose(Rating::Good);
                            },
                            ThumbIcon { rating: Rating::Good }
                        }
                        button {
                            class: "feedback-btn thumb-down",
                            r#type: "button",
                            title: "Bad answer",
                            onclick: move |_| {
                                widget.write().choose(Rating::Bad);
                            },
                            ThumbIcon { rating: Rating::Bad }
                        }
                    }
                },
                FeedbackStage::AwaitingComment { .. } => rsx! {
                    div {
                        class: "feedback-comment-box",
                        input {
                            r#type: "text",
                            placeholder: COMMENT_PLACEHOLDER,
                            value: comment(),
                            oninput: move |evt: FormEvent| comment.set(evt.value()),
                            onkeypress: on_comment_key,
                            onmounted: move |evt: MountedEvent| async move {
                                if let Err(e) = evt.set_focus(true).await {
                                    tracing::debug!("Could not focus feedback comment: {:?}", e);
                                }
                            },
                        }
                        button {
                            r#type: "button",
                            onclick: on_submit_click,
                            "Submit"
                        }
                    }
                },
                FeedbackStage::Submitted => rsx! {
                    span { class: "feedback-thanks", "{THANKS}" }
                },
            }}
        }
    }
}

#[component]
fn ThumbIcon(rating: Rating) -> Element {
    let outline = match rating {
        Rating::Good => "M14 9V5a3 3 0 0 0-3-3l-4 9v11h11.28a2 2 0 0 0 2-1.7l1.38-9a2 2 0 0 0-2-2.3zM7 22H4a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2h3",
        Rating::Bad => "M10 15v7a3 3 0 0 0 3 3l4-9V2H5.72a2 2 0 0 0-2 1.7l-1.38 9a2 2 0 0 0 2 2.3zM17 2h3a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2h-3",
    };

    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: outline }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> FeedbackWidget {
        FeedbackWidget::new(
            "I feel dizzy".to_string(),
            "Sit down and drink water.".to_string(),
        )
    }

    #[test]
    fn test_submit_requires_rating() {
        let mut w = widget();
        assert!(w.submit("too early").is_none());
        assert_eq!(w.stage(), FeedbackStage::AwaitingRating);
    }

    #[test]
    fn test_thumbs_down_with_comment() {
        let mut w = widget();
        assert!(w.choose(Rating::Bad));
        assert_eq!(w.stage(), FeedbackStage::AwaitingComment { rating: Rating::Bad });

        let record = w.submit("wrong answer").unwrap();
        assert_eq!(w.stage(), FeedbackStage::Submitted);
        assert_eq!(record.rating, Rating::Bad);
        assert_eq!(record.comment, "wrong answer");
        assert_eq!(record.user_message, "I feel dizzy");
        assert_eq!(record.bot_response, "Sit down and drink water.");
    }

    #[test]
    fn test_comment_is_trimmed_and_optional() {
        let mut w = widget();
        w.choose(Rating::Good);
        let record = w.submit("   ").unwrap();
        assert_eq!(record.comment, "");
    }

    #[test]
    fn test_at_most_one_record() {
        let mut w = widget();
        w.choose(Rating::Good);
        assert!(w.submit("").is_some());
        assert!(w.submit("again").is_none());
        assert!(!w.choose(Rating::Bad));
        assert_eq!(w.stage(), FeedbackStage::Submitted);
    }

    #[test]
    fn test_rating_cannot_change() {
        let mut w = widget();
        assert!(w.choose(Rating::Good));
        assert!(!w.choose(Rating::Bad));
        assert_eq!(w.submit("").unwrap().rating, Rating::Good);
    }

    #[test]
    fn test_enter_submits_comment() {
        assert!(submits_comment(&Key::Enter));
        assert!(!submits_comment(&Key::Character("a".to_string())));
        assert!(!submits_comment(&Key::Escape));
    }
}
