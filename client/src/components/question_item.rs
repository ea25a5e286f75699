//! One generated question with a reveal-on-demand answer.
//!
//! DESIGN
//! ======
//! Reveal state is local to each item. Answers are model output, so they are
//! rendered as Markdown with raw HTML dropped.

#[cfg(test)]
#[path = "question_item_test.rs"]
mod question_item_test;

use gateway::Question;
use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

/// Whether an item's answer is showing. Starts hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnswerReveal {
    visible: bool,
}

impl AnswerReveal {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn button_label(self) -> &'static str {
        if self.visible { "Hide Answer" } else { "Show Answer" }
    }
}

/// `Question N` heading for the zero-based `index`.
pub fn question_heading(index: usize) -> String {
    format!("Question {}", index + 1)
}

#[component]
pub fn QuestionItem(index: usize, question: Question) -> impl IntoView {
    let reveal = RwSignal::new(AnswerReveal::default());
    let answer_html = render_answer_html(&question.answer);
    let kind = question.kind;
    let has_kind = !kind.is_empty();

    view! {
        <div class="card question-card">
            <h3>
                {question_heading(index)}
                <Show when=move || has_kind>
                    <span class="question-card__type">{kind.clone()}</span>
                </Show>
            </h3>
            <p class="question-card__text">{question.question}</p>
            <button class="btn reveal-btn" on:click=move |_| reveal.update(AnswerReveal::toggle)>
                {move || reveal.get().button_label()}
            </button>
            <div class="answer" class:visible=move || reveal.get().is_visible()>
                <strong>"Answer:"</strong>
                <div class="answer__body" inner_html=answer_html></div>
            </div>
        </div>
    }
}

/// Render `markdown` to HTML, dropping inline and block raw HTML.
pub fn render_answer_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
