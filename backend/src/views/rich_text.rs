//! Renderer for block content.
//!
//! One renderer serves every rich field on the site. Consecutive list items
//! of the same kind are wrapped in a single `ul`/`ol`; unknown block types
//! and images without a resolved URL are skipped.

use maud::{Markup, html};

use super::link;
use crate::domain::content::rich_text::{Block, BlockStyle, ListKind, Span, TextBlock};

enum Group<'a> {
    Single(&'a Block),
    List(ListKind, Vec<&'a TextBlock>),
}

fn group_blocks(blocks: &[Block]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    for block in blocks {
        let Some((kind, text)) = as_list_item(block) else {
            groups.push(Group::Single(block));
            continue;
        };
        if let Some(Group::List(open, items)) = groups.last_mut() {
            if *open == kind {
                items.push(text);
                continue;
            }
        }
        groups.push(Group::List(kind, vec![text]));
    }
    groups
}

fn as_list_item(block: &Block) -> Option<(ListKind, &TextBlock)> {
    match block {
        Block::Text(text) => text.list_kind().map(|kind| (kind, text)),
        _ => None,
    }
}

/// Render `blocks` as HTML.
pub fn render(blocks: &[Block]) -> Markup {
    html! {
        @for group in group_blocks(blocks) {
            @match group {
                Group::Single(block) => {
                    (render_block(block))
                }
                Group::List(ListKind::Bullet, items) => {
                    ul { @for item in items { li { (spans(item)) } } }
                }
                Group::List(ListKind::Number, items) => {
                    ol { @for item in items { li { (spans(item)) } } }
                }
            }
        }
    }
}

fn render_block(block: &Block) -> Markup {
    match block {
        Block::Text(text) => {
            let content = spans(text);
            match text.style() {
                BlockStyle::Normal => html! { p { (content) } },
                BlockStyle::Heading(1) => html! { h1 { (content) } },
                BlockStyle::Heading(2) => html! { h2 { (content) } },
                BlockStyle::Heading(3) => html! { h3 { (content) } },
                BlockStyle::Heading(_) => html! { h4 { (content) } },
                BlockStyle::Blockquote => html! { blockquote { (content) } },
            }
        }
        Block::Image(image) => match image.url() {
            Some(url) => html! { img.rich-image src=(url) alt=(image.alt_or("Image")) loading="lazy"; },
            None => html! {},
        },
        Block::Unknown => html! {},
    }
}

fn spans(block: &TextBlock) -> Markup {
    html! {
        @for span in &block.children {
            (render_span(block, span))
        }
    }
}

fn render_span(block: &TextBlock, span: &Span) -> Markup {
    span.marks
        .iter()
        .rev()
        .fold(html! { (span.text) }, |inner, mark| apply_mark(block, mark, inner))
}

fn apply_mark(block: &TextBlock, mark: &str, inner: Markup) -> Markup {
    match mark {
        "strong" => html! { strong { (inner) } },
        "em" => html! { em { (inner) } },
        "code" => html! { code { (inner) } },
        "underline" => html! { u { (inner) } },
        "strike-through" => html! { s { (inner) } },
        key => match block.mark_def(key) {
            Some(def) => match def.link_href() {
                Some(href) => link(href, def.blank == Some(true), Some("rich-link"), inner),
                None => html! { span { (inner) } },
            },
            None => inner,
        },
    }
}
