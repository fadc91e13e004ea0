//! Name card with contact links.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::{LinkKind, Profile};
use crate::traits::OpenAction;
use crate::ui::components::Chip;
use crate::ui::helpers::wrap_text;
use crate::ui::interaction::ClickAction;
use crate::ui::page::{RenderContext, SectionView};
use crate::ui::theme::{COLOR_BORDER, COLOR_HEADER, COLOR_TEXT};
use crate::view_state::SectionId;

const BAND: &[char] = &['·', ' ', ' ', '˙', ' ', ' ', '∙', ' ', ' '];

/// Decorative band that drifts at half the scroll speed.
pub fn parallax_band(width: usize, scroll_y: usize) -> Line<'static> {
    let offset = scroll_y / 2;
    let band: String = (0..width).map(|i| BAND[(i + offset) % BAND.len()]).collect();
    Line::from(Span::styled(band, Style::default().fg(COLOR_BORDER)))
}

pub fn link_action(kind: LinkKind) -> OpenAction {
    match kind {
        LinkKind::Phone => OpenAction::Call,
        LinkKind::Email => OpenAction::Email,
        LinkKind::Web => OpenAction::Profile,
    }
}

fn link_symbol(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Phone => "☎",
        LinkKind::Email => "✉",
        LinkKind::Web => "⌂",
    }
}

pub fn render(profile: &Profile, ctx: &RenderContext) -> SectionView {
    let width = ctx.width();
    let mut view = SectionView::new(SectionId::Header);

    view.push(parallax_band(width, ctx.scroll_y));
    view.push(Line::from(Span::styled(
        profile.name.to_string(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )));
    for line in wrap_text(profile.headline, width) {
        view.push(Line::from(Span::styled(line, Style::default().fg(COLOR_TEXT))));
    }
    view.blank();

    let links: Vec<Chip> = profile
        .links
        .iter()
        .map(|link| {
            Chip::link(format!("{} {}", link_symbol(link.kind), link.label)).on_click(
                ClickAction::OpenLink {
                    uri: link.uri,
                    action: link_action(link.kind),
                },
            )
        })
        .collect();
    view.push_chips(&links, 0, ctx);

    view.push(parallax_band(width, ctx.scroll_y + BAND.len()));
    view
}
