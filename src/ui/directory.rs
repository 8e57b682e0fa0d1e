/// Directory section views
///
/// Renders the filter controls and the visible record set in the chosen
/// layout, plus the custom-search dialog. Which records appear is decided
/// entirely by `state::directory::filter_records`; this file only arranges
/// the outcome.

use iced::widget::{button, column, container, pick_list, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::Catalog;
use crate::state::data::PestRecord;
use crate::state::directory::{CategoryFilter, DirectoryView, LayoutMode, ThreatFilter};
use crate::ui::badge;
use crate::Message;

/// Render the directory section under the active filters
pub fn view<'a>(catalog: &'a Catalog, directory: &'a DirectoryView) -> Element<'a, Message> {
    let visible = directory.visible(catalog.records());

    let header = row![
        column![
            text("Pest directory").size(32),
            text(format!(
                "Browse {} common threats. Use AI custom search for anything else.",
                catalog.len()
            ))
            .size(16),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        button("Custom Search")
            .on_press(Message::OpenCustomSearch)
            .padding(10),
    ]
    .align_y(Alignment::Center);

    let controls = row![
        text_input("Search pests by name…", &directory.query)
            .on_input(Message::QueryChanged)
            .padding(10)
            .width(Length::Fill),
        pick_list(
            CategoryFilter::ALL,
            Some(directory.category),
            Message::CategorySelected
        )
        .padding(10),
        pick_list(
            ThreatFilter::ALL,
            Some(directory.threat),
            Message::ThreatSelected
        )
        .padding(10),
        layout_toggle(directory.layout),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = if visible.is_empty() {
        text("No pests match the current filters.").size(16).into()
    } else {
        match directory.layout {
            LayoutMode::Grid => {
                let cards: Vec<Element<'a, Message>> =
                    visible.iter().map(|record| grid_card(record)).collect();
                Wrap::with_elements(cards)
                    .spacing(12.0)
                    .line_spacing(12.0)
                    .into()
            }
            LayoutMode::List => {
                let rows: Vec<Element<'a, Message>> =
                    visible.iter().map(|record| list_row(record)).collect();
                Column::with_children(rows).spacing(8).into()
            }
        }
    };

    column![header, controls, body].spacing(16).into()
}

/// Grid/list buttons with the active mode highlighted
fn layout_toggle<'a>(current: LayoutMode) -> Element<'a, Message> {
    let style_for = |mode: LayoutMode| {
        if mode == current {
            button::primary
        } else {
            button::secondary
        }
    };

    row![
        button("Grid")
            .on_press(Message::LayoutSelected(LayoutMode::Grid))
            .padding(10)
            .style(style_for(LayoutMode::Grid)),
        button("List")
            .on_press(Message::LayoutSelected(LayoutMode::List))
            .padding(10)
            .style(style_for(LayoutMode::List)),
    ]
    .spacing(4)
    .into()
}

fn grid_card<'a>(record: &'a PestRecord) -> Element<'a, Message> {
    let tags = row![
        badge(record.category.to_string()),
        badge(format!("{} threat", record.threat)),
    ]
    .spacing(6);

    container(
        column![
            text(record.name.as_str()).size(18),
            tags,
            text(photo_credit(&record.image_url)).size(11),
        ]
        .spacing(8),
    )
    .width(240)
    .padding(12)
    .style(container::bordered_box)
    .into()
}

fn list_row<'a>(record: &'a PestRecord) -> Element<'a, Message> {
    container(
        row![
            text(record.name.as_str()).size(16).width(Length::Fill),
            badge(record.category.to_string()),
            badge(format!("{} threat", record.threat)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(10)
    .style(container::bordered_box)
    .into()
}

/// Shortened source note for a record photo. The locator is opaque to the
/// app; the image itself is never fetched.
fn photo_credit(url: &str) -> String {
    let trimmed = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = trimmed.split('/').next().unwrap_or(trimmed);
    format!("photo: {}", host)
}

/// The custom-search dialog shown above the page when open
pub fn custom_search_modal(draft: &str) -> Element<'_, Message> {
    let dialog = column![
        row![
            text("AI Custom Search").size(20),
            Space::with_width(Length::Fill),
            button("Close")
                .on_press(Message::CloseCustomSearch)
                .style(button::text),
        ]
        .align_y(Alignment::Center),
        text("Describe any pest and the identification service will be asked for validated insights.")
            .size(14),
        text_input("e.g. tiny green insect on tomato leaves", draft)
            .on_input(Message::SearchDraftChanged)
            .on_submit(Message::SubmitCustomSearch)
            .padding(10),
        button("Search with AI")
            .on_press(Message::SubmitCustomSearch)
            .padding(10)
            .width(Length::Fill),
    ]
    .spacing(12);

    container(dialog)
        .width(480)
        .padding(24)
        .style(container::rounded_box)
        .into()
}
