/// Classifier section views
///
/// One panel per workflow stage. The panel for a stage only reads the
/// state that stage guarantees; if a panel is somehow rendered without it,
/// it falls back to the drop zone rather than panicking.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::state::session::{Session, Stage};
use crate::ui::badge;
use crate::Message;

/// Render the classifier section for the current session stage
pub fn view<'a>(session: &'a Session, notice: Option<&'a str>) -> Element<'a, Message> {
    let header = column![
        text("Classify a pest").size(32),
        text("Upload a field photo and let the model take a look.").size(16),
    ]
    .spacing(4);

    let panel: Element<'a, Message> = match session.stage() {
        Stage::Idle => drop_zone(),
        Stage::Preview => preview_panel(session),
        Stage::Processing => processing_panel(session),
        Stage::Result => result_panel(session),
    };

    let mut content = column![header, panel].spacing(16);
    if let Some(notice) = notice {
        content = content.push(text(notice).size(14).style(text::danger));
    }

    content.into()
}

/// Idle: the drop target and the browse button
fn drop_zone<'a>() -> Element<'a, Message> {
    let prompt = column![
        text("Drag & drop an image").size(18),
        text("or click to browse").size(14),
        button("Upload").on_press(Message::BrowseImage).padding(10),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(prompt)
        .width(Length::Fill)
        .height(240)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// Preview: the selected photo with classify and reset actions
fn preview_panel<'a>(session: &'a Session) -> Element<'a, Message> {
    let Some(selected) = session.selected() else {
        return drop_zone();
    };

    let caption = text(format!(
        "{} ({}×{})",
        selected.file_name, selected.dimensions.0, selected.dimensions.1
    ))
    .size(14);

    column![
        image(image::Handle::from_path(&selected.path)).height(260),
        caption,
        row![
            button("Classify").on_press(Message::Classify).padding(10),
            button("Reset")
                .on_press(Message::ResetSession)
                .padding(10)
                .style(button::secondary),
        ]
        .spacing(8),
    ]
    .spacing(12)
    .into()
}

/// Processing: the in-flight notice while the analysis task runs
fn processing_panel<'a>(session: &'a Session) -> Element<'a, Message> {
    let subject = session
        .selected()
        .map(|s| s.file_name.as_str())
        .unwrap_or("photo");

    let notice = column![
        text(format!("Analyzing {}…", subject)).size(18),
        text("Pattern matching • Leaf texture • Damage spread").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(notice)
        .width(Length::Fill)
        .height(240)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Result: the classification card with the restart action
fn result_panel<'a>(session: &'a Session) -> Element<'a, Message> {
    let (Some(selected), Some(outcome)) = (session.selected(), session.outcome()) else {
        return drop_zone();
    };

    let mut tags = row![].spacing(6);
    for label in &outcome.traits {
        tags = tags.push(badge(label.clone()));
    }
    tags = tags.push(badge(format!("{} threat", outcome.threat)));

    column![
        row![
            image(image::Handle::from_path(&selected.path))
                .width(160)
                .height(160),
            column![
                text(&outcome.label).size(28),
                text(format!("Confidence: {}%", outcome.confidence_pct)).size(16),
                tags,
                text(&outcome.recommendations).size(14),
            ]
            .spacing(8),
        ]
        .spacing(16),
        button("Classify another")
            .on_press(Message::ResetSession)
            .padding(10),
    ]
    .spacing(12)
    .into()
}
