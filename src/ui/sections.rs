/// Static marketing sections
///
/// Hero, how-it-works, the aphid spotlight, and the about blurb. Pure
/// presentation; nothing here reads or changes application state.

use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use crate::ui::badge;
use crate::Message;

pub fn hero() -> Element<'static, Message> {
    column![
        text("PestHub").size(48),
        text("Identify crop pests in seconds").size(24),
        text(
            "Upload a field photo and get the species, the threat level, and \
             treatment guidance from a multimodal vision model."
        )
        .size(16),
    ]
    .spacing(8)
    .into()
}

pub fn how_it_works() -> Element<'static, Message> {
    let steps = [
        ("Upload", "Drag & drop a field photo or pick one from disk."),
        ("AI Analyze", "The model inspects patterns, textures, and context."),
        ("Act", "Get treatments and prevention tailored to your crop."),
    ];

    let mut cards = row![].spacing(12);
    for (title, detail) in steps {
        cards = cards.push(
            container(column![text(title).size(18), text(detail).size(14)].spacing(6))
                .padding(16)
                .width(Length::Fill)
                .style(container::bordered_box),
        );
    }

    column![
        text("How it works").size(32),
        text("Three steps from uncertainty to action.").size(16),
        cards,
    ]
    .spacing(12)
    .into()
}

/// Editorial spotlight on the directory's first entry
pub fn pest_detail() -> Element<'static, Message> {
    let tags = row![
        badge("Insect".to_string()),
        badge("Medium threat".to_string()),
    ]
    .spacing(6);

    column![
        text("Spotlight: Aphid").size(32),
        tags,
        detail(
            "Description & symptoms",
            "Soft-bodied, sap-sucking insects that cluster on new growth. Symptoms \
             include curling leaves, honeydew, and sooty mold.",
        ),
        detail(
            "Treatment options",
            "Organic: neem oil, insecticidal soap, introduce lady beetles. Chemical: \
             selective systemic insecticides; avoid harming pollinators.",
        ),
        detail(
            "Prevention",
            "Encourage beneficial insects, remove infested leaves, avoid excess \
             nitrogen, use reflective mulches in susceptible crops.",
        ),
        detail("Common variants", "Green peach aphid, cotton aphid, potato aphid."),
        detail("Related pests", "Whiteflies, thrips, spider mites."),
    ]
    .spacing(10)
    .into()
}

pub fn about() -> Element<'static, Message> {
    let cards = [
        (
            "Multimodal AI",
            "Reads leaf texture, lesion edges, colony density, and context for \
             robust identification.",
        ),
        (
            "Speed & Accuracy",
            "Tuned for sub-3s answers with ~95% accuracy across 12 common categories.",
        ),
        (
            "Sustainable focus",
            "Recommendations prioritize IPM and beneficial insects before chemicals.",
        ),
    ];

    let mut card_row = row![].spacing(12);
    for (title, detail) in cards {
        card_row = card_row.push(
            container(column![text(title).size(18), text(detail).size(14)].spacing(6))
                .padding(16)
                .width(Length::Fill)
                .style(container::bordered_box),
        );
    }

    column![
        text("Why PestHub").size(32),
        text(
            "The pipeline blends computer vision with agronomy knowledge to produce \
             trustworthy, actionable guidance."
        )
        .size(16),
        card_row,
    ]
    .spacing(12)
    .into()
}

fn detail(title: &'static str, body: &'static str) -> Element<'static, Message> {
    column![text(title).size(18), text(body).size(14)]
        .spacing(4)
        .into()
}
