/// View modules
///
/// Pure functions from application state to widget trees. Everything here
/// borrows state owned by the app and emits `Message`s back to `update`;
/// no view function mutates anything.

pub mod classifier;
pub mod directory;
pub mod sections;

use iced::widget::{container, text};
use iced::Element;

/// Small rounded tag used for category, threat, and trait labels
pub fn badge<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding(4)
        .style(container::rounded_box)
        .into()
}
