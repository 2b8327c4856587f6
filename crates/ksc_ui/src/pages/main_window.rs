//! Main window view.
//!
//! Layout matches the original page: weight input on top, the result grid
//! in the middle, the JSON settings editor below.

use iced::alignment::Vertical;
use iced::widget::{
    button, column, container, row, scrollable, slider, text, text_editor,
};
use iced::widget::space::vertical as vertical_space;
use iced::{Element, Length};
use iced_aw::number_input;

use ksc_core::settings::SAMPLE_SETTINGS_JSON;

use crate::app::{App, Message, WEIGHT_MAX_G};
use crate::theme::{colors, font, spacing};
use crate::widgets::data_table;

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = column![
        text("Kitchen Salt Calc").size(font::HEADER),
        vertical_space().height(spacing::MD),
        weight_section(app),
        vertical_space().height(spacing::MD),
        table_section(app),
        vertical_space().height(spacing::MD),
        settings_section(app),
        status_bar(app),
    ]
    .spacing(spacing::XS)
    .padding(spacing::LG);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Weight input row: label, number input, and slider, all bound to the
/// same gross weight.
fn weight_section(app: &App) -> Element<'_, Message> {
    row![
        text("Ingredient weight (g)")
            .size(font::NORMAL)
            .width(Length::Fixed(170.0)),
        number_input(&app.gross_weight, 0..=WEIGHT_MAX_G, Message::WeightChanged)
            .step(10)
            .width(Length::Fixed(120.0)),
        slider(0..=WEIGHT_MAX_G, app.gross_weight, Message::WeightChanged),
    ]
    .spacing(spacing::MD)
    .align_y(Vertical::Center)
    .into()
}

/// The derived result grid for the current weight.
fn table_section(app: &App) -> Element<'_, Message> {
    let content = column![
        text("Seasoning amounts").size(font::LG),
        vertical_space().height(spacing::SM),
        data_table(app.table()),
    ]
    .spacing(spacing::XS);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// Settings editor with Save/Paste/Import/Export controls and the live
/// invalid-JSON indicator.
fn settings_section(app: &App) -> Element<'_, Message> {
    let editor = text_editor(&app.editor)
        .placeholder(SAMPLE_SETTINGS_JSON)
        .on_action(Message::EditorAction)
        .height(Length::Fixed(220.0));

    let mut controls = row![
        button(text("Save").size(font::NORMAL))
            .on_press(Message::SaveSettings)
            .padding([spacing::SM, spacing::XL]),
        button(text("Paste").size(font::NORMAL))
            .on_press(Message::PasteIntoEditor)
            .padding([spacing::SM, spacing::LG]),
        button(text("Import...").size(font::NORMAL))
            .on_press(Message::ImportSettings)
            .padding([spacing::SM, spacing::LG]),
        button(text("Export...").size(font::NORMAL))
            .on_press(Message::ExportSettings)
            .padding([spacing::SM, spacing::LG]),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    if app.editor_invalid {
        controls = controls.push(
            text("Invalid JSON")
                .size(font::NORMAL)
                .color(colors::ERROR_TEXT),
        );
    }

    let content = column![
        text("Settings (JSON)").size(font::LG),
        vertical_space().height(spacing::SM),
        editor,
        vertical_space().height(spacing::SM),
        controls,
    ]
    .spacing(spacing::XS);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// Status line at the bottom.
fn status_bar(app: &App) -> Element<'_, Message> {
    row![text(&app.status).size(font::SM).color(colors::TEXT_SECONDARY)]
        .padding([spacing::SM, 0.0])
        .into()
}
