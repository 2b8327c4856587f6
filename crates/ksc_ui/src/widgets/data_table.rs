//! Result-grid widget.
//!
//! Renders a derived `SeasoningTable`: a fixed container column, one header
//! cell per seasoning, and the formatted mass cells. Takes the table by
//! value so the produced elements own their text.

use iced::widget::{column, container, row, text};
use iced::{Background, Color, Element, Length};

use ksc_core::table::{SeasoningTable, CONTAINER_COLUMN_LABEL};

use crate::app::Message;
use crate::theme::{colors, font, spacing};

/// Render the derived grid. Header-only when no rows survived filtering.
pub fn data_table(table: SeasoningTable) -> Element<'static, Message> {
    let mut grid = column![].spacing(1);

    let mut header = row![].spacing(1);
    header = header.push(name_cell(CONTAINER_COLUMN_LABEL.to_string(), colors::ACCENT));
    for seasoning in table.seasonings {
        header = header.push(header_cell(seasoning));
    }
    grid = grid.push(header);

    for (idx, table_row) in table.rows.into_iter().enumerate() {
        let mut data_row = row![].spacing(1);
        data_row = data_row.push(name_cell(table_row.container, colors::CONTAINER_CELL));
        for cell in table_row.cells {
            data_row = data_row.push(value_cell(cell, idx % 2 == 1));
        }
        grid = grid.push(data_row);
    }

    grid.into()
}

fn header_cell(label: String) -> Element<'static, Message> {
    colored_cell(label, colors::HEADER_BG, Length::Fill)
}

fn name_cell(label: String, background: Color) -> Element<'static, Message> {
    colored_cell(label, background, Length::Fixed(170.0))
}

fn colored_cell(label: String, background: Color, width: Length) -> Element<'static, Message> {
    container(text(label).size(font::NORMAL))
        .padding([spacing::SM, spacing::MD])
        .width(width)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors::TEXT_ON_ACCENT),
            ..Default::default()
        })
        .into()
}

fn value_cell(value: String, alternate: bool) -> Element<'static, Message> {
    let background = if alternate {
        colors::CELL_ALT
    } else {
        colors::CELL
    };

    container(text(value).size(font::NORMAL))
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into()
}
