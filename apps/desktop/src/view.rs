//! Widgets for the single page: credential, options, drop zone, notice and report.

use clipguard_core::{
    AppState, Category, Notice, NoticeLevel, Section, SectionBody, render,
    render::TABLE_HEADERS,
};
use iced::widget::{button, column, container, row, scrollable, text, text_input, toggler};
use iced::{Alignment, Color, Element, Length};

use crate::app::{App, Message};

const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.50);
const DIMMED: Color = Color::from_rgb(0.65, 0.67, 0.70);
const SUCCESS: Color = Color::from_rgb(0.09, 0.55, 0.27);
const ERROR: Color = Color::from_rgb(0.80, 0.15, 0.15);

pub fn view(app: &App) -> Element<'_, Message> {
    let mut content = column![
        text("🎬 Video Content Moderation").size(26),
        credential_panel(&app.state),
        options_panel(&app.state),
        drop_zone(&app.state, app.hovering),
    ]
    .spacing(24)
    .padding(24)
    .max_width(900.0);

    if let Some(notice) = &app.notice {
        content = content.push(notice_banner(notice));
    }

    if let Some(result) = app.state.result() {
        for section in render(result).sections {
            content = content.push(result_section(section));
        }
    }

    scrollable(container(content).center_x(Length::Fill)).into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn credential_panel(state: &AppState) -> Element<'_, Message> {
    let credential = &state.credential;
    let input = text_input("Enter your Gemini API Key", credential.key())
        .on_input(Message::ApiKeyChanged)
        .secure(!credential.is_visible())
        .padding(8);
    let toggle = button(text(if credential.is_visible() { "Hide" } else { "Show" }))
        .on_press(Message::ToggleKeyVisibility);

    card(
        column![
            text("API Configuration").size(18),
            row![input, toggle].spacing(8).align_y(Alignment::Center),
        ]
        .spacing(12),
    )
}

fn options_panel(state: &AppState) -> Element<'_, Message> {
    let panel = Category::ALL.into_iter().fold(
        column![text("Analysis Options").size(18)].spacing(16),
        |panel, category| {
            panel.push(
                row![
                    toggler(state.options.get(category))
                        .on_toggle(move |enabled| Message::OptionToggled(category, enabled)),
                    column![
                        text(category.label()).size(15),
                        text(category.description()).size(13).color(MUTED),
                    ]
                    .spacing(2),
                ]
                .spacing(12),
            )
        },
    );

    card(panel)
}

fn drop_zone(state: &AppState, hovering: bool) -> Element<'_, Message> {
    let in_flight = state.is_in_flight();
    let label = if in_flight {
        "Analyzing video..."
    } else if hovering {
        "Drop the video here"
    } else {
        "Drag & drop a video, or click to select"
    };

    let zone = column![
        text(label)
            .size(18)
            .color(if in_flight { DIMMED } else { Color::BLACK }),
        text("Supported formats: MP4, AVI, MOV").size(13).color(MUTED),
        button(text("Select video")).on_press_maybe((!in_flight).then_some(Message::PickFile)),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let mut panel = column![
        container(zone)
            .padding(40)
            .center_x(Length::Fill)
            .style(container::bordered_box)
    ]
    .spacing(12);

    if let Some(preview) = state.upload.preview() {
        panel = panel.push(
            row![
                text(format!("Selected video preview: {}", preview.file_name()))
                    .size(13)
                    .color(MUTED),
                button(text("Play")).on_press(Message::PlayPreview),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );
    }

    card(panel)
}

fn notice_banner(notice: &Notice) -> Element<'_, Message> {
    let color = match notice.level {
        NoticeLevel::Success => SUCCESS,
        NoticeLevel::Error => ERROR,
    };

    container(
        row![
            text(&notice.message).color(color).width(Length::Fill),
            button(text("Dismiss")).on_press(Message::DismissNotice),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

fn result_section(section: Section<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match section.body {
        SectionBody::Text(body) => text(body).into(),
        SectionBody::Table(rows) => {
            let header = table_row(TABLE_HEADERS.0, TABLE_HEADERS.1, MUTED);
            rows.iter()
                .fold(column![header].spacing(8), |table, (label, value)| {
                    table.push(table_row(label, value, Color::BLACK))
                })
                .into()
        }
    };

    card(column![text(section.title).size(18), body].spacing(12))
}

fn table_row<'a>(label: &'a str, value: &'a str, color: Color) -> Element<'a, Message> {
    row![
        text(label)
            .color(color)
            .width(Length::FillPortion(1)),
        text(value).color(MUTED).width(Length::FillPortion(2)),
    ]
    .spacing(16)
    .into()
}
