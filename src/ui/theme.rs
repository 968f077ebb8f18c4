use ratatui::style::Color;

pub const SPIDR_SLATE: Color = Color::Rgb(0x6c, 0x77, 0x7e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const LABEL_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const THANK_YOU_TEXT: Color = Color::Rgb(0xb9, 0xbd, 0xc2);
pub const ERROR_TEXT: Color = Color::Rgb(0xff, 0x6b, 0x6b);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x28, 0x29, 0x2a);
