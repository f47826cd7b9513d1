use colored::Color;

pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IP_ADDR: Color = Color::Cyan;
pub const HOSTNAME: Color = Color::BrightBlue;

pub const ERROR: Color = Color::Red;
pub const WARNING: Color = Color::Magenta;
