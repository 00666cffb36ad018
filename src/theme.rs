use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use std::fmt;

/// Colour scheme for console output, chosen once per run and resolved into a
/// [`Palette`] when something is drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BorderStyle {
    Modern,
    Rounded,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub border: BorderStyle,
    pub principal_mark: char,
    pub interest_mark: char,
    dark: bool,
}

impl Palette {
    pub fn title(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_cyan().bold()
        } else {
            text.blue().bold()
        }
    }

    pub fn emphasis(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_white().bold()
        } else {
            text.black().bold()
        }
    }
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                border: BorderStyle::Modern,
                principal_mark: '#',
                interest_mark: '+',
                dark: false,
            },
            Theme::Dark => Palette {
                border: BorderStyle::Rounded,
                principal_mark: '█',
                interest_mark: '░',
                dark: true,
            },
        }
    }
}

/// Turns colour off when the output is not a terminal, so redirected tables
/// carry no escape sequences. Otherwise `colored`'s own environment checks
/// (`NO_COLOR`, `CLICOLOR`) stay in charge.
pub fn apply_color_choice(is_terminal: bool) {
    if !is_terminal {
        colored::control::set_override(false);
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_color_choice, BorderStyle, Theme};
    use crate::loan::compute_schedule;
    use crate::report::{render_table, RenderOptions};
    use rust_decimal_macros::dec;
    use test_log::test;

    #[test]
    fn test_palettes_differ() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();

        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(light.border, BorderStyle::Modern);
        assert_eq!(dark.border, BorderStyle::Rounded);
        assert_ne!(light.principal_mark, dark.principal_mark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_title_keeps_text() {
        let title = Theme::Dark.palette().title("Schedule");
        assert_eq!(&*title, "Schedule");
    }

    #[test]
    fn test_redirected_output_has_no_escapes() {
        apply_color_choice(false);
        let schedule = compute_schedule(dec!(120000), 12, dec!(10)).unwrap();
        let options = RenderOptions {
            theme: Theme::Dark,
            first_payment: None,
        };
        let rendered = render_table(&schedule, &options);

        assert!(!rendered.contains('\u{1b}'));
        assert!(rendered.starts_with("Loan Amortization Schedule\n"));
    }
}
