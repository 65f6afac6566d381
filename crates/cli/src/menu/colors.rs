use crossterm::style::Color;
use gitify_core::config::{ColorDefinition, Theme};
use gitify_core::error::{Error, Result};

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "darkgrey" => Color::DarkGrey,
                "red" => Color::Red,
                "darkred" => Color::DarkRed,
                "green" => Color::Green,
                "darkgreen" => Color::DarkGreen,
                "yellow" => Color::Yellow,
                "darkyellow" => Color::DarkYellow,
                "blue" => Color::Blue,
                "darkblue" => Color::DarkBlue,
                "magenta" => Color::Magenta,
                "darkmagenta" => Color::DarkMagenta,
                "cyan" => Color::Cyan,
                "darkcyan" => Color::DarkCyan,
                "white" => Color::White,
                "grey" => Color::Grey,
                _ => return Err(Error::UnknownColorName(name.to_string())),
            }),
            _ => None,
        })
    }
}

/// Resolved view colours. `Color::Reset` stands in for an empty definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub output: Color,
    pub highlight: Color,
}

impl Palette {
    /// Resolves a theme.
    ///
    /// # Errors
    ///
    /// Returns an error if a colour defines more than one of `rgb`, `ansi`
    /// or `name`, or names an unknown colour.
    pub fn from_theme(theme: &Theme) -> Result<Self> {
        Ok(Self {
            output: theme.output.as_crossterm_color()?.unwrap_or(Color::Reset),
            highlight: theme.highlight.as_crossterm_color()?.unwrap_or(Color::Reset),
        })
    }
}
