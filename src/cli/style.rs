//! CLI styling utilities
//!
//! Provides semantic styling via the [`Stylize`] trait with automatic
//! terminal color support detection (delegated to `owo-colors`).
//!
//! # Color Palette
//!
//! | Helper        | Color  | Stream | Semantic Use                    |
//! |---------------|--------|--------|---------------------------------|
//! | `.accent()`   | Cyan   | stdout | Story IDs, counts               |
//! | `.highlight()`| Yellow | stdout | Commit hashes, the bump point   |
//! | `.muted()`    | Dim    | stdout | Placeholders, secondary text    |
//! | `.emphasis()` | Bold   | stdout | Headers, the footer verdict     |
//! | `check()`     | Green  | stdout | The accepted mark               |
//! | `cross()`     | Red    | stderr | The unaccepted mark             |
//!
//! The verbose report renders on stderr so stdout stays pipeline-safe;
//! call `.for_stderr()` when printing there.

use std::fmt::{self, Display};

pub use owo_colors::Stream;
use owo_colors::{OwoColorize, Style};

// ============================================================================
// Style definitions (single source of truth for color palette)
// ============================================================================

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const HIGHLIGHT: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

// ============================================================================
// Styled wrapper
// ============================================================================

/// A value with semantic styling applied.
///
/// Implements [`Display`] to render with ANSI codes when supported.
/// Color support detection is handled by `owo-colors` (respects `NO_COLOR`,
/// `CLICOLOR`, `CLICOLOR_FORCE`, and TTY detection).
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }

    /// Override to render for stderr stream detection.
    #[must_use]
    pub const fn for_stderr(mut self) -> Self {
        self.stream = Stream::Stderr;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Single point where color detection + rendering happens.
        // owo-colors handles NO_COLOR, CLICOLOR, CLICOLOR_FORCE, TTY detection.
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

// ============================================================================
// Stylize trait
// ============================================================================

/// Extension trait for semantic terminal styling.
///
/// Automatically implemented for all [`Display`] types. Methods take `&self`
/// to avoid moving the value, allowing styling of borrowed data.
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    ///
    /// Use for: story IDs, counts
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Highlight color (yellow) for commit hashes.
    ///
    /// Use for: short SHAs, the chosen bump point
    fn highlight(&self) -> Styled<&Self> {
        Styled::new(self, HIGHLIGHT, Stream::Stdout)
    }

    /// Muted style (dim) for secondary information.
    ///
    /// Use for: placeholders, de-emphasized text
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Emphasis style (bold) for important text.
    ///
    /// Use for: headers, the footer verdict
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

// Blanket implementation for all Display types
impl<T: Display + ?Sized> Stylize for T {}

// ============================================================================
// Symbols (Unicode)
// ============================================================================

/// Accepted checkmark
pub const CHECK: &str = "✓";

/// Unaccepted cross
pub const CROSS: &str = "✗";

// ============================================================================
// Pre-styled symbol helpers
// ============================================================================

/// Green checkmark for accepted commits.
#[inline]
pub const fn check() -> Styled<&'static str> {
    Styled::new(CHECK, SUCCESS, Stream::Stdout)
}

/// Red cross for unaccepted commits (renders to stderr by default).
#[inline]
pub const fn cross() -> Styled<&'static str> {
    Styled::new(CROSS, ERROR, Stream::Stderr)
}

// ============================================================================
// Hyperlinks (OSC 8)
// ============================================================================

/// Convert owo-colors Stream to supports-hyperlinks Stream
const fn to_hyperlink_stream(stream: Stream) -> supports_hyperlinks::Stream {
    match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    }
}

/// Create a clickable hyperlink with the given text.
///
/// Falls back to the plain text in terminals that don't support OSC 8
/// hyperlinks.
pub fn hyperlink(stream: Stream, text: &str, url: &str) -> String {
    if supports_hyperlinks::on(to_hyperlink_stream(stream)) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        text.to_string()
    }
}
