//! Terminal reporters for bump discovery

use crate::cli::style::{Stream, Stylize, check, cross, hyperlink};
use anstream::AutoStream;
use git_bumper::bump::Reporter;
use git_bumper::types::Commit;
use std::io::Write;
use std::sync::Mutex;

/// Subject column width in the verbose report
const SUBJECT_WIDTH: usize = 40;

/// Placeholder shown in the story column for storyless commits
const NO_STORY: &str = "~~~~~~~~~";

/// Hosted tracker page for a story
fn story_url(story_id: u64) -> String {
    format!("https://www.pivotaltracker.com/story/show/{story_id}")
}

/// Default reporter: nothing but the bump hash on stdout
///
/// Keeps stdout machine-readable for scripting. Prints nothing at all when
/// there is no commit to bump to.
pub struct QuietReporter<W> {
    out: Mutex<W>,
}

impl QuietReporter<AutoStream<std::io::Stdout>> {
    /// Reporter writing to the process stdout
    pub fn new() -> Self {
        Self {
            out: Mutex::new(anstream::stdout()),
        }
    }
}

impl Default for QuietReporter<AutoStream<std::io::Stdout>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> Reporter for QuietReporter<W> {
    fn header(&self, _commit_range: &str) {}

    fn commit(&self, _commit: &Commit) {}

    fn footer(&self, bump: Option<&str>) {
        if let Some(sha) = bump {
            let Ok(mut out) = self.out.lock() else { return };
            let _ = writeln!(out, "{sha}");
        }
    }
}

/// Verbose reporter: per-commit detail on stderr, bump hash on stdout
///
/// The human-readable report goes to stderr so pipelines consuming stdout
/// see the same output in both modes.
pub struct VerboseReporter<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
    story_links: bool,
}

impl VerboseReporter<AutoStream<std::io::Stdout>, AutoStream<std::io::Stderr>> {
    /// Reporter writing to the process streams
    pub fn new() -> Self {
        Self {
            out: Mutex::new(anstream::stdout()),
            err: Mutex::new(anstream::stderr()),
            story_links: true,
        }
    }
}

impl Default for VerboseReporter<AutoStream<std::io::Stdout>, AutoStream<std::io::Stderr>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E> VerboseReporter<O, E> {
    /// Render story ids as plain text.
    ///
    /// Story pages live on the hosted tracker; a custom tracker has no
    /// known page scheme to link to.
    #[must_use]
    pub fn without_story_links(mut self) -> Self {
        self.story_links = false;
        self
    }
}

impl<O: Write + Send, E: Write + Send> Reporter for VerboseReporter<O, E> {
    fn header(&self, commit_range: &str) {
        let Ok(mut err) = self.err.lock() else { return };
        let _ = writeln!(
            err,
            "Bumping the following range of commits: {}",
            commit_range.emphasis().for_stderr()
        );
        let _ = writeln!(err);
    }

    fn commit(&self, commit: &Commit) {
        let Ok(mut err) = self.err.lock() else { return };

        // Storyless commits never block a bump.
        let mark = if commit.accepted || commit.story_id == 0 {
            check().for_stderr()
        } else {
            cross()
        };

        let story = if commit.story_id == 0 {
            NO_STORY.muted().for_stderr().to_string()
        } else {
            let id = commit.story_id.to_string();
            let text = if self.story_links {
                hyperlink(Stream::Stderr, &id, &story_url(commit.story_id))
            } else {
                id
            };
            text.accent().for_stderr().to_string()
        };

        let _ = writeln!(
            err,
            "{mark} {} {} {story} {}",
            commit.short_sha().highlight().for_stderr(),
            commit.format_subject(SUBJECT_WIDTH),
            commit.story_name
        );
    }

    fn footer(&self, bump: Option<&str>) {
        let Ok(mut err) = self.err.lock() else { return };
        let _ = writeln!(err);

        if let Some(sha) = bump {
            let _ = writeln!(
                err,
                "This is the commit you should bump to: {}",
                sha.highlight().for_stderr()
            );
            if let Ok(mut out) = self.out.lock() {
                let _ = writeln!(out, "{sha}");
            }
        } else {
            let _ = writeln!(err, "There are no commits to bump!");
        }
    }
}
