//! Revision entries shown in the list.

/// One revision of the repository log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    /// Short change identifier.
    pub change_id: String,
    /// First line of the description.
    pub summary: String,
    /// Remaining description lines.
    pub body: Vec<String>,
}

impl Revision {
    /// Create a revision with an empty body.
    pub fn new(change_id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            change_id: change_id.into(),
            summary: summary.into(),
            body: Vec::new(),
        }
    }

    /// Append a body line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Rows this revision takes in the list: header plus up to
    /// `preview_lines` body lines.
    pub fn list_height(&self, preview_lines: usize) -> usize {
        1 + self.body.len().min(preview_lines)
    }

    /// Parse revisions from text.
    ///
    /// Entries are separated by one or more blank lines. The first line of
    /// an entry is `<change_id> <summary>`; every following line is body.
    ///
    /// ```
    /// use vctui::model::Revision;
    ///
    /// let revs = Revision::parse_all("qpvuntsm fix parser\nhandles tabs\n\nzzzzzzzz root\n");
    /// assert_eq!(revs.len(), 2);
    /// assert_eq!(revs[0].change_id, "qpvuntsm");
    /// assert_eq!(revs[0].body, vec!["handles tabs"]);
    /// assert_eq!(revs[1].summary, "root");
    /// ```
    pub fn parse_all(text: &str) -> Vec<Revision> {
        let mut revisions = Vec::new();
        let mut current: Option<Revision> = None;
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                revisions.extend(current.take());
                continue;
            }
            match current.as_mut() {
                Some(rev) => rev.body.push(line.to_string()),
                None => {
                    let line = line.trim_start();
                    let (id, summary) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
                    current = Some(Revision::new(id, summary.trim_start()));
                }
            }
        }
        revisions.extend(current);
        revisions
    }

    /// Built-in revisions used when no file is given.
    pub fn samples() -> Vec<Revision> {
        vec![
            Revision::new("kmkuslsw", "render: composite effects by z")
                .with_line("Draws and effects now share one ordering.")
                .with_line("Higher layers always land on top."),
            Revision::new("qpvuntsm", "list: keep cursor visible with minimal motion"),
            Revision::new("rlvkpnrz", "layout: add percent extents")
                .with_line("Percent is computed against the full axis.")
                .with_line("Remaining space goes to the last fill.")
                .with_line("Covered by the split tests."),
            Revision::new("zsuskuln", "mouse: route wheel events through windows")
                .with_line("Scroll messages get the delta stamped in."),
            Revision::new("royxmykx", "text: wrap long clickable segments"),
            Revision::new("vruxwmqv", "menu: open context menu at pointer")
                .with_line("Menu items sit one layer above the menu window."),
            Revision::new("tqvqmrkm", "status: show hovered action"),
            Revision::new("nnnlnxop", "docs: describe routing rules")
                .with_line("Topmost window scopes the lookup.")
                .with_line("Within it, highest z then earliest order."),
            Revision::new("wmwvqwsz", "bench: hit testing throughput"),
            Revision::new("zzzzzzzz", "root()"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_repeated_blank_lines() {
        let revs = Revision::parse_all("\n\nabc first\n\n\n\ndef second\nbody\n\n");
        assert_eq!(
            revs,
            vec![
                Revision::new("abc", "first"),
                Revision::new("def", "second").with_line("body"),
            ]
        );
    }

    #[test]
    fn parse_header_without_summary() {
        let revs = Revision::parse_all("lonely");
        assert_eq!(revs, vec![Revision::new("lonely", "")]);
    }

    #[test]
    fn parse_treats_whitespace_only_lines_as_separators() {
        let revs = Revision::parse_all("a one\n   \nb two");
        assert_eq!(revs.len(), 2);
    }

    #[test]
    fn parse_empty_text_is_empty() {
        assert!(Revision::parse_all("").is_empty());
    }

    #[test]
    fn list_height_caps_preview() {
        let rev = Revision::new("a", "b")
            .with_line("1")
            .with_line("2")
            .with_line("3");
        assert_eq!(rev.list_height(2), 3);
        assert_eq!(rev.list_height(0), 1);
        assert_eq!(Revision::new("a", "b").list_height(2), 1);
    }

    #[test]
    fn samples_have_unique_ids() {
        let samples = Revision::samples();
        let mut ids: Vec<&str> = samples.iter().map(|r| r.change_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), samples.len());
    }
}
