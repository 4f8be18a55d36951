//! Bus line types.

/// How a line's published stop sequence is operated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// The published sequence is ridden as-is; a loop is published with
    /// its first stop repeated at the end.
    Loop,
    /// The published sequence is ridden out and then back in reverse.
    ThereAndBack,
}

/// A bus line: a named, ordered stop sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub name: String,
    pub kind: LineKind,
    /// Stop names as published.
    pub stops: Vec<String>,
}

impl Line {
    /// Create a line from its published stop names.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        kind: LineKind,
        stops: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the full sequence of stops a bus actually rides.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::{Line, LineKind};
    ///
    /// let line = Line::new("14", LineKind::ThereAndBack, ["A", "B", "C"]);
    /// assert_eq!(line.route_stops(), vec!["A", "B", "C", "B", "A"]);
    ///
    /// let ring = Line::new("k", LineKind::Loop, ["A", "B", "A"]);
    /// assert_eq!(ring.route_stops(), vec!["A", "B", "A"]);
    /// ```
    pub fn route_stops(&self) -> Vec<&str> {
        let outbound = self.stops.iter().map(String::as_str);
        match self.kind {
            LineKind::Loop => outbound.collect(),
            LineKind::ThereAndBack => {
                let back = self.stops.iter().rev().skip(1).map(String::as_str);
                outbound.chain(back).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_and_back_mirrors_the_sequence() {
        let line = Line::new("1", LineKind::ThereAndBack, ["A", "B", "C"]);
        assert_eq!(line.route_stops(), vec!["A", "B", "C", "B", "A"]);
    }

    #[test]
    fn there_and_back_with_two_stops() {
        let line = Line::new("1", LineKind::ThereAndBack, ["A", "B"]);
        assert_eq!(line.route_stops(), vec!["A", "B", "A"]);
    }

    #[test]
    fn loop_is_used_as_published() {
        let line = Line::new("1", LineKind::Loop, ["A", "B", "C", "A"]);
        assert_eq!(line.route_stops(), vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn degenerate_lines() {
        let single = Line::new("1", LineKind::ThereAndBack, ["A"]);
        assert_eq!(single.route_stops(), vec!["A"]);

        let empty = Line::new("2", LineKind::ThereAndBack, Vec::<String>::new());
        assert!(empty.route_stops().is_empty());
    }
}
