//! Addressing of a location inside a nested configuration document.
//!
//! A `Path` is a list of segments (field names and sequence indices). Paths are
//! immutable: `child` and `index` return a new path and leave the parent as-is,
//! so a rule can hand the same base path to every nested check.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Field(String),
    Index(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path. Renders as an empty string.
    pub fn root() -> Self {
        Path::default()
    }

    /// Build a path from a sequence of field names, e.g. `["spec", "api"]`.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Path {
            segments: names
                .into_iter()
                .map(|n| Segment::Field(n.into()))
                .collect(),
        }
    }

    pub fn child(&self, name: impl Into<String>) -> Path {
        self.with(Segment::Field(name.into()))
    }

    pub fn index(&self, i: usize) -> Path {
        self.with(Segment::Index(i))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    fn with(&self, segment: Segment) -> Path {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Path { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Field(name) => write!(f, ".{}", name)?,
                Segment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
