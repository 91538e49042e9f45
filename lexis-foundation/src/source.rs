//! Source file storage and line/column lookup.

use std::path::PathBuf;

use codespan_reporting::files::Files;

use crate::span::SourceId;

/// A single line/column position within a source file.
///
/// `line`/`column` are 0-based, as used internally for offset arithmetic; `display_line`/
/// `display_column` are the 1-based values meant to be shown to a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub display_line: usize,
    pub display_column: usize,
}

/// A single source file tracked by a [`SourceMap`].
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
    line_offsets: Vec<usize>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let line_offsets = codespan_reporting::files::line_starts(&contents).collect();
        Self {
            path: path.into(),
            contents,
            line_offsets,
        }
    }

    fn line_start(&self, line_index: usize) -> Option<usize> {
        match line_index.cmp(&self.line_offsets.len()) {
            std::cmp::Ordering::Less => self.line_offsets.get(line_index).copied(),
            std::cmp::Ordering::Equal => Some(self.contents.len()),
            std::cmp::Ordering::Greater => None,
        }
    }

    fn position_of(&self, offset: usize) -> Position {
        let line = self
            .line_offsets
            .binary_search(&offset)
            .unwrap_or_else(|next| next - 1);
        let column = offset - self.line_offsets[line];
        Position {
            line,
            column,
            display_line: line + 1,
            display_column: column + 1,
        }
    }
}

/// Read-only lookup the core consumes: resolve a [`SourceId`] to its file, and a byte offset to
/// a human-facing line/column.
pub trait SourceMap {
    fn get(&self, id: SourceId) -> Option<&SourceFile>;

    fn byte_to_position(&self, id: SourceId, offset: usize) -> Option<Position> {
        self.get(id).map(|file| file.position_of(offset))
    }
}

/// A [`SourceMap`] that owns all of its source files in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceMap {
    files: Vec<SourceFile>,
}

impl InMemorySourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source file, returning the [`SourceId`] it was assigned.
    pub fn add(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> SourceId {
        let id = SourceId::new(self.files.len() as u32);
        self.files.push(SourceFile::new(path, contents));
        id
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceMap for InMemorySourceMap {
    fn get(&self, id: SourceId) -> Option<&SourceFile> {
        self.files.get(id.index() as usize)
    }
}

impl<'f> Files<'f> for InMemorySourceMap {
    type FileId = SourceId;
    type Name = String;
    type Source = &'f str;

    fn name(&'f self, id: Self::FileId) -> Result<Self::Name, codespan_reporting::files::Error> {
        let file = self.get(id).ok_or(codespan_reporting::files::Error::FileMissing)?;
        Ok(file.path.display().to_string())
    }

    fn source(&'f self, id: Self::FileId) -> Result<Self::Source, codespan_reporting::files::Error> {
        let file = self.get(id).ok_or(codespan_reporting::files::Error::FileMissing)?;
        Ok(&file.contents)
    }

    fn line_index(
        &'f self,
        id: Self::FileId,
        byte_index: usize,
    ) -> Result<usize, codespan_reporting::files::Error> {
        let file = self.get(id).ok_or(codespan_reporting::files::Error::FileMissing)?;
        Ok(file
            .line_offsets
            .binary_search(&byte_index)
            .unwrap_or_else(|next_line| next_line - 1))
    }

    fn line_range(
        &'f self,
        id: Self::FileId,
        line_index: usize,
    ) -> Result<std::ops::Range<usize>, codespan_reporting::files::Error> {
        let file = self.get(id).ok_or(codespan_reporting::files::Error::FileMissing)?;
        let start = file
            .line_start(line_index)
            .ok_or(codespan_reporting::files::Error::LineTooLarge {
                given: line_index,
                max: file.line_offsets.len().saturating_sub(1),
            })?;
        let end = file
            .line_start(line_index + 1)
            .ok_or(codespan_reporting::files::Error::LineTooLarge {
                given: line_index + 1,
                max: file.line_offsets.len().saturating_sub(1),
            })?;
        Ok(start..end)
    }
}
