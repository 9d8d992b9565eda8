use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Writer,
    Reader,
}

impl Role {
    /// The role of thread `ordinal` in a single-writer configuration: ordinal 0 writes,
    /// everyone else reads.
    #[inline(always)]
    pub fn of(ordinal: usize) -> Self {
        Mix::SingleWriter.role(ordinal)
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Writer => "writer",
            Role::Reader => "reader",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How roles are distributed among the threads of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mix {
    /// Exactly one writer (ordinal 0); the remaining threads are readers.
    SingleWriter,

    /// Every thread is a reader.
    ReadOnly,
}

impl Mix {
    pub const VARIANTS: [Mix; 2] = [Mix::SingleWriter, Mix::ReadOnly];

    #[inline(always)]
    pub fn role(self, ordinal: usize) -> Role {
        match self {
            Mix::SingleWriter if ordinal == 0 => Role::Writer,
            _ => Role::Reader,
        }
    }

    /// The fewest threads for which the mix is meaningful. A single-writer configuration
    /// needs a reader to contend with, or it degenerates into a write-only run.
    pub fn min_threads(self) -> usize {
        match self {
            Mix::SingleWriter => 2,
            Mix::ReadOnly => 1,
        }
    }

    pub fn writers(self, threads: usize) -> usize {
        match self {
            Mix::SingleWriter => threads.min(1),
            Mix::ReadOnly => 0,
        }
    }

    pub fn readers(self, threads: usize) -> usize {
        threads - self.writers(threads)
    }

    pub fn name(self) -> &'static str {
        match self {
            Mix::SingleWriter => "single_writer",
            Mix::ReadOnly => "read_only",
        }
    }
}

impl Display for Mix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
