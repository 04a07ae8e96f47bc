use bytes::Bytes;

/// A single opaque command ready for transmission.
pub type Command = Bytes;

/// An ordered list of commands forming one device transaction.
///
/// Order is significant and must be preserved: trailing acknowledgment
/// frames finalize the preceding payload and are meaningless on their own.
/// The transport collaborator writes entries one at a time, waiting for
/// device feedback between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence {
    commands: Vec<Command>,
}

impl CommandSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command, preserving insertion order.
    pub fn push(&mut self, command: impl Into<Command>) {
        self.commands.push(command.into());
    }

    /// Number of commands in the sequence.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total wire size across all commands.
    pub fn total_len(&self) -> usize {
        self.commands.iter().map(Bytes::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }
}

impl IntoIterator for CommandSequence {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
