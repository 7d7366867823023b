use thiserror::Error;

///
/// Errors that stop a single path from being interpreted
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PathError {
    /// A number appeared with no command to read it (at the start of the path, or after 'Z')
    #[error("found a parameter with no command to read it")]
    NoActiveCommand,

    /// The first command in a path was not 'M' or 'm'
    #[error("path data must start with a move command, not '{0}'")]
    MissingMoveTo(char),

    /// A letter that is not one of the supported path commands
    #[error("unknown path command '{0}'")]
    UnknownCommand(char),

    /// The path data ended before all the parameters of a command could be read
    #[error("command '{command}' needs {expected} parameters but only {found} were supplied")]
    MissingParameters { command: char, expected: usize, found: usize },

    /// A command was built with more parameters than it reads
    #[error("command '{command}' needs {expected} parameters but {found} were supplied")]
    TooManyParameters { command: char, expected: usize, found: usize },

    /// A parameter could not be read as a number
    #[error("'{0}' is not a valid number")]
    BadNumber(String),
}

///
/// Errors that occur while reading the attributes of a document element
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AttributeError {
    /// The attribute was not set on the element or any of its ancestors
    #[error("no attribute '{attribute}' on the element or its parents")]
    Missing { attribute: String },

    /// The attribute was set, but to something that isn't a number
    #[error("attribute '{attribute}' has the non-numeric value '{value}'")]
    BadNumber { attribute: String, value: String },

    /// The viewBox did not contain four numbers
    #[error("'{0}' is not a valid viewBox")]
    BadViewBox(String),

    /// A colour that is neither a hex value nor a known colour name
    #[error("unknown colour '{0}'")]
    UnknownColor(String),
}
