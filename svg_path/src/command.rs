use super::error::*;
use super::tokenizer::*;

use smallvec::*;

///
/// The commands that can appear in a path
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PathCommandKind {
    /// 'M': start a new subpath at a point
    MoveTo,

    /// 'L': straight line to a point
    LineTo,

    /// 'H': horizontal line to an x coordinate
    HorizontalLineTo,

    /// 'V': vertical line to a y coordinate
    VerticalLineTo,

    /// 'C': cubic bezier curve with two control points
    CubicCurveTo,

    /// 'S': cubic bezier curve whose first control point mirrors the last one of the previous curve
    SmoothCubicCurveTo,

    /// 'Q': quadratic bezier curve
    QuadraticCurveTo,

    /// 'T': quadratic bezier curve whose control point mirrors the last one of the previous curve
    SmoothQuadraticCurveTo,

    /// 'A': section of an ellipse
    EllipticalArcTo,

    /// 'Z': line back to the start of the subpath
    ClosePath,
}

///
/// Whether the coordinates of a command are absolute or relative to the current point
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CoordinateMode {
    /// Upper-case command: coordinates are positions
    Absolute,

    /// Lower-case command: coordinates are offsets from the current point
    Relative,
}

impl PathCommandKind {
    ///
    /// Decodes a command letter, returning the kind of command and the coordinate mode
    ///
    pub fn from_letter(letter: char) -> Option<(PathCommandKind, CoordinateMode)> {
        use PathCommandKind::*;

        let kind = match letter.to_ascii_uppercase() {
            'M' => MoveTo,
            'L' => LineTo,
            'H' => HorizontalLineTo,
            'V' => VerticalLineTo,
            'C' => CubicCurveTo,
            'S' => SmoothCubicCurveTo,
            'Q' => QuadraticCurveTo,
            'T' => SmoothQuadraticCurveTo,
            'A' => EllipticalArcTo,
            'Z' => ClosePath,
            _   => { return None; }
        };

        let mode = if letter.is_ascii_lowercase() { CoordinateMode::Relative } else { CoordinateMode::Absolute };

        Some((kind, mode))
    }

    ///
    /// The upper-case letter for this command
    ///
    pub fn letter(&self) -> char {
        use PathCommandKind::*;

        match self {
            MoveTo                  => 'M',
            LineTo                  => 'L',
            HorizontalLineTo        => 'H',
            VerticalLineTo          => 'V',
            CubicCurveTo            => 'C',
            SmoothCubicCurveTo      => 'S',
            QuadraticCurveTo        => 'Q',
            SmoothQuadraticCurveTo  => 'T',
            EllipticalArcTo         => 'A',
            ClosePath               => 'Z',
        }
    }

    ///
    /// The number of parameters this command reads
    ///
    pub fn parameter_count(&self) -> usize {
        use PathCommandKind::*;

        match self {
            EllipticalArcTo                                             => 7,
            CubicCurveTo                                                => 6,
            SmoothCubicCurveTo | QuadraticCurveTo                       => 4,
            MoveTo | LineTo | SmoothQuadraticCurveTo                    => 2,
            HorizontalLineTo | VerticalLineTo                           => 1,
            ClosePath                                                   => 0,
        }
    }
}

///
/// A single command from a path, with its parameters
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PathCommand {
    pub kind:       PathCommandKind,
    pub mode:       CoordinateMode,
    pub parameters: SmallVec<[f64; 7]>,
}

impl PathCommand {
    ///
    /// Creates a new path command
    ///
    pub fn new(kind: PathCommandKind, mode: CoordinateMode, parameters: impl IntoIterator<Item=f64>) -> PathCommand {
        PathCommand {
            kind:       kind,
            mode:       mode,
            parameters: parameters.into_iter().collect(),
        }
    }

    ///
    /// An absolute 'M' command
    ///
    pub fn move_to(x: f64, y: f64) -> PathCommand {
        PathCommand::new(PathCommandKind::MoveTo, CoordinateMode::Absolute, [x, y])
    }

    ///
    /// An absolute 'L' command
    ///
    pub fn line_to(x: f64, y: f64) -> PathCommand {
        PathCommand::new(PathCommandKind::LineTo, CoordinateMode::Absolute, [x, y])
    }

    ///
    /// An absolute 'A' command
    ///
    pub fn arc_to(radius_x: f64, radius_y: f64, x_axis_rotation: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> PathCommand {
        let large_arc   = if large_arc { 1.0 } else { 0.0 };
        let sweep       = if sweep { 1.0 } else { 0.0 };

        PathCommand::new(PathCommandKind::EllipticalArcTo, CoordinateMode::Absolute, [radius_x, radius_y, x_axis_rotation, large_arc, sweep, x, y])
    }

    ///
    /// A 'Z' command
    ///
    pub fn close_path() -> PathCommand {
        PathCommand::new(PathCommandKind::ClosePath, CoordinateMode::Absolute, [])
    }

    ///
    /// Checks that this command has exactly the number of parameters its kind reads
    ///
    /// Commands read by `parse_path` always pass this check, but commands can also be built directly
    ///
    pub fn check_parameters(&self) -> Result<(), PathError> {
        let expected    = self.kind.parameter_count();
        let found       = self.parameters.len();

        if found < expected {
            Err(PathError::MissingParameters { command: self.letter(), expected, found })
        } else if found > expected {
            Err(PathError::TooManyParameters { command: self.letter(), expected, found })
        } else {
            Ok(())
        }
    }

    ///
    /// The letter that represents this command in a path string
    ///
    pub fn letter(&self) -> char {
        match self.mode {
            CoordinateMode::Absolute => self.kind.letter(),
            CoordinateMode::Relative => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

///
/// Reads a number token
///
#[inline]
fn parse_number(number: &str) -> Result<f64, PathError> {
    number.parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| PathError::BadNumber(number.to_string()))
}

///
/// Parses a sequence of tokens into a list of path commands
///
/// A number that follows a complete command repeats that command (so `L 1 2 3 4` is two line commands). An error
/// is returned if the path starts with anything other than a move command, contains a letter that's not a command,
/// or ends before the last command has all of its parameters.
///
pub fn parse_path_tokens<'a>(tokens: impl IntoIterator<Item=PathToken<'a>>) -> Result<Vec<PathCommand>, PathError> {
    let mut tokens      = tokens.into_iter();
    let mut commands    = vec![];
    let mut active      = None;

    while let Some(token) = tokens.next() {
        let mut parameters = smallvec![];

        // The token is either a new command or the first parameter of a repeat of the active command
        let (kind, mode, letter) = match token {
            PathToken::Command(letter) => {
                let (kind, mode) = PathCommandKind::from_letter(letter).ok_or(PathError::UnknownCommand(letter))?;

                // Every path has to start by setting the current point
                if active.is_none() && kind != PathCommandKind::MoveTo {
                    return Err(PathError::MissingMoveTo(letter));
                }

                active = Some((kind, mode, letter));

                (kind, mode, letter)
            }

            PathToken::Number(number) => {
                let (kind, mode, letter) = active.ok_or(PathError::NoActiveCommand)?;

                // 'Z' has no parameters, so there's no command for this number to belong to
                if kind.parameter_count() == 0 {
                    return Err(PathError::NoActiveCommand);
                }

                parameters.push(parse_number(number)?);
                (kind, mode, letter)
            }
        };

        // Read the rest of the parameters for this command
        let expected = kind.parameter_count();
        while parameters.len() < expected {
            match tokens.next() {
                Some(PathToken::Number(number)) => parameters.push(parse_number(number)?),
                _                               => { return Err(PathError::MissingParameters { command: letter, expected: expected, found: parameters.len() }); }
            }
        }

        commands.push(PathCommand { kind, mode, parameters });
    }

    Ok(commands)
}

///
/// Parses the contents of a path `d` attribute into a list of commands
///
#[inline]
pub fn parse_path(path: &str) -> Result<Vec<PathCommand>, PathError> {
    parse_path_tokens(tokenize_path(path))
}
