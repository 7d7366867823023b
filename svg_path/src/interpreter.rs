use super::arc::*;
use super::point::*;
use super::error::*;
use super::command::*;
use super::primitive::*;

///
/// The state of a path interpreter between commands
///
/// All points are in the coordinates of the path, before it's mapped onto the surface
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct InterpreterState {
    /// The end point of the last command
    pub current_point: Point2D,

    /// The point set by the last 'M' command, which 'Z' returns to
    pub subpath_start: Point2D,

    /// The second control point of the preceding 'C' or 'S' command
    pub last_cubic_control: Option<Point2D>,

    /// The control point of the preceding 'Q' or 'T' command
    pub last_quadratic_control: Option<Point2D>,
}

///
/// Converts path commands into primitives, tracking the current point and the implicit control points of the smooth curve commands
///
pub struct PathInterpreter {
    state:      InterpreterState,
    transform:  PathTransform,
}

impl PathInterpreter {
    ///
    /// Creates a new interpreter that maps path coordinates to surface coordinates with the specified transform
    ///
    pub fn new(transform: PathTransform) -> PathInterpreter {
        PathInterpreter {
            state:      InterpreterState::default(),
            transform:  transform,
        }
    }

    ///
    /// The current state of this interpreter
    ///
    #[inline]
    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    ///
    /// The transform from path coordinates to surface coordinates
    ///
    #[inline]
    pub fn transform(&self) -> &PathTransform {
        &self.transform
    }

    ///
    /// Sends a primitive (in path coordinates) to a target
    ///
    #[inline]
    fn emit(&self, primitive: PathPrimitive, target: &mut impl PrimitiveTarget) {
        target.draw_primitive(&primitive.transform(&self.transform));
    }

    ///
    /// Reads the parameters of a command as absolute coordinates
    ///
    /// Relative coordinates are offsets from the current point: parameters are read in (x, y) pairs except for
    /// the single coordinates of 'H' and 'V' and the radii, rotation and flags of 'A' which are not positions
    ///
    fn absolute_parameters(&self, command: &PathCommand) -> Vec<f64> {
        let mut parameters  = command.parameters.to_vec();
        let Point2D(cx, cy) = self.state.current_point;

        if command.mode == CoordinateMode::Relative {
            match command.kind {
                PathCommandKind::HorizontalLineTo   => { parameters[0] += cx; }
                PathCommandKind::VerticalLineTo     => { parameters[0] += cy; }
                PathCommandKind::EllipticalArcTo    => { parameters[5] += cx; parameters[6] += cy; }

                _ => {
                    for (idx, param) in parameters.iter_mut().enumerate() {
                        *param += if idx % 2 == 0 { cx } else { cy };
                    }
                }
            }
        }

        parameters
    }

    ///
    /// Interprets a single command, sending any primitives it generates to a target
    ///
    /// Commands with the wrong number of parameters are rejected without changing the state of the interpreter.
    ///
    pub fn interpret_command(&mut self, command: &PathCommand, target: &mut impl PrimitiveTarget) -> Result<(), PathError> {
        use PathCommandKind::*;

        command.check_parameters()?;

        let p       = self.absolute_parameters(command);
        let current = self.state.current_point;

        log::trace!("{} {:?} from {:?}", command.letter(), p, current);

        match command.kind {
            MoveTo => {
                self.state.current_point = Point2D(p[0], p[1]);
                self.state.subpath_start = Point2D(p[0], p[1]);
            }

            ClosePath => {
                self.emit(PathPrimitive::Line(current, self.state.subpath_start), target);
                self.state.current_point = self.state.subpath_start;
            }

            LineTo => {
                let end = Point2D(p[0], p[1]);

                self.emit(PathPrimitive::Line(current, end), target);
                self.state.current_point = end;
            }

            HorizontalLineTo => {
                let end = Point2D(p[0], current.1);

                self.emit(PathPrimitive::Line(current, end), target);
                self.state.current_point = end;
            }

            VerticalLineTo => {
                let end = Point2D(current.0, p[0]);

                self.emit(PathPrimitive::Line(current, end), target);
                self.state.current_point = end;
            }

            CubicCurveTo => {
                let control1    = Point2D(p[0], p[1]);
                let control2    = Point2D(p[2], p[3]);
                let end         = Point2D(p[4], p[5]);

                self.emit(PathPrimitive::Cubic(current, control1, control2, end), target);
                self.state.last_cubic_control   = Some(control2);
                self.state.current_point        = end;
            }

            SmoothCubicCurveTo => {
                let control2    = Point2D(p[0], p[1]);
                let end         = Point2D(p[2], p[3]);
                let control1    = match self.state.last_cubic_control {
                    Some(last_control)  => current.reflect(last_control),
                    None                => control2,
                };

                self.emit(PathPrimitive::Cubic(current, control1, control2, end), target);
                self.state.last_cubic_control   = Some(control2);
                self.state.current_point        = end;
            }

            QuadraticCurveTo => {
                let control     = Point2D(p[0], p[1]);
                let end         = Point2D(p[2], p[3]);

                self.emit(PathPrimitive::Quadratic(current, control, end), target);
                self.state.last_quadratic_control   = Some(control);
                self.state.current_point            = end;
            }

            SmoothQuadraticCurveTo => {
                let end         = Point2D(p[0], p[1]);
                let control     = match self.state.last_quadratic_control {
                    Some(last_control)  => current.reflect(last_control),
                    None                => end,
                };

                self.emit(PathPrimitive::Quadratic(current, control, end), target);
                self.state.last_quadratic_control   = Some(control);
                self.state.current_point            = end;
            }

            EllipticalArcTo => {
                let (radius_x, radius_y)    = (p[0], p[1]);
                let x_axis_rotation         = p[2];
                let large_arc               = p[3] != 0.0;
                let sweep                   = p[4] != 0.0;
                let end                     = Point2D(p[5], p[6]);

                if radius_x == 0.0 || radius_y == 0.0 {
                    // An arc with no radius is a straight line
                    self.emit(PathPrimitive::Line(current, end), target);
                } else {
                    let mut segment_start = current;

                    for segment in arc_to_bezier(current, end, radius_x, radius_y, x_axis_rotation, large_arc, sweep) {
                        self.emit(PathPrimitive::Cubic(segment_start, segment.control1, segment.control2, segment.end), target);
                        segment_start = segment.end;
                    }
                }

                self.state.current_point = end;
            }
        }

        // The smooth curve commands can only reflect the control point of the command immediately before them
        if command.kind != CubicCurveTo && command.kind != SmoothCubicCurveTo {
            self.state.last_cubic_control = None;
        }

        if command.kind != QuadraticCurveTo && command.kind != SmoothQuadraticCurveTo {
            self.state.last_quadratic_control = None;
        }

        Ok(())
    }

    ///
    /// Interprets a list of commands in order
    ///
    /// Every command is checked before any are interpreted, so nothing is sent to the target if one is malformed.
    ///
    pub fn interpret<'a>(&mut self, commands: impl IntoIterator<Item=&'a PathCommand>, target: &mut impl PrimitiveTarget) -> Result<(), PathError> {
        let commands = commands.into_iter().collect::<Vec<_>>();

        for command in commands.iter() {
            command.check_parameters()?;
        }

        for command in commands {
            self.interpret_command(command, target)?;
        }

        Ok(())
    }
}

///
/// Parses a path string and sends the primitives it describes to a target
///
/// The path is parsed completely before anything is drawn, so nothing is sent to the target if the path contains
/// an error. Returns the number of commands that were interpreted.
///
pub fn interpret_path(path: &str, transform: PathTransform, target: &mut impl PrimitiveTarget) -> Result<usize, PathError> {
    let commands            = parse_path(path)?;
    let mut interpreter     = PathInterpreter::new(transform);

    interpreter.interpret(&commands, target)?;

    Ok(commands.len())
}
