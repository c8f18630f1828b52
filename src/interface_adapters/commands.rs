use crate::domain::{Coordinate, DEFAULT_RADIUS, ImportSink, SphereQuery, SystemsProvider};
use crate::use_cases::SphereExportUseCase;
use regex::Regex;
use std::fmt;
use std::io::{self, Write};
use std::sync::LazyLock;

// `sphere <x> <y> <z> [<radius>]`; the first token is matched by dispatch.
static SPHERE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\w+\s+(?<x>[-+]?\d+)\s+(?<y>[-+]?\d+)\s+(?<z>[-+]?\d+)(?:\s+(?<radius>\d+))?\s*$")
        .expect("sphere pattern is a valid regex")
});

const INPUT_ERROR_MESSAGE: &str =
    "There is an error in the input. Please try 'help' command for more information";

/// Commands listed by `help`, in display order.
pub const HELP_LISTING: [CommandKind; 2] = [CommandKind::Exit, CommandKind::Help];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Sphere,
    Help,
    Exit,
    Unknown,
}

impl CommandKind {
    pub fn short_help(self) -> &'static str {
        match self {
            CommandKind::Sphere => concat!(
                "sphere <x> <y> <z> [<radius>] - get all stars in the specified sphere.\n",
                "* <x>, <y>, <z> - integers - Coordinates of the sphere center.\n",
                "* <radius> - integer in range [0 to 200], 100 by default - Radius of the sphere."
            ),
            CommandKind::Help => "help - show this help",
            CommandKind::Exit => "exit - close application",
            CommandKind::Unknown => "",
        }
    }
}

/// A `sphere` line that does not follow `sphere <x> <y> <z> [<radius>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub line: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed sphere command: {:?}", self.line)
    }
}

impl std::error::Error for InputError {}

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sphere(Result<SphereQuery, InputError>),
    Help,
    Exit,
    /// Carries the unrecognised first token (empty for a blank line).
    Unknown(String),
}

/// Maps a console line to a command by its first whitespace-delimited token.
pub fn dispatch(line: &str) -> Command {
    let name = line.split_whitespace().next().unwrap_or_default();
    match name {
        "sphere" => Command::Sphere(parse_sphere(line)),
        "help" => Command::Help,
        "exit" => Command::Exit,
        other => Command::Unknown(other.to_string()),
    }
}

fn parse_sphere(line: &str) -> Result<SphereQuery, InputError> {
    let invalid = || InputError {
        line: line.to_string(),
    };

    // Nothing is parsed unless the whole line matched.
    let caps = SPHERE_PATTERN.captures(line).ok_or_else(invalid)?;
    let axis = |name: &str| caps[name].parse::<i64>().map_err(|_| invalid());

    let center = Coordinate::new(axis("x")?, axis("y")?, axis("z")?);
    let radius = match caps.name("radius") {
        Some(radius) => radius.as_str().parse::<u32>().map_err(|_| invalid())?,
        None => DEFAULT_RADIUS,
    };

    Ok(SphereQuery::new(center, radius))
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Sphere(_) => CommandKind::Sphere,
            Command::Help => CommandKind::Help,
            Command::Exit => CommandKind::Exit,
            Command::Unknown(_) => CommandKind::Unknown,
        }
    }

    /// Runs the command against the console `out`. Returns true when the session should end.
    pub fn execute<P, S, W>(
        &self,
        sphere: &SphereExportUseCase<P, S>,
        out: &mut W,
    ) -> io::Result<bool>
    where
        P: SystemsProvider,
        S: ImportSink,
        W: Write + ?Sized,
    {
        match self {
            Command::Sphere(Ok(query)) => {
                run_sphere(query, sphere, out)?;
                Ok(false)
            }
            Command::Sphere(Err(err)) => {
                tracing::debug!(error = %err, "rejected sphere input.");
                writeln!(out, "{INPUT_ERROR_MESSAGE}")?;
                Ok(false)
            }
            Command::Help => {
                for kind in HELP_LISTING {
                    writeln!(out, "{}", kind.short_help())?;
                }
                Ok(false)
            }
            Command::Exit => Ok(true),
            Command::Unknown(name) => {
                writeln!(out, "Unknown command {name}. Please use 'help'.")?;
                Ok(false)
            }
        }
    }
}

fn run_sphere<P, S, W>(
    query: &SphereQuery,
    sphere: &SphereExportUseCase<P, S>,
    out: &mut W,
) -> io::Result<()>
where
    P: SystemsProvider,
    S: ImportSink,
    W: Write + ?Sized,
{
    write!(out, "Sphere: Getting stars from EDSM... ")?;
    out.flush()?;
    let names = match sphere.fetch(query) {
        Ok(names) => names,
        Err(err) => {
            writeln!(out, "failed.")?;
            writeln!(out, "Sphere: {err}")?;
            return Ok(());
        }
    };
    writeln!(out, "Sphere: Done!")?;

    write!(out, "Sphere: Creating file for import... ")?;
    out.flush()?;
    if let Err(err) = sphere.export(&names) {
        writeln!(out, "failed.")?;
        writeln!(out, "Sphere: {err}")?;
        return Ok(());
    }
    writeln!(out, "Done!")?;
    Ok(())
}
