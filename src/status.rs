use std::fmt;
use std::process::ExitCode;

use colored::Colorize as _;
use sqlgen_attrs::{KnownAttributes, Problem};

pub enum Status {
    /// Every attribute name is known.
    ValidatedSuccessfully,

    /// The listed attribute names are not known.
    ProblemsFound {
        problems: Vec<Problem>,
        known: KnownAttributes,
    },

    /// Some other error occurred.
    Error(anyhow::Error),
}

impl Status {
    fn fmt(&self, f: &mut fmt::Formatter, use_color: bool) -> fmt::Result {
        // These all respect the NO_COLOR environment variable even if `use_color` is true.
        let maybe_green = |s: &str| if use_color { s.green() } else { s.into() };
        let maybe_yellow = |s: &str| if use_color { s.yellow() } else { s.into() };
        let maybe_red = |s: &str| if use_color { s.red() } else { s.into() };

        if let Self::ProblemsFound { problems, .. } = self {
            for problem in problems {
                let problem = format!("- {problem}\n");
                fmt::Display::fmt(&maybe_red(&problem), f)?;
            }
        }

        let message = match self {
            Self::Error(error) => format!("{} {:#}", &maybe_yellow("I/O error: "), error).into(),
            Self::ValidatedSuccessfully => maybe_green("Validated successfully"),
            Self::ProblemsFound { known, .. } => maybe_yellow(&format!(
                "The attributes listed above are not recognized. Known attributes: {known}"
            )),
        };
        fmt::Display::fmt(&message, f)
    }
}

impl From<anyhow::Error> for Status {
    fn from(err: anyhow::Error) -> Self {
        Self::Error(err)
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::ValidatedSuccessfully => Self::SUCCESS,
            Status::ProblemsFound { .. } => Self::from(1),
            Status::Error(..) => Self::from(2),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Self::fmt(self, f, /* use_color */ false)
    }
}

#[allow(clippy::module_name_repetitions)]
pub struct ColoredStatus(Status);

impl From<Status> for ColoredStatus {
    fn from(status: Status) -> Self {
        Self(status)
    }
}

impl fmt::Display for ColoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Status::fmt(&self.0, f, /* use_color */ true)
    }
}

impl From<ColoredStatus> for ExitCode {
    fn from(status: ColoredStatus) -> Self {
        status.0.into()
    }
}
