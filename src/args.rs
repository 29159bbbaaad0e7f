use crate::config::{Config, ConfigError};
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

/// What the program has been asked to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    Run(Arguments),
    Help,
    Version,
}

impl Mode {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("cols") => args.cols = Some(parser.value()?.parse()?),
                Arg::Long("rows") => args.rows = Some(parser.value()?.parse()?),
                Arg::Long("wrap") => args.wrap = true,
                Arg::Long("no-eat-self") => args.no_eat_self = true,
                Arg::Long("no-grace") => args.no_grace = true,
                Arg::Long("speed") => args.speed = Some(parser.value()?.parse()?),
                Arg::Long("growth") => args.growth = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("record") => args.record = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

/// Command-line settings.  Everything other than `config` and `record`
/// overrides the corresponding value from the configuration file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) cols: Option<u16>,
    pub(crate) rows: Option<u16>,
    pub(crate) wrap: bool,
    pub(crate) no_eat_self: bool,
    pub(crate) no_grace: bool,
    pub(crate) speed: Option<u64>,
    pub(crate) growth: Option<usize>,
    pub(crate) log_file: Option<PathBuf>,

    /// File to write a JSON-lines record of every game event to
    pub(crate) record: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration file (the one given on the command line or else
    /// the default, which may be absent) and apply the command-line overrides
    /// to it
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        let mut cfg = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => Config::load(&Config::default_path()?, true)?,
        };
        self.apply(&mut cfg);
        Ok(cfg)
    }

    fn apply(&self, cfg: &mut Config) {
        if let Some(cols) = self.cols {
            cfg.grid.cols = cols;
        }
        if let Some(rows) = self.rows {
            cfg.grid.rows = rows;
        }
        if self.wrap {
            cfg.options.boxed = false;
        }
        if self.no_eat_self {
            cfg.options.eat_self = false;
        }
        if self.no_grace {
            cfg.options.extra_frame = false;
        }
        if let Some(speed) = self.speed {
            cfg.options.speed = speed;
        }
        if let Some(growth) = self.growth {
            cfg.options.growth = growth;
        }
        if let Some(ref path) = self.log_file {
            cfg.logging.file = Some(path.clone());
        }
    }
}

pub(crate) const USAGE: &str = concat!(
    "Usage: snakefeed [<options>]\n",
    "\n",
    "Play snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>  Read configuration from the given file\n",
    "      --cols <N>       Width of the grid\n",
    "      --rows <N>       Height of the grid\n",
    "      --wrap           Let the snake wrap around the edges of the grid\n",
    "      --no-eat-self    Let the snake pass through its own body\n",
    "      --no-grace       Lose immediately on a fatal move\n",
    "      --speed <MS>     Milliseconds between ticks\n",
    "      --growth <N>     Cells the snake grows by per apple\n",
    "      --log-file <FILE>\n",
    "                       Append log messages to the given file\n",
    "      --record <FILE>  Write every game event to the given file as JSON lines\n",
    "  -h, --help           Display this help message and exit\n",
    "  -V, --version        Show the program version and exit\n",
);
