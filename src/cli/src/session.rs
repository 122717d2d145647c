use crate::config::SessionConfig;
use hollow_cube::{Cube, CubeError, NotationError, Slice, format_sequence, parse_sequence};
use log::{debug, info};

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scramble(Option<usize>),
    Solve,
    Reset,
    History,
    Show,
    Exit,
    Turns(Vec<Slice>),
}

impl Command {
    /// Parse a REPL line. Anything that is not a keyword is read as a turn
    /// sequence.
    ///
    /// # Errors
    ///
    /// If the line is neither a keyword nor a valid turn sequence.
    pub fn parse(line: &str, size: usize) -> Result<Self, NotationError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Command::Show);
        };
        let keyword = first.to_ascii_lowercase();
        let command = match keyword.as_str() {
            "scramble" => {
                let count = words
                    .next()
                    .map(|argument| {
                        argument
                            .parse()
                            .map_err(|source| NotationError::InvalidArgument {
                                keyword: keyword.clone(),
                                argument: argument.to_owned(),
                                source,
                            })
                    })
                    .transpose()?;
                Command::Scramble(count)
            }
            "solve" => Command::Solve,
            "reset" => Command::Reset,
            "history" => Command::History,
            "show" => Command::Show,
            "exit" | "quit" => Command::Exit,
            _ => return Ok(Command::Turns(parse_sequence(line, size)?)),
        };

        if let Some(argument) = words.next() {
            return Err(NotationError::UnexpectedArgument {
                keyword,
                argument: argument.to_owned(),
            });
        }
        Ok(command)
    }
}

/// A cube together with the generator and settings used to drive it.
pub struct Session {
    cube: Cube,
    rng: fastrand::Rng,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, CubeError> {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        debug!(target: "session", "Starting session: {config:?}");
        Ok(Session {
            cube: Cube::new(config.size)?,
            rng,
            config,
        })
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn apply_text(&mut self, text: &str) -> Result<Vec<Slice>, NotationError> {
        let turns = parse_sequence(text, self.cube.size())?;
        self.apply_turns(&turns)
            .map_err(|source| NotationError::Cube {
                token: text.trim().to_owned(),
                source,
            })?;
        Ok(turns)
    }

    fn apply_turns(&mut self, turns: &[Slice]) -> Result<(), CubeError> {
        self.cube.apply_all(turns)?;
        info!(target: "session", "Applied {}", format_sequence(turns));
        Ok(())
    }

    pub fn scramble(&mut self, count: Option<usize>) -> Vec<Slice> {
        let count = count.unwrap_or(self.config.scramble_length);
        self.cube.scramble_with(&mut self.rng, count)
    }

    pub fn solve(&mut self) -> Vec<Slice> {
        self.cube.solve()
    }

    /// Start over with a solved cube. The generator keeps its state.
    pub fn reset(&mut self) -> Result<(), CubeError> {
        self.cube = Cube::new(self.config.size)?;
        info!(target: "session", "Reset cube");
        Ok(())
    }

    pub fn history(&self) -> String {
        format_sequence(self.cube.history())
    }

    /// Run one REPL command. Returns a line to print, if any.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, CubeError> {
        let output = match command {
            Command::Scramble(count) => Some(format_sequence(&self.scramble(count))),
            Command::Solve => Some(format_sequence(&self.solve())),
            Command::Reset => {
                self.reset()?;
                None
            }
            Command::History => Some(self.history()),
            Command::Turns(turns) => {
                self.apply_turns(&turns)?;
                None
            }
            Command::Show | Command::Exit => None,
        };
        Ok(output)
    }
}
