mod events;
mod options;

use std::io::BufRead;

pub use events::EventLog;
pub use options::EnclaveServerOptions;

use itertools::Itertools;

use crate::prelude::*;

/// Serves the Enclave Text Protocol: one command per line on stdin, and each response on
/// stdout terminated by `ok` (preceded by `err` and a message when the command failed).
pub struct ETPServer {
    game: Option<GameState>,
    events: EventLog,
    config: GameConfig,
}

impl ETPServer {
    /// Produces a new server that deals games with the given options.
    pub fn new(options: EnclaveServerOptions) -> ETPServer {
        ETPServer {
            game: None,
            events: EventLog::default(),
            config: options.game_config(),
        }
    }

    /// Runs until `quit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let cmdstr = line?;
            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");
            if cmd == "quit" {
                log::info!("quitting");
                break;
            }
            println!("{}", self.apply(cmd, args.get(1..).unwrap_or(&[])));
        }
        Ok(())
    }

    /// Runs a command and renders the full response, footer included.
    pub fn apply(&mut self, cmd: &str, args: &[&str]) -> String {
        let result = match cmd
        {
            | "" => Ok(String::new()),
            | "board" => self.board(),
            | "cell" => self.cell(args),
            | "flip" => self.flip(args),
            | "group" => self.group(args),
            | "info" => Ok(self.info()),
            | "market" => self.market(),
            | "newgame" => self.new_game(args),
            | "patterns" => self.patterns(),
            | "place" => self.place(args),
            | "players" => self.players(),
            | "preview" => self.preview(args),
            | "rotate" => self.rotate(args),
            | "select" => self.select(args),
            | "undo" => self.undo(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        let mut lines = self.events.drain();
        match result
        {
            Ok(body) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                if !body.is_empty() {
                    lines.insert(0, body);
                }
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                lines.insert(0, format!("err\n{err}"));
            },
        }
        lines.push("ok".into());
        lines.join("\n")
    }

    /// Starts a new game: `newgame [players] [size] [setup]`.
    fn new_game(&mut self, args: &[&str]) -> Result<String> {
        let mut config = self.config.clone();
        if let Some(players) = args.first() {
            config = config.with_players(players.parse().with_context(|| format!("invalid player count {players}"))?);
        }
        if let Some(size) = args.get(1) {
            config = config.with_grid_size(size.parse().with_context(|| format!("invalid grid size {size}"))?);
        }

        let mut game = if args.len() > 2 {
            let SetupString { repr: _, board, marketplace } = args[2..].join(" ").parse::<SetupString>()?;
            GameState::from_setup(config, board, marketplace)?
        } else {
            GameState::new(config)?
        };
        game.set_observer(Box::new(self.events.clone()));
        self.game = Some(game);
        self.market()
    }

    fn market(&mut self) -> Result<String> {
        let game = self.ensure_started()?;
        Ok(game.marketplace().iter().map(|p| p.notate()).join("\n"))
    }

    fn select(&mut self, args: &[&str]) -> Result<String> {
        let id = args.first().ok_or_else(|| anyhow!("no piece id provided"))?.parse::<PieceId>()?;
        let game = self.ensure_started()?;
        game.select_piece(id)?;
        Ok(game.selected_shape().map(|s| s.notate()).unwrap_or_default())
    }

    /// `rotate` turns a quarter; `rotate <n>` sets the number of quarter turns.
    fn rotate(&mut self, args: &[&str]) -> Result<String> {
        let turns = args.first().map(|n| n.parse::<u8>()).transpose()?;
        let game = self.ensure_started()?;
        match turns {
            Some(n) => game.set_rotation(n)?,
            None    => game.rotate()?,
        }
        Ok(game.selected_shape().map(|s| s.notate()).unwrap_or_default())
    }

    /// `flip` toggles; `flip <0|1>` sets.
    fn flip(&mut self, args: &[&str]) -> Result<String> {
        let flipped = match args.first() {
            Some(&"1") | Some(&"true")  => Some(true),
            Some(&"0") | Some(&"false") => Some(false),
            Some(other)                 => { return Err(anyhow!("expected 0 or 1 for flip, received {other}")); }
            None                        => None,
        };
        let game = self.ensure_started()?;
        match flipped {
            Some(f) => game.set_flip(f)?,
            None    => game.flip()?,
        }
        Ok(game.selected_shape().map(|s| s.notate()).unwrap_or_default())
    }

    fn preview(&mut self, args: &[&str]) -> Result<String> {
        let coord = self.parse_coord(args)?;
        let preview = self.ensure_started()?.preview(coord.row, coord.col)?;
        let verdict = if preview.legal { "legal" } else { "illegal" };
        Ok(format!("{verdict} {}", preview.cells.iter().map(|c| c.notate()).join(" ")))
    }

    fn place(&mut self, args: &[&str]) -> Result<String> {
        let coord = self.parse_coord(args)?;
        let outcome = self.ensure_started()?.attempt_placement(coord.row, coord.col)?;
        if !outcome.accepted {
            return Ok("rejected".into());
        }
        Ok(format!("placed {} +{}", outcome.placed.iter().map(|c| c.notate()).join(" "), outcome.score_delta))
    }

    fn undo(&mut self) -> Result<String> {
        let game = self.ensure_started()?;
        Ok(if game.undo() { String::new() } else { "nothing to undo".into() })
    }

    fn board(&mut self) -> Result<String> {
        Ok(self.ensure_started()?.board().pretty())
    }

    fn patterns(&mut self) -> Result<String> {
        Ok(self.ensure_started()?.board().pretty_patterns())
    }

    fn players(&mut self) -> Result<String> {
        let game = self.ensure_started()?;
        let current = game.current_player();
        let status = match game.winner() {
            Some(w) => format!("winner {w}"),
            None    => format!("to move {current}"),
        };
        let lines = game.players().iter().map(|p| p.notate()).join("\n");
        Ok(format!("{lines}\n{status}"))
    }

    fn cell(&mut self, args: &[&str]) -> Result<String> {
        let coord = self.parse_coord(args)?;
        let cell = self.ensure_started()?.cell(coord.row, coord.col)?;
        Ok(cell.map_or("empty".into(), |c| format!("{}{}{}", c.color.notate(), c.pattern.notate(), c.owner)))
    }

    fn group(&mut self, args: &[&str]) -> Result<String> {
        let coord = self.parse_coord(args)?;
        let Some(inspection) = self.ensure_started()?.group_at(coord.row, coord.col)? else {
            return Ok("empty".into());
        };
        Ok([inspection.color, inspection.pattern].iter().map(|g| {
            format!(
                "{} {} {} {}",
                g.attribute.notate(),
                g.cells.len(),
                if g.enclosed { "enclosed" } else { "open" },
                g.cells.iter().map(|c| c.notate()).join(" ")
            )
        }).join("\n"))
    }

    // accessors

    fn ensure_started(&mut self) -> Result<&mut GameState> {
        self.game.as_mut().ok_or_else(|| anyhow!("no game in progress"))
    }

    // basic printers

    /// The server's ID.
    fn info(&self) -> String {
        format!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    // parsers

    /// Reads a coordinate from either `row col` or `row,col`.
    fn parse_coord(&self, args: &[&str]) -> Result<Coord> {
        match args {
            [pair]          => pair.parse::<Coord>(),
            [row, col, ..]  => Ok(Coord::new(
                row.parse().with_context(|| format!("invalid row {row}"))?,
                col.parse().with_context(|| format!("invalid column {col}"))?,
            )),
            []              => Err(anyhow!("no coordinate provided")),
        }
    }
}
