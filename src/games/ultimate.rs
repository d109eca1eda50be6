use std::fmt::{self, Debug};

use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome};

/// Rows, columns and diagonals of a 3x3 board.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Single 3x3 board. Also used for the master board,
/// where the cells are the winners of the sub boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubBoard {
    pub cells: [Option<Player>; 9],
    pub winner: Option<Player>,
}

impl SubBoard {
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Won or full. No more moves are allowed.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    fn set(&mut self, cell: usize, player: Player) {
        self.cells[cell] = Some(player);
        if self.winner.is_none() && self.has_line(player) {
            self.winner = Some(player);
        }
    }

    fn has_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&c| self.cells[c] == Some(player)))
    }
}

/// A move into `cell` of the sub board `board`. Both are indices in row major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UltimateMove {
    pub board: u8,
    pub cell: u8,
}

impl UltimateMove {
    pub fn new(board: usize, cell: usize) -> UltimateMove {
        assert!(board < 9 && cell < 9);
        UltimateMove {
            board: board as u8,
            cell: cell as u8,
        }
    }
}

/// Ultimate tic-tac-toe.
///
/// The cell of a move determines the sub board the opponent has to play in.
/// If that board is decided the opponent can choose any undecided board.
#[derive(Clone, PartialEq, Eq)]
pub struct UltimateBoard {
    pub boards: [SubBoard; 9],
    pub master: SubBoard,
    /// Sub board the next move has to be played in
    pub next: Option<usize>,
    pub player: Player,
}

impl Default for UltimateBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl UltimateBoard {
    pub fn new() -> UltimateBoard {
        UltimateBoard {
            boards: [SubBoard::default(); 9],
            master: SubBoard::default(),
            next: None,
            player: Player::X,
        }
    }

    /// Restricts the next move to the given sub board.
    pub fn with_next(mut self, next: usize) -> UltimateBoard {
        assert!(next < 9);
        self.next = Some(next);
        self
    }

    fn open_boards(&self) -> impl Iterator<Item = usize> + '_ {
        let forced = self.next.filter(|&b| !self.boards[b].is_decided());
        (0..9).filter(move |&b| match forced {
            Some(f) => b == f,
            None => !self.boards[b].is_decided(),
        })
    }
}

impl Board for UltimateBoard {
    type Move = UltimateMove;
    type Player = Player;

    fn legal_moves(&self) -> Vec<UltimateMove> {
        if self.master.winner.is_some() {
            return Vec::new();
        }
        self.open_boards()
            .flat_map(|b| {
                let board = &self.boards[b];
                (0..9)
                    .filter(move |&c| board.cells[c].is_none())
                    .map(move |c| UltimateMove::new(b, c))
            })
            .collect()
    }

    fn apply(&mut self, mv: &UltimateMove) {
        let (b, c) = (mv.board as usize, mv.cell as usize);
        assert!(self.boards[b].cells[c].is_none(), "cell is taken");

        self.boards[b].set(c, self.player);
        if let Some(winner) = self.boards[b].winner {
            if self.master.cells[b].is_none() {
                self.master.set(b, winner);
            }
        }
        self.next = Some(c);
        self.player = self.player.other();
    }

    fn outcome(&self) -> Outcome<Player> {
        if let Some(winner) = self.master.winner {
            Outcome::Winner(winner)
        } else if self.boards.iter().all(SubBoard::is_decided) {
            Outcome::Draw
        } else {
            Outcome::None
        }
    }

    fn current_player(&self) -> Player {
        self.player
    }
}

impl UltimateBoard {
    /// Parses textual human readable board representation used in test.
    ///
    /// Nine rows of nine cells (`x`, `o` or `.`), other characters are ignored.
    /// X moves first, so the player to move follows from the number of marks.
    /// The next move is unrestricted.
    pub fn parse(txt: &str) -> Option<UltimateBoard> {
        let rows = txt
            .lines()
            .map(|l| {
                l.chars()
                    .filter_map(|c| match c {
                        'x' | 'X' => Some(Some(Player::X)),
                        'o' | 'O' => Some(Some(Player::O)),
                        '.' => Some(None),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|r| !r.is_empty())
            .collect::<Vec<_>>();

        if rows.len() != 9 || rows.iter().any(|r| r.len() != 9) {
            return None;
        }

        let mut game = UltimateBoard::new();
        let mut marks = [0usize; 2];
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let b = (y / 3) * 3 + x / 3;
                let c = (y % 3) * 3 + x % 3;
                game.boards[b].cells[c] = *cell;
                match cell {
                    Some(Player::X) => marks[0] += 1,
                    Some(Player::O) => marks[1] += 1,
                    None => {}
                }
            }
        }

        for b in 0..9 {
            let board = &mut game.boards[b];
            board.winner = [Player::X, Player::O]
                .into_iter()
                .find(|&p| board.has_line(p));
            if let Some(winner) = board.winner {
                game.master.cells[b] = Some(winner);
            }
        }
        game.master.winner = [Player::X, Player::O]
            .into_iter()
            .find(|&p| game.master.has_line(p));

        game.player = if marks[0] > marks[1] {
            Player::O
        } else {
            Player::X
        };
        Some(game)
    }
}

impl Debug for UltimateBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn style(player: Player) -> Style {
            match player {
                Player::X => Style::new().green(),
                Player::O => Style::new().yellow(),
            }
        }

        writeln!(f, "UltimateBoard {{")?;
        for y in 0..9 {
            if y > 0 && y % 3 == 0 {
                writeln!(f, "  ------+-------+------")?;
            }
            write!(f, "  ")?;
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, "| ")?;
                }
                let b = (y / 3) * 3 + x / 3;
                let c = (y % 3) * 3 + x % 3;
                let board = &self.boards[b];
                match board.cells[c] {
                    Some(p) if board.winner.is_some() => {
                        let s = if p == Player::X { "x" } else { "o" };
                        write!(f, "{} ", s.style(style(p)).on_bright_black())?
                    }
                    Some(p) => {
                        let s = if p == Player::X { "x" } else { "o" };
                        write!(f, "{} ", s.style(style(p)))?
                    }
                    None if self.next == Some(b) => write!(f, "{} ", "_".bright_black())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  Next: {:?} {:?}", self.player, self.next)?;
        writeln!(f, "  Outcome: {:?}", self.outcome())?;
        writeln!(f, "}}")
    }
}
