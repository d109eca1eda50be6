use serde::{Deserialize, Serialize};

use super::ultimate::{Player, SubBoard, UltimateBoard, CENTER, CORNERS, LINES};
use crate::search::{Heuristic, LOSS, WIN};

/// Scores of a single line of three cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineWeights {
    pub three: f64,
    pub two: f64,
    pub one: f64,
    /// Penalty for two opponent marks without own mark
    pub block_two: f64,
    pub block_one: f64,
}

impl Default for LineWeights {
    fn default() -> Self {
        Self {
            three: 100.0,
            two: 10.0,
            one: 1.0,
            block_two: 15.0,
            block_one: 1.0,
        }
    }
}

impl LineWeights {
    /// Line control of a 3x3 board.
    pub fn score(&self, board: &SubBoard, player: Player) -> f64 {
        let opponent = player.other();
        let mut score = 0.0;
        for line in &LINES {
            let own = line.iter().filter(|&&c| board.cells[c] == Some(player)).count();
            let other = line.iter().filter(|&&c| board.cells[c] == Some(opponent)).count();
            if other == 0 {
                score += match own {
                    3 => self.three,
                    2 => self.two,
                    1 => self.one,
                    _ => 0.0,
                };
            }
            if own == 0 {
                score -= match other {
                    3 => self.three,
                    2 => self.block_two,
                    1 => self.block_one,
                    _ => 0.0,
                };
            }
        }
        score
    }

    fn max_magnitude(&self) -> f64 {
        let line = [self.three, self.two, self.one, self.block_two, self.block_one]
            .into_iter()
            .map(f64::abs)
            .fold(0.0, f64::max);
        LINES.len() as f64 * line
    }
}

/// Weighted line control on the master board and on every open sub board.
///
/// Decided games are scored `WIN`/`LOSS`, undecided ones stay below
/// [`UltimateHeuristic::max_magnitude`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UltimateHeuristic {
    pub lines: LineWeights,
    /// Multiplier of the master board lines
    pub master: f64,
    /// Multipliers of open sub boards by position
    pub center: f64,
    pub corner: f64,
    pub edge: f64,
    /// Bonus (or penalty) for decided sub boards by position
    pub won_center: f64,
    pub won_corner: f64,
    pub won_edge: f64,
}

impl Default for UltimateHeuristic {
    fn default() -> Self {
        Self {
            lines: LineWeights::default(),
            master: 150.0,
            center: 20.0,
            corner: 15.0,
            edge: 10.0,
            won_center: 150.0,
            won_corner: 100.0,
            won_edge: 80.0,
        }
    }
}

impl UltimateHeuristic {
    fn multiplier(&self, board: usize) -> f64 {
        if board == CENTER {
            self.center
        } else if CORNERS.contains(&board) {
            self.corner
        } else {
            self.edge
        }
    }

    fn bonus(&self, board: usize) -> f64 {
        if board == CENTER {
            self.won_center
        } else if CORNERS.contains(&board) {
            self.won_corner
        } else {
            self.won_edge
        }
    }

    /// Upper bound of the absolute value of any non terminal evaluation.
    pub fn max_magnitude(&self) -> f64 {
        let lines = self.lines.max_magnitude();
        let sub_boards = (0..9)
            .map(|b| (lines * self.multiplier(b).abs()).max(self.bonus(b).abs()))
            .sum::<f64>();
        lines * self.master.abs() + sub_boards
    }
}

impl Heuristic<UltimateBoard> for UltimateHeuristic {
    fn eval(&self, game: &UltimateBoard, player: Player) -> f64 {
        match game.master.winner {
            Some(winner) if winner == player => return WIN,
            Some(_) => return LOSS,
            None => {}
        }

        let mut score = self.lines.score(&game.master, player) * self.master;

        for (b, board) in game.boards.iter().enumerate() {
            match board.winner {
                None => score += self.lines.score(board, player) * self.multiplier(b),
                Some(winner) if winner == player => score += self.bonus(b),
                Some(_) => score -= self.bonus(b),
            }
        }
        score
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Board, Outcome};
    use crate::games::UltimateMove;

    fn scenario() -> UltimateBoard {
        UltimateBoard::parse(
            r#"
            x x x | x x x | x x .
            . . . | . . . | . . .
            . . . | . . . | . . .
            ------+-------+------
            . . . | o o o | . . .
            . . . | . . . | . . .
            o o o | . . . | . . .
            ------+-------+------
            . . . | . . . | . . .
            . . . | . . . | . x .
            o o o | . . . | . . ."#,
        )
        .unwrap()
        .with_next(2)
    }

    #[test]
    fn bounded_by_terminal_scores() {
        let heuristic = UltimateHeuristic::default();
        assert!(heuristic.max_magnitude() < WIN);
        assert!(-heuristic.max_magnitude() > LOSS);
    }

    #[test]
    fn empty_board_is_neutral() {
        let heuristic = UltimateHeuristic::default();
        let game = UltimateBoard::new();
        assert_eq!(heuristic.eval(&game, Player::X), 0.0);
        assert_eq!(heuristic.eval(&game, Player::O), 0.0);
    }

    #[test]
    fn decided_boards() {
        let heuristic = UltimateHeuristic::default();
        let game = scenario();
        // O leads on the master board
        let x = heuristic.eval(&game, Player::X);
        let o = heuristic.eval(&game, Player::O);
        assert!(x < 0.0 && o > 0.0);
    }

    #[test]
    fn line_scores() {
        let weights = LineWeights::default();
        let mut board = SubBoard::default();
        board.cells[0] = Some(Player::X);
        board.cells[1] = Some(Player::X);
        // row 0: two, column 0/1 and diagonal: one each
        assert_eq!(weights.score(&board, Player::X), 13.0);
        assert_eq!(weights.score(&board, Player::O), -18.0);
    }

    #[test]
    fn completing_move() {
        let heuristic = UltimateHeuristic::default();
        let game = scenario();
        assert_eq!(game.current_player(), Player::X);

        // master: +10 (top row) -15 (middle row) -1 (bottom row) -15 (diagonal)
        // sub boards: +100 +80 -80 -150 -100 +13*15 +4*15
        let before = heuristic.eval(&game, Player::X);
        assert_eq!(before, -21.0 * 150.0 + 105.0);

        let mut after = game.clone();
        after.apply(&UltimateMove::new(2, 2));
        assert_eq!(after.outcome(), Outcome::Winner(Player::X));
        let after = heuristic.eval(&after, Player::X);
        assert!(after - before >= WIN);
    }
}
