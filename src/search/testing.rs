//! Synthetic game trees for testing the search algorithms.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Heuristic;
use crate::board::{Board, Outcome};

#[derive(Debug, Clone)]
pub struct Node {
    pub children: Vec<usize>,
    /// Heuristic value from the view of player 0
    pub value: f64,
    pub outcome: Outcome<u8>,
}

/// Explicit game tree. The moves are child indices and the players alternate.
#[derive(Debug, Clone)]
pub struct TreeBoard {
    pub nodes: Arc<Vec<Node>>,
    pub at: usize,
    pub ply: usize,
}

impl TreeBoard {
    pub fn new(nodes: Vec<Node>) -> TreeBoard {
        TreeBoard {
            nodes: Arc::new(nodes),
            at: 0,
            ply: 0,
        }
    }

    /// Uniform tree with the given leaf values in depth first order.
    pub fn from_leaves(branching: usize, depth: usize, leaves: &[f64]) -> TreeBoard {
        assert_eq!(branching.pow(depth as u32), leaves.len());
        let mut nodes = Vec::new();
        let mut leaves = leaves.iter().copied();
        build_uniform(&mut nodes, branching, depth, &mut leaves);
        TreeBoard::new(nodes)
    }

    /// Random tree with integer leaf values (many ties) and some early terminals.
    pub fn random(seed: u64, depth: usize, max_branching: usize) -> TreeBoard {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut nodes = Vec::new();
        build_random(&mut nodes, &mut rng, depth, max_branching, true);
        TreeBoard::new(nodes)
    }

    pub fn leaf(value: f64) -> Node {
        Node {
            children: Vec::new(),
            value,
            outcome: Outcome::None,
        }
    }

    pub fn terminal(outcome: Outcome<u8>) -> Node {
        Node {
            children: Vec::new(),
            value: 0.0,
            outcome,
        }
    }

    pub fn inner(children: Vec<usize>) -> Node {
        Node {
            children,
            value: 0.0,
            outcome: Outcome::None,
        }
    }
}

fn build_uniform(
    nodes: &mut Vec<Node>,
    branching: usize,
    depth: usize,
    leaves: &mut impl Iterator<Item = f64>,
) -> usize {
    let id = nodes.len();
    if depth == 0 {
        nodes.push(TreeBoard::leaf(leaves.next().unwrap()));
        return id;
    }
    nodes.push(TreeBoard::inner(Vec::new()));
    let children = (0..branching)
        .map(|_| build_uniform(nodes, branching, depth - 1, leaves))
        .collect();
    nodes[id].children = children;
    id
}

fn build_random(
    nodes: &mut Vec<Node>,
    rng: &mut SmallRng,
    depth: usize,
    max_branching: usize,
    root: bool,
) -> usize {
    let id = nodes.len();
    if depth == 0 {
        nodes.push(TreeBoard::leaf(rng.gen_range(-20..=20) as f64));
        return id;
    }
    if !root && rng.gen_bool(0.1) {
        let outcome = match rng.gen_range(0..3) {
            0 => Outcome::Winner(0),
            1 => Outcome::Winner(1),
            _ => Outcome::Draw,
        };
        nodes.push(TreeBoard::terminal(outcome));
        return id;
    }
    let mut node = TreeBoard::inner(Vec::new());
    node.value = rng.gen_range(-20..=20) as f64;
    nodes.push(node);
    let branching = rng.gen_range(2..=max_branching);
    let children = (0..branching)
        .map(|_| build_random(nodes, rng, depth - 1, max_branching, false))
        .collect();
    nodes[id].children = children;
    id
}

impl Board for TreeBoard {
    type Move = usize;
    type Player = u8;

    fn legal_moves(&self) -> Vec<usize> {
        (0..self.nodes[self.at].children.len()).collect()
    }

    fn apply(&mut self, mv: &usize) {
        self.at = self.nodes[self.at].children[*mv];
        self.ply += 1;
    }

    fn outcome(&self) -> Outcome<u8> {
        self.nodes[self.at].outcome
    }

    fn current_player(&self) -> u8 {
        (self.ply % 2) as u8
    }
}

/// Returns the node value and counts the evaluations.
#[derive(Debug, Clone, Default)]
pub struct TreeHeuristic {
    pub evals: Arc<AtomicUsize>,
}

impl TreeHeuristic {
    pub fn evals(&self) -> usize {
        self.evals.load(Ordering::SeqCst)
    }
}

impl Heuristic<TreeBoard> for TreeHeuristic {
    fn eval(&self, board: &TreeBoard, player: u8) -> f64 {
        self.evals.fetch_add(1, Ordering::SeqCst);
        let value = board.nodes[board.at].value;
        if player == 0 {
            value
        } else {
            -value
        }
    }
}

/// Returns the same score for every board.
#[derive(Debug, Clone)]
pub struct ConstHeuristic(pub f64);

impl Heuristic<TreeBoard> for ConstHeuristic {
    fn eval(&self, _board: &TreeBoard, _player: u8) -> f64 {
        self.0
    }
}

/// Panics when evaluating the subtree of the given root child.
#[derive(Debug, Clone, Default)]
pub struct PanicHeuristic {
    pub node: usize,
}

impl Heuristic<TreeBoard> for PanicHeuristic {
    fn eval(&self, board: &TreeBoard, _player: u8) -> f64 {
        if board.at == self.node {
            panic!("evaluation failed");
        }
        board.nodes[board.at].value
    }
}
