//! Monte Carlo Tree Search over board snapshots.
//!
//! Each call builds a fresh tree and repeats the four-phase loop (selection,
//! expansion, simulation, backpropagation) for a fixed number of iterations.
//! All randomness flows through the caller's seeded RNG, so results are
//! reproducible for a fixed seed.

use crate::game::board::Board;
use crate::game::moves::{random_move, ChosenMove};
use crate::game::piece::Color;
use crate::mcts::node::MctsNode;
use rand::rngs::StdRng;

/// Exploration constant of the UCB child-selection formula.
pub const EXPLORATION_WEIGHT: f64 = 1.4;

/// Monte Carlo Tree Search engine with a fixed iteration budget.
#[derive(Debug, Clone, Copy)]
pub struct MctsEngine {
    iterations: usize,
    exploration: f64,
}

impl MctsEngine {
    pub fn new(iterations: usize) -> Self {
        MctsEngine {
            iterations,
            exploration: EXPLORATION_WEIGHT,
        }
    }

    /// Runs the search for `turn` and returns the move of the most-visited
    /// root child, or `None` when the side has no legal move.
    pub fn search(&self, board: &Board, turn: Color, rng: &mut StdRng) -> Option<ChosenMove> {
        let mut root_board = board.clone();
        root_board.turn = turn;
        root_board.check_winner();
        let mut arena = vec![MctsNode::new(root_board, None)];

        for _ in 0..self.iterations {
            let mut index = 0;
            // Selection: descend through fully expanded nodes by UCB score
            // until a node can take another child or the game is over there.
            while !arena[index].board.is_terminal {
                if !arena[index].is_fully_expanded() {
                    index = self.expand(&mut arena, index, rng);
                    break;
                }
                match self.best_child(&arena, index) {
                    Some(child) => index = child,
                    None => break,
                }
            }
            let reward = self.simulate(&arena[index].board, turn, rng);
            self.backpropagate(&mut arena, index, reward);
        }

        let mut best: Option<usize> = None;
        for &child in &arena[0].children {
            if best.map_or(true, |incumbent| arena[child].visits > arena[incumbent].visits) {
                best = Some(child);
            }
        }
        best.and_then(|index| arena[index].board.last_move())
            .map(|applied| ChosenMove {
                from: applied.from,
                to: applied.to,
            })
    }

    /// Expansion: clone the node's board, play one uniformly random legal
    /// (piece, destination) pair on it and attach the result as a new child.
    /// The board's own turn resolution keeps a capture chain with the moving
    /// side and flips the turn (promoting when eligible) otherwise.
    fn expand(&self, arena: &mut Vec<MctsNode>, index: usize, rng: &mut StdRng) -> usize {
        let mut board = arena[index].board.clone();
        let moves = board.find_available_moves(board.turn);
        let chosen = random_move(&moves, rng)
            .unwrap_or_else(|| panic!("expansion reached a non-terminal state with no legal moves"));
        board.play(chosen.from, chosen.to);
        board.check_winner();

        let child = arena.len();
        arena.push(MctsNode::new(board, Some(index)));
        arena[index].children.push(child);
        child
    }

    /// Simulation: play uniformly random legal moves until the game ends and
    /// score the outcome for `initial_turn` (+1 win, -1 loss, 0 tie).
    fn simulate(&self, board: &Board, initial_turn: Color, rng: &mut StdRng) -> f64 {
        let mut state = board.clone();
        loop {
            if let Some(outcome) = state.check_winner() {
                return match outcome.winner() {
                    Some(winner) if winner == initial_turn => 1.0,
                    Some(_) => -1.0,
                    None => 0.0,
                };
            }
            let moves = state.find_available_moves(state.turn);
            let chosen = random_move(&moves, rng)
                .unwrap_or_else(|| panic!("rollout reached a non-terminal state with no legal moves"));
            state.play(chosen.from, chosen.to);
        }
    }

    /// Backpropagation: add the reward and a visit to every node from the
    /// simulated leaf up to the root.
    fn backpropagate(&self, arena: &mut [MctsNode], leaf: usize, reward: f64) {
        let mut index = leaf;
        loop {
            let node = &mut arena[index];
            node.visits += 1;
            node.reward += reward;
            match node.parent {
                Some(parent) => index = parent,
                None => break,
            }
        }
    }

    /// The child of `index` with the highest UCB score.
    fn best_child(&self, arena: &[MctsNode], index: usize) -> Option<usize> {
        let parent_visits = arena[index].visits;
        let mut best: Option<(f64, usize)> = None;
        for &child in &arena[index].children {
            let score = arena[child].ucb_score(parent_visits, self.exploration);
            if best.map_or(true, |(incumbent, _)| score > incumbent) {
                best = Some((score, child));
            }
        }
        best.map(|(_, child)| child)
    }
}
