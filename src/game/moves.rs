//! Pure legality queries over a board snapshot.
//!
//! Every function here returns a freshly computed destination list and leaves
//! the board untouched, so call order can never corrupt a search. Captures in
//! Dameo run along orthogonal lines only, for men and kings alike; there is
//! no diagonal capture in this variant.

use crate::game::board::Board;
use crate::game::piece::{Color, Piece, Square};
use rand::{Rng, RngExt};

/// The four capture directions (up, down, right, left).
pub const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A piece-position/destination pair chosen by a player or an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Square,
    pub to: Square,
}

/// Directions a piece may slide in: all eight for kings, straight ahead plus
/// the two forward diagonals for men.
fn slide_directions(piece: Piece) -> Vec<(isize, isize)> {
    if piece.king {
        let mut directions = ORTHOGONAL_DIRECTIONS.to_vec();
        directions.extend_from_slice(&DIAGONAL_DIRECTIONS);
        directions
    } else {
        let forward = piece.color.forward();
        vec![(forward, 0), (forward, -1), (forward, 1)]
    }
}

/// Non-capturing destinations: each ray runs to the square before the first
/// occupied cell, so no piece of either color is ever slid past.
pub fn slide_destinations(piece: Piece, board: &Board) -> Vec<Square> {
    let size = board.size();
    let mut legal = Vec::new();
    for (dr, dc) in slide_directions(piece) {
        let mut step = 1;
        while let Some(square) = piece.square.offset(dr * step, dc * step, size) {
            if board.piece_at(square).is_some() {
                break;
            }
            legal.push(square);
            step += 1;
        }
    }
    legal
}

/// Capture landing squares for `piece`, dispatching on its rank.
pub fn capture_destinations(piece: Piece, board: &Board) -> Vec<Square> {
    if piece.king {
        king_captures(piece, board)
    } else {
        step_captures(piece, board)
    }
}

/// Man captures: an adjacent enemy on an orthogonal line with an empty
/// landing square exactly two steps away.
pub fn step_captures(piece: Piece, board: &Board) -> Vec<Square> {
    let size = board.size();
    let mut legal = Vec::new();
    for (dr, dc) in ORTHOGONAL_DIRECTIONS {
        let over = match piece.square.offset(dr, dc, size) {
            Some(square) => square,
            None => continue,
        };
        let landing = match piece.square.offset(2 * dr, 2 * dc, size) {
            Some(square) => square,
            None => continue,
        };
        match board.piece_at(over) {
            Some(other) if other.color != piece.color && board.piece_at(landing).is_none() => {
                legal.push(landing);
            }
            _ => {}
        }
    }
    legal
}

/// King captures: scan each orthogonal line for the first piece. An enemy
/// with at least one empty square behind it yields every empty square beyond
/// it, up to the next obstruction or the board edge, as a landing square. A
/// same-color piece or two adjacent pieces end the scan in that direction.
pub fn king_captures(piece: Piece, board: &Board) -> Vec<Square> {
    let size = board.size();
    let mut legal = Vec::new();
    for (dr, dc) in ORTHOGONAL_DIRECTIONS {
        let mut step = 1;
        while let Some(square) = piece.square.offset(dr * step, dc * step, size) {
            let other = match board.piece_at(square) {
                None => {
                    step += 1;
                    continue;
                }
                Some(other) => other,
            };
            if other.color == piece.color {
                break;
            }
            match piece.square.offset(dr * (step + 1), dc * (step + 1), size) {
                // Enemy on the edge, or shielded by the next piece: no capture here.
                None => break,
                Some(behind) if board.piece_at(behind).is_some() => break,
                Some(_) => {}
            }
            let mut landing_step = step + 1;
            while let Some(landing) = piece.square.offset(dr * landing_step, dc * landing_step, size)
            {
                if board.piece_at(landing).is_some() {
                    break;
                }
                legal.push(landing);
                landing_step += 1;
            }
            // Only the first enemy per line is capturable.
            break;
        }
    }
    legal
}

/// Picks uniformly among all (piece, destination) pairs of `moves`.
pub fn random_move<R: Rng>(moves: &[(Square, Vec<Square>)], rng: &mut R) -> Option<ChosenMove> {
    let total: usize = moves.iter().map(|(_, destinations)| destinations.len()).sum();
    if total == 0 {
        return None;
    }
    let mut pick = rng.random_range(0..total);
    for (from, destinations) in moves {
        if pick < destinations.len() {
            return Some(ChosenMove {
                from: *from,
                to: destinations[pick],
            });
        }
        pick -= destinations.len();
    }
    unreachable!("pick index exceeded the total number of moves")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;
    use crate::game::rules::GameRules;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_board(size: usize) -> Board {
        Board::new(GameRules::new(size).unwrap())
    }

    #[test]
    fn test_man_slides_forward_only() {
        let mut board = empty_board(6);
        let piece = Piece::new(Square::new(3, 3), Color::White);
        board.place_piece(piece);

        let legal = slide_destinations(piece, &board);
        // White advances towards row 0: straight ahead and both forward diagonals.
        assert!(legal.contains(&Square::new(2, 3)));
        assert!(legal.contains(&Square::new(2, 2)));
        assert!(legal.contains(&Square::new(2, 4)));
        assert!(legal.iter().all(|sq| sq.row < 3));
    }

    #[test]
    fn test_man_ray_stops_at_first_piece() {
        let mut board = empty_board(8);
        let piece = Piece::new(Square::new(6, 4), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(3, 4), Color::Black));

        let legal = slide_destinations(piece, &board);
        assert!(legal.contains(&Square::new(5, 4)));
        assert!(legal.contains(&Square::new(4, 4)));
        assert!(!legal.contains(&Square::new(3, 4)), "occupied square");
        assert!(!legal.contains(&Square::new(2, 4)), "square past the blocker");
    }

    #[test]
    fn test_man_ray_stops_at_own_piece_too() {
        let mut board = empty_board(8);
        let piece = Piece::new(Square::new(6, 4), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(5, 4), Color::White));

        let legal = slide_destinations(piece, &board);
        assert!(!legal.iter().any(|sq| sq.col == 4), "whole file is blocked");
    }

    #[test]
    fn test_king_slides_all_eight_directions() {
        let mut board = empty_board(8);
        let piece = Piece::king(Square::new(4, 4), Color::Black);
        board.place_piece(piece);

        let legal = slide_destinations(piece, &board);
        // 7 squares per row/column ray pair plus the four diagonal rays.
        assert!(legal.contains(&Square::new(0, 4)));
        assert!(legal.contains(&Square::new(4, 0)));
        assert!(legal.contains(&Square::new(0, 0)));
        assert!(legal.contains(&Square::new(7, 7)));
        assert_eq!(legal.len(), 7 + 7 + 13);
    }

    #[test]
    fn test_king_cannot_jump_in_quiet_move() {
        let mut board = empty_board(8);
        let piece = Piece::king(Square::new(4, 4), Color::Black);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(4, 6), Color::Black));
        board.place_piece(Piece::new(Square::new(2, 2), Color::White));

        let legal = slide_destinations(piece, &board);
        assert!(legal.contains(&Square::new(4, 5)));
        assert!(!legal.contains(&Square::new(4, 6)));
        assert!(!legal.contains(&Square::new(4, 7)), "own piece blocks the ray");
        assert!(legal.contains(&Square::new(3, 3)));
        assert!(!legal.contains(&Square::new(2, 2)));
        assert!(!legal.contains(&Square::new(1, 1)), "enemy blocks the quiet ray");
    }

    #[test]
    fn test_step_capture_orthogonal_only() {
        let mut board = empty_board(6);
        let piece = Piece::new(Square::new(3, 3), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(3, 4), Color::Black));
        board.place_piece(Piece::new(Square::new(2, 2), Color::Black));

        let legal = step_captures(piece, &board);
        assert_eq!(legal, vec![Square::new(3, 5)]);
    }

    #[test]
    fn test_step_capture_backwards_is_allowed() {
        // Men capture in all four orthogonal directions, including backwards.
        let mut board = empty_board(6);
        let piece = Piece::new(Square::new(2, 2), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(3, 2), Color::Black));

        let legal = step_captures(piece, &board);
        assert_eq!(legal, vec![Square::new(4, 2)]);
    }

    #[test]
    fn test_step_capture_needs_empty_landing_in_bounds() {
        let mut board = empty_board(6);
        let piece = Piece::new(Square::new(1, 4), Color::Black);
        board.place_piece(piece);
        // Landing for the upward capture would be row -1.
        board.place_piece(Piece::new(Square::new(0, 4), Color::White));
        // Landing occupied for the leftward capture.
        board.place_piece(Piece::new(Square::new(1, 3), Color::White));
        board.place_piece(Piece::new(Square::new(1, 2), Color::Black));

        assert!(step_captures(piece, &board).is_empty());
    }

    #[test]
    fn test_king_capture_lands_anywhere_beyond() {
        let mut board = empty_board(8);
        let piece = Piece::king(Square::new(4, 0), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(4, 3), Color::Black));

        let legal = king_captures(piece, &board);
        assert_eq!(
            legal,
            vec![Square::new(4, 4), Square::new(4, 5), Square::new(4, 6), Square::new(4, 7)]
        );
    }

    #[test]
    fn test_king_capture_landing_stops_at_obstruction() {
        let mut board = empty_board(8);
        let piece = Piece::king(Square::new(4, 0), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(4, 3), Color::Black));
        board.place_piece(Piece::new(Square::new(4, 6), Color::Black));

        let legal = king_captures(piece, &board);
        assert_eq!(legal, vec![Square::new(4, 4), Square::new(4, 5)]);
    }

    #[test]
    fn test_king_cannot_capture_two_adjacent_pieces() {
        let mut board = empty_board(8);
        let piece = Piece::king(Square::new(4, 0), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(4, 3), Color::Black));
        board.place_piece(Piece::new(Square::new(4, 4), Color::Black));

        assert!(king_captures(piece, &board).is_empty());
    }

    #[test]
    fn test_king_capture_blocked_by_own_piece() {
        let mut board = empty_board(8);
        let piece = Piece::king(Square::new(4, 0), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(4, 2), Color::White));
        board.place_piece(Piece::new(Square::new(4, 4), Color::Black));

        assert!(king_captures(piece, &board).is_empty());
    }

    #[test]
    fn test_king_has_no_diagonal_capture() {
        let mut board = empty_board(8);
        let piece = Piece::king(Square::new(4, 4), Color::White);
        board.place_piece(piece);
        board.place_piece(Piece::new(Square::new(2, 2), Color::Black));

        assert!(king_captures(piece, &board).is_empty());
    }

    #[test]
    fn test_random_move_is_uniform_over_pairs() {
        let moves = vec![
            (Square::new(0, 0), vec![Square::new(1, 0)]),
            (Square::new(2, 2), vec![Square::new(3, 2), Square::new(3, 3)]),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let chosen = random_move(&moves, &mut rng).unwrap();
            let listed = moves
                .iter()
                .any(|(from, dests)| *from == chosen.from && dests.contains(&chosen.to));
            assert!(listed);
        }
        assert_eq!(random_move(&[], &mut rng), None);
    }
}
