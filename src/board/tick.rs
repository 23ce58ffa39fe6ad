use std::time::Instant;

use tracing::{debug, instrument, trace, warn};

use crate::{
    error::BoardError,
    food::FoodPlacer,
    glyph::Glyph,
    types::{Direction, Position, SnakeId, TickInstruments},
};

use super::Board;

/// What happened to one snake during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// the snake was already dead and did nothing
    Skipped,
    /// the snake crashed, its head at `at` is now an `x`
    Died {
        #[allow(missing_docs)]
        at: Position,
    },
    /// the snake ate and its head moved onto the food, the tail stayed put
    Grew {
        #[allow(missing_docs)]
        head: Position,
    },
    /// the snake moved one cell forward
    Moved {
        #[allow(missing_docs)]
        head: Position,
        #[allow(missing_docs)]
        tail: Position,
    },
}

/// One outcome per snake, in registry order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickReport {
    /// outcomes keyed by snake, in the order the snakes were processed
    pub outcomes: Vec<(SnakeId, TickOutcome)>,
}

impl TickReport {
    /// the outcome for a given snake
    pub fn outcome(&self, id: SnakeId) -> Option<TickOutcome> {
        self.outcomes
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, o)| *o)
    }

    /// how many snakes ate this tick, which is also how many times food was placed
    pub fn meals(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, TickOutcome::Grew { .. }))
            .count()
    }

    /// snakes that died this tick
    pub fn deaths(&self) -> impl Iterator<Item = SnakeId> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, TickOutcome::Died { .. }))
            .map(|(id, _)| *id)
    }
}

impl Board {
    /// Advances every live snake by one cell, in registry order.
    ///
    /// A snake heading into a wall or any snake cell dies where it stands and its head
    /// becomes `x`. One heading into food moves without its tail following and then
    /// `food` is asked to place a replacement. Anything else is open floor: head and
    /// tail both move. Snakes see the grid as left by the snakes before them, including
    /// any `x` written earlier in the same tick.
    ///
    /// The tick is all or nothing: if the board turns out to be malformed part way
    /// through, the error is returned and `self` is left exactly as it was.
    #[instrument(level = "trace", skip_all)]
    pub fn advance(&mut self, food: &mut impl FoodPlacer) -> Result<TickReport, BoardError> {
        let mut next = self.clone();
        let mut report = TickReport {
            outcomes: Vec::with_capacity(next.snakes.len()),
        };

        for idx in 0..next.snakes.len() {
            let id = SnakeId::try_from(idx)?;
            let outcome = next.advance_snake(id, food)?;
            report.outcomes.push((id, outcome));
        }

        *self = next;
        Ok(report)
    }

    /// [`Board::advance`], reporting how long the tick took
    pub fn advance_with_instruments<I: TickInstruments>(
        &mut self,
        food: &mut impl FoodPlacer,
        instruments: &I,
    ) -> Result<TickReport, BoardError> {
        let start = Instant::now();
        let result = self.advance(food);
        instruments.observe_tick(start.elapsed());
        result
    }

    /// The cell a snake's head is about to move onto, and what is in it. Fails if the
    /// snake's head glyph is missing or the step would leave the board.
    pub fn next_square(&self, id: SnakeId) -> Result<(Position, Glyph), BoardError> {
        let head = self.snake(id)?.head;
        let direction = self.head_direction(id, head)?;
        let next = self.grid.step(head, direction).ok_or(BoardError::OffGrid {
            from: head,
            direction,
        })?;
        let glyph = self.grid.get(next).ok_or(BoardError::OffGrid {
            from: head,
            direction,
        })?;
        Ok((next, glyph))
    }

    fn advance_snake(
        &mut self,
        id: SnakeId,
        food: &mut impl FoodPlacer,
    ) -> Result<TickOutcome, BoardError> {
        let snake = *self.snake(id)?;
        if !snake.live {
            return Ok(TickOutcome::Skipped);
        }

        let (_, square) = self.next_square(id)?;

        if square.is_wall() || square.is_snake() {
            self.snakes[id.as_usize()].live = false;
            self.grid.set(snake.head, Glyph::DeadHead);
            debug!(%id, at = %snake.head, hit = %square.to_char(), "snake died");
            return Ok(TickOutcome::Died { at: snake.head });
        }

        let head = self.update_head(id)?;

        if square.is_food() {
            debug!(%id, %head, "snake ate");
            if !food.place_food(self) {
                warn!(%id, "no food was placed after a meal");
            }
            return Ok(TickOutcome::Grew { head });
        }

        let tail = self.update_tail(id)?;
        trace!(%id, %head, %tail, "snake moved");
        Ok(TickOutcome::Moved { head, tail })
    }

    /// Moves the head one cell forward. The old head cell becomes a body glyph facing
    /// the way the snake went, the new cell becomes the head.
    fn update_head(&mut self, id: SnakeId) -> Result<Position, BoardError> {
        let head = self.snake(id)?.head;
        let direction = self.head_direction(id, head)?;
        let next = self.grid.step(head, direction).ok_or(BoardError::OffGrid {
            from: head,
            direction,
        })?;

        self.grid.set(head, Glyph::body(direction));
        self.grid.set(next, Glyph::head(direction));
        self.snakes[id.as_usize()].head = next;

        Ok(next)
    }

    /// Moves the tail one cell forward. The old tail cell is cleared and the body glyph
    /// it pointed at becomes the new tail.
    fn update_tail(&mut self, id: SnakeId) -> Result<Position, BoardError> {
        let tail = self.snake(id)?.tail;
        let tail_glyph = self.grid.get(tail).unwrap_or(Glyph::Padding);
        let direction = match tail_glyph {
            Glyph::Snake(_, direction) if tail_glyph.is_tail() => direction,
            _ => {
                return Err(BoardError::NotATail {
                    snake: id,
                    at: tail,
                    found: tail_glyph.to_char(),
                })
            }
        };

        let next = self.grid.step(tail, direction).ok_or(BoardError::OffGrid {
            from: tail,
            direction,
        })?;
        let next_glyph = self.grid.get(next).unwrap_or(Glyph::Padding);
        let new_tail = next_glyph.body_to_tail().ok_or(BoardError::BrokenChain {
            at: next,
            found: next_glyph.to_char(),
        })?;

        self.grid.set(tail, Glyph::Empty);
        self.grid.set(next, new_tail);
        self.snakes[id.as_usize()].tail = next;

        Ok(next)
    }

    fn head_direction(&self, id: SnakeId, head: Position) -> Result<Direction, BoardError> {
        let glyph = self.grid.get(head).unwrap_or(Glyph::Padding);
        match glyph {
            Glyph::Snake(_, direction) if glyph.is_head() => Ok(direction),
            _ => Err(BoardError::NotAHead {
                snake: id,
                at: head,
                found: glyph.to_char(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::food::{NoFood, RandomFoodPlacer};
    use crate::types::{LengthGettableGame, LivenessQueryableGame, TailGettableGame};

    fn fixture(text: &str) -> Board {
        text.parse().expect("the fixture is a valid board")
    }

    /// Places food at a fixed cell and counts how often it was asked to
    #[derive(Debug, Default)]
    struct CountingPlacer {
        calls: usize,
    }

    impl FoodPlacer for CountingPlacer {
        fn place_food(&mut self, board: &mut Board) -> bool {
            self.calls += 1;
            board.set_glyph(Position::new(10, 10), Glyph::Food)
        }
    }

    #[derive(Debug, Default)]
    struct Instruments {
        observed: Cell<usize>,
    }

    impl TickInstruments for Instruments {
        fn observe_tick(&self, _duration: Duration) {
            self.observed.set(self.observed.get() + 1);
        }
    }

    #[test]
    fn test_default_board_eats_the_food() {
        let mut board = Board::default();
        let mut placer = CountingPlacer::default();
        let id = SnakeId(0);

        // head starts at col 4, the food is at col 9
        for tick in 1..=4 {
            let report = board.advance(&mut placer).unwrap();
            assert_eq!(
                report.outcome(id),
                Some(TickOutcome::Moved {
                    head: Position::new(2, 4 + tick),
                    tail: Position::new(2, 2 + tick),
                })
            );
            assert_eq!(board.get_length(&id), Ok(3));
        }
        assert_eq!(placer.calls, 0);

        let report = board.advance(&mut placer).unwrap();
        assert_eq!(
            report.outcome(id),
            Some(TickOutcome::Grew {
                head: Position::new(2, 9)
            })
        );
        assert_eq!(report.meals(), 1);
        assert_eq!(placer.calls, 1);
        assert_eq!(board.get_length(&id), Ok(4));
        assert_eq!(board.get_tail_as_position(&id), Position::new(2, 6));
        assert_eq!(board.glyph_at(Position::new(10, 10)), Some(Glyph::Food));
        assert_eq!(
            board.grid().rows().nth(2).unwrap().iter().map(|g| g.to_char()).collect::<String>(),
            "#     d>>D         #"
        );

        let report = board.advance(&mut placer).unwrap();
        assert_eq!(
            report.outcome(id),
            Some(TickOutcome::Moved {
                head: Position::new(2, 10),
                tail: Position::new(2, 7),
            })
        );
        assert_eq!(board.get_length(&id), Ok(4));
        assert_eq!(placer.calls, 1);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_crash_into_wall() {
        let mut board = fixture(include_str!("../../fixtures/wall_ahead.txt"));
        let before = board.clone();
        let id = SnakeId(0);

        let report = board.advance(&mut NoFood).unwrap();
        assert_eq!(
            report.outcome(id),
            Some(TickOutcome::Died {
                at: Position::new(1, 3)
            })
        );
        assert!(!board.is_alive(&id));
        assert_eq!(board.snake(id).unwrap().head, Position::new(1, 3));
        assert_eq!(board.snake(id).unwrap().tail, before.snake(id).unwrap().tail);
        assert_eq!(board.encode(), "######\n#d>x##\n#    #\n######\n");

        let after_death = board.clone();
        let report = board.advance(&mut NoFood).unwrap();
        assert_eq!(report.outcome(id), Some(TickOutcome::Skipped));
        assert_eq!(board, after_death);
    }

    #[test]
    fn test_crash_into_own_body() {
        let mut board = fixture(
            "\
######
#s   #
#vA< #
#>>^ #
######
",
        );
        let report = board.advance(&mut NoFood).unwrap();
        assert_eq!(
            report.outcome(SnakeId(0)),
            Some(TickOutcome::Died {
                at: Position::new(2, 2)
            })
        );
        assert_eq!(board.glyph_at(Position::new(2, 2)), Some(Glyph::DeadHead));
    }

    #[test]
    fn test_earlier_snake_frees_a_cell_for_a_later_one() {
        let mut board = fixture(include_str!("../../fixtures/two_snakes.txt"));
        let report = board.advance(&mut NoFood).unwrap();

        assert!(matches!(
            report.outcome(SnakeId(0)),
            Some(TickOutcome::Moved { .. })
        ));
        assert!(matches!(
            report.outcome(SnakeId(1)),
            Some(TickOutcome::Moved { .. })
        ));
        assert_eq!(
            board.encode(),
            "\
########
#Wd>D  #
#w     #
#      #
########
"
        );
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_unmoved_later_snake_blocks_an_earlier_one() {
        let mut board = fixture(include_str!("../../fixtures/tail_chase.txt"));
        let report = board.advance(&mut NoFood).unwrap();

        assert_eq!(
            report.outcome(SnakeId(0)),
            Some(TickOutcome::Died {
                at: Position::new(2, 1)
            })
        );
        assert_eq!(report.deaths().collect::<Vec<_>>(), vec![SnakeId(0)]);
        assert_eq!(
            board.encode(),
            "\
#######
#s    #
#x    #
# d>D #
#######
"
        );
        assert_eq!(board.alive_snake_count(), 1);
    }

    #[test]
    fn test_dead_head_written_this_tick_is_an_obstacle() {
        // snake 0 hits the wall first, then snake 1 runs into the x it left behind
        let mut board = fixture(
            "\
######
#  dD#
#   W#
#   w#
######
",
        );
        board.advance(&mut NoFood).unwrap();
        assert_eq!(board.alive_snake_count(), 0);
        assert_eq!(
            board.encode(),
            "\
######
#  dx#
#   x#
#   w#
######
"
        );
    }

    #[test]
    fn test_malformed_board_leaves_state_untouched() {
        // the second snake's head has been replaced behind the registry's back
        let mut board = fixture(include_str!("../../fixtures/two_snakes.txt"));
        board.set_glyph(Position::new(2, 1), Glyph::body(Direction::Up));
        let before = board.clone();

        let err = board.advance(&mut NoFood).unwrap_err();
        assert_eq!(
            err,
            BoardError::NotAHead {
                snake: SnakeId(1),
                at: Position::new(2, 1),
                found: '^'
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_step_off_an_unwalled_board_is_an_error() {
        let mut board = Board::from_text_with_config("d>D\n", crate::BoardConfig::lenient())
            .unwrap();
        assert_eq!(
            board.next_square(SnakeId(0)),
            Err(BoardError::OffGrid {
                from: Position::new(0, 2),
                direction: Direction::Right
            })
        );
        assert!(board.advance(&mut NoFood).is_err());
    }

    #[test]
    fn test_snake_never_walks_onto_padding() {
        let mut board = Board::from_text_with_config(
            "#######\n#d>D\n#######\n",
            crate::BoardConfig::lenient(),
        )
        .unwrap();
        assert!(matches!(
            board.advance(&mut NoFood),
            Err(BoardError::OffGrid { .. })
        ));
    }

    #[test]
    fn test_invariants_hold_over_many_ticks() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        let mut board = fixture(include_str!("../../fixtures/arena.txt"));
        let mut placer = RandomFoodPlacer::new(SmallRng::seed_from_u64(42));
        let instruments = Instruments::default();

        for _ in 0..40 {
            let lengths_before = board
                .snakes()
                .iter()
                .enumerate()
                .map(|(i, _)| board.get_length(&SnakeId::try_from(i).unwrap()).unwrap())
                .collect::<Vec<_>>();

            let report = board
                .advance_with_instruments(&mut placer, &instruments)
                .unwrap();
            assert!(board.check_consistency().is_ok());

            for (id, outcome) in report.outcomes.iter() {
                let before = lengths_before[id.as_usize()];
                let after = board.get_length(id).unwrap();
                match outcome {
                    TickOutcome::Grew { .. } => assert_eq!(after, before + 1),
                    _ => assert_eq!(after, before),
                }
            }
        }
        assert_eq!(instruments.observed.get(), 40);
        assert_eq!(board.alive_snake_count(), 0);
    }

    #[test]
    fn test_closure_hook_runs_once_per_meal() {
        let mut board = fixture("#######\n#d>D**#\n#######\n");
        let mut calls = 0;
        let mut hook = |_: &mut Board| {
            calls += 1;
            false
        };

        board.advance(&mut hook).unwrap();
        board.advance(&mut hook).unwrap();
        let report = board.advance(&mut hook).unwrap();
        assert_eq!(
            report.outcome(SnakeId(0)),
            Some(TickOutcome::Died {
                at: Position::new(1, 5)
            })
        );
        assert_eq!(calls, 2);
        assert_eq!(board.encode(), "#######\n#d>>>x#\n#######\n");
    }
}
