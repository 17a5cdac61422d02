//! Card effect dispatch.
//!
//! ## Turn-advance rule
//!
//! An effect performs only the seat moves listed below. The round loop
//! then performs exactly one turn-end advance after the turn, so:
//!
//! | Card | Effect | Net result after the turn-end advance |
//! |---|---|---|
//! | Number | advance | (not dispatched by the round loop) |
//! | DrawTwo | advance, victim draws 2 | victim skipped |
//! | Reverse | flip direction | next seat in the new direction |
//! | Skip | advance | skipped seat bypassed |
//! | Wild | choose color | next seat |
//! | WildDrawFour | choose color, advance, victim draws 4 | victim skipped |
//! | ShuffleHands | shuffle hands, choose color | next seat |

use tracing::debug;

use super::card::{ActionType, Card, CardKind};
use crate::error::Result;
use crate::rules::GameMediator;

impl Card {
    /// Apply this card's effect through the mediator.
    ///
    /// Wild-family cards take the chosen color as their own, so the card
    /// carries a concrete color once it lands on the discard pile.
    pub fn execute_effect(&mut self, mediator: &mut dyn GameMediator) -> Result<()> {
        let action = match self.kind() {
            CardKind::Number(_) => {
                mediator.move_to_next_player();
                return Ok(());
            }
            CardKind::Action(action) => action,
        };

        debug!(card = %self, "executing effect");

        match action {
            ActionType::DrawTwo => {
                mediator.move_to_next_player();
                draw_penalty(mediator, 2)?;
            }
            ActionType::Reverse => {
                mediator.reverse_direction();
                debug!("direction reversed");
            }
            ActionType::Skip => {
                mediator.move_to_next_player();
                debug!(player = mediator.current_player().name(), "skipped");
            }
            ActionType::Wild => {
                self.resolve_color(mediator);
            }
            ActionType::WildDrawFour => {
                self.resolve_color(mediator);
                mediator.move_to_next_player();
                draw_penalty(mediator, 4)?;
            }
            ActionType::ShuffleHands => {
                debug!("shuffling hands among players");
                mediator.shuffle_hands();
                self.resolve_color(mediator);
            }
        }

        Ok(())
    }

    fn resolve_color(&mut self, mediator: &mut dyn GameMediator) {
        let chosen = mediator.choose_color_for_current_player();
        mediator.set_current_color(chosen);
        self.assign_color(chosen);
        debug!(player = mediator.current_player().name(), color = %chosen, "color chosen");
    }
}

/// The current player draws `count` cards.
///
/// Draws happen on a working copy of the deck. The copy is committed and
/// the cards handed over only once every draw succeeded.
fn draw_penalty(mediator: &mut dyn GameMediator, count: usize) -> Result<()> {
    let mut deck = mediator.deck();
    let drawn = deck.draw_cards(count)?;
    mediator.set_deck(deck);

    let victim = mediator.current_player_mut();
    debug!(player = victim.name(), count, "penalty draw");
    victim.add_cards(drawn);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardColor, CardId};
    use crate::core::{Direction, GameRng, PlayerId, PlayerMap};
    use crate::error::GameError;
    use crate::players::{FirstPlayableStrategy, Player};
    use crate::zones::Deck;

    /// Minimal mediator over a fixed table.
    struct Table {
        players: PlayerMap<Player>,
        current: PlayerId,
        direction: Direction,
        color: Option<CardColor>,
        deck: Deck,
        rng: GameRng,
        deck_commits: usize,
    }

    impl Table {
        fn new(player_count: usize, draw_pile: Vec<Card>) -> Self {
            let players = PlayerMap::new(player_count, |p| {
                Player::new(format!("P{}", p.index()), Box::new(FirstPlayableStrategy))
            });
            let mut deck = Deck::empty(GameRng::new(1));
            for (i, card) in draw_pile.into_iter().enumerate() {
                deck.add_card_to_draw_pile(card.with_id(CardId::new(i as u32)));
            }
            Self {
                players,
                current: PlayerId::new(0),
                direction: Direction::Forward,
                color: None,
                deck,
                rng: GameRng::new(2),
                deck_commits: 0,
            }
        }
    }

    impl GameMediator for Table {
        fn current_player_id(&self) -> PlayerId {
            self.current
        }

        fn current_player(&self) -> &Player {
            &self.players[self.current]
        }

        fn current_player_mut(&mut self) -> &mut Player {
            &mut self.players[self.current]
        }

        fn move_to_next_player(&mut self) {
            self.current = self.current.step(self.direction, self.players.player_count());
        }

        fn reverse_direction(&mut self) {
            self.direction = self.direction.reversed();
        }

        fn set_current_color(&mut self, color: CardColor) {
            self.color = Some(color);
        }

        fn shuffle_hands(&mut self) {
            let mut pool: Vec<Card> = Vec::new();
            for player in self.players.as_mut_slice() {
                pool.extend(player.clear_hand());
            }
            self.rng.shuffle(&mut pool);
            let count = self.players.player_count();
            for (i, card) in pool.into_iter().enumerate() {
                self.players[PlayerId::new((i % count) as u8)].add_card(card);
            }
        }

        fn deck(&self) -> Deck {
            self.deck.clone()
        }

        fn set_deck(&mut self, deck: Deck) {
            self.deck_commits += 1;
            self.deck = deck;
        }

        fn choose_color_for_current_player(&mut self) -> CardColor {
            let current = self.current;
            self.players[current].choose_color(&mut self.rng)
        }
    }

    fn num(color: CardColor, n: u8) -> Card {
        Card::number(color, n).unwrap()
    }

    fn act(color: CardColor, action: ActionType) -> Card {
        Card::action(color, action).unwrap()
    }

    fn filler(count: usize) -> Vec<Card> {
        (0..count).map(|i| num(CardColor::Blue, (i % 10) as u8)).collect()
    }

    #[test]
    fn test_number_effect_advances() {
        let mut table = Table::new(3, vec![]);
        let mut card = num(CardColor::Red, 4);
        card.execute_effect(&mut table).unwrap();
        assert_eq!(table.current, PlayerId::new(1));
    }

    #[test]
    fn test_draw_two_moves_and_draws() {
        let mut table = Table::new(3, filler(5));
        let mut card = act(CardColor::Red, ActionType::DrawTwo);

        card.execute_effect(&mut table).unwrap();

        assert_eq!(table.current, PlayerId::new(1));
        assert_eq!(table.players[PlayerId::new(1)].hand().len(), 2);
        assert_eq!(table.players[PlayerId::new(0)].hand().len(), 0);
        assert_eq!(table.deck.draw_pile_len(), 3);
        assert_eq!(table.deck_commits, 1);
    }

    #[test]
    fn test_reverse_only_flips() {
        let mut table = Table::new(4, vec![]);
        let mut card = act(CardColor::Green, ActionType::Reverse);

        card.execute_effect(&mut table).unwrap();

        assert_eq!(table.current, PlayerId::new(0));
        assert_eq!(table.direction, Direction::Backward);
    }

    #[test]
    fn test_skip_advances_once() {
        let mut table = Table::new(4, vec![]);
        table.direction = Direction::Backward;
        let mut card = act(CardColor::Green, ActionType::Skip);

        card.execute_effect(&mut table).unwrap();

        assert_eq!(table.current, PlayerId::new(3));
    }

    #[test]
    fn test_wild_assigns_chosen_color() {
        let mut table = Table::new(2, vec![]);
        table.players[PlayerId::new(0)].add_card(num(CardColor::Yellow, 1));
        table.players[PlayerId::new(0)].add_card(num(CardColor::Yellow, 2));
        table.players[PlayerId::new(0)].add_card(num(CardColor::Red, 2));
        let mut card = act(CardColor::Wild, ActionType::Wild);

        card.execute_effect(&mut table).unwrap();

        assert_eq!(table.color, Some(CardColor::Yellow));
        assert_eq!(card.color(), CardColor::Yellow);
        assert_eq!(table.current, PlayerId::new(0));
    }

    #[test]
    fn test_wild_draw_four() {
        let mut table = Table::new(3, filler(6));
        table.players[PlayerId::new(0)].add_card(num(CardColor::Green, 8));
        let mut card = act(CardColor::Wild, ActionType::WildDrawFour);

        card.execute_effect(&mut table).unwrap();

        // Color picked by the player who played the card
        assert_eq!(card.color(), CardColor::Green);
        assert_eq!(table.color, Some(CardColor::Green));
        assert_eq!(table.current, PlayerId::new(1));
        assert_eq!(table.players[PlayerId::new(1)].hand().len(), 4);
        assert_eq!(table.deck.draw_pile_len(), 2);
    }

    #[test]
    fn test_shuffle_hands_redistributes() {
        let mut table = Table::new(3, vec![]);
        for n in 0..5 {
            table.players[PlayerId::new(1)].add_card(num(CardColor::Red, n));
        }
        table.players[PlayerId::new(2)].add_card(num(CardColor::Blue, 9));
        let mut card = act(CardColor::Wild, ActionType::ShuffleHands);

        card.execute_effect(&mut table).unwrap();

        let sizes: Vec<_> = table.players.values().map(|p| p.hand().len()).collect();
        assert_eq!(sizes, vec![2, 2, 2]);
        assert_eq!(table.current, PlayerId::new(0));
        assert!(!card.color().is_wild());
        assert_eq!(table.color, Some(card.color()));
    }

    #[test]
    fn test_failed_penalty_leaves_deck_untouched() {
        let mut table = Table::new(2, filler(1));
        let mut card = act(CardColor::Red, ActionType::DrawTwo);

        let err = card.execute_effect(&mut table).unwrap_err();

        assert!(matches!(err, GameError::DeckExhausted));
        assert_eq!(table.deck.draw_pile_len(), 1);
        assert_eq!(table.deck_commits, 0);
        assert!(table.players[PlayerId::new(1)].hand().is_empty());
    }
}
