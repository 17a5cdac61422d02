//! The Duo game mediator.
//!
//! `DuoGame` owns every piece of shared state (seats, deck, direction,
//! current color, round counter) and is the only `GameMediator`: card
//! effects reach the table exclusively through it.

use tracing::{debug, info, warn};

use crate::cards::{ActionType, Card, CardColor};
use crate::core::config::{assert_deal_fits, DEFAULT_PLAYER_RANGE};
use crate::core::{Direction, GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::{GameError, Result};
use crate::export::{GameSummary, PlayerScore, RoundSnapshot, SnapshotSink};
use crate::players::{BalancedStrategy, Player, Strategy};
use crate::rules::{GameMediator, GamePhase, GameResult, RoundOutcome};
use crate::zones::Deck;

type StrategyFactory = Box<dyn Fn(PlayerId) -> Box<dyn Strategy>>;

/// Builder for creating a `DuoGame`.
pub struct DuoGameBuilder {
    config: GameConfig,
    strategy: StrategyFactory,
    sink: Option<Box<dyn SnapshotSink>>,
}

impl Default for DuoGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            strategy: Box::new(|_| Box::new(BalancedStrategy)),
            sink: None,
        }
    }
}

impl DuoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config = self.config.with_player_count(count);
        self
    }

    pub fn player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.config = self.config.with_player_names(names);
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config = self.config.with_hand_size(size);
        self
    }

    pub fn win_score(mut self, score: u32) -> Self {
        self.config = self.config.with_win_score(score);
        self
    }

    /// Choose each seat's decision policy.
    pub fn strategy(mut self, factory: impl Fn(PlayerId) -> Box<dyn Strategy> + 'static) -> Self {
        self.strategy = Box::new(factory);
        self
    }

    /// Deliver round snapshots to `sink`.
    pub fn sink(mut self, sink: impl SnapshotSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Seat the players and shuffle the first deck.
    ///
    /// Every random choice in the game derives from `seed`.
    pub fn build(self, seed: u64) -> DuoGame {
        let mut rng = GameRng::new(seed);
        let mut decisions = rng.for_context("decisions");

        let names = self
            .config
            .resolve_player_names(|| decisions.gen_range(DEFAULT_PLAYER_RANGE));
        assert_deal_fits(names.len(), self.config.hand_size);
        let players = PlayerMap::from_vec(
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| Player::new(name, (self.strategy)(PlayerId::new(i as u8))))
                .collect(),
        );
        info!(players = players.player_count(), seed, "seating players");

        let deck = Deck::standard(rng.fork());

        DuoGame {
            config: self.config,
            players,
            deck,
            current: PlayerId::new(0),
            dealer: PlayerId::new(0),
            direction: Direction::Forward,
            current_color: None,
            rounds_played: 0,
            phase: GamePhase::NotStarted,
            winner: None,
            rng,
            decisions,
            sink: self.sink,
        }
    }
}

/// Duo game state and round driver.
#[derive(Debug)]
pub struct DuoGame {
    config: GameConfig,
    players: PlayerMap<Player>,
    deck: Deck,
    current: PlayerId,
    dealer: PlayerId,
    direction: Direction,
    current_color: Option<CardColor>,
    rounds_played: u32,
    phase: GamePhase,
    winner: Option<PlayerId>,
    /// Root stream; forked for every fresh deck.
    rng: GameRng,
    /// Strategy choices and hand shuffles.
    decisions: GameRng,
    sink: Option<Box<dyn SnapshotSink>>,
}

impl DuoGame {
    // === Lifecycle ===

    /// Deal a round.
    ///
    /// Selects the dealer, shuffles, deals `hand_size` cards each, and turns
    /// over the starting card. The seat after the dealer opens, and the
    /// starting card's effect applies with that seat current: a Wild lets
    /// it choose the color, a Reverse flips direction but it still opens,
    /// a Skip passes the opening turn on. A DrawTwo or WildDrawFour lands
    /// on the seat after the opener, who then loses the turn.
    pub fn start_game(&mut self) -> Result<()> {
        if !matches!(self.phase, GamePhase::NotStarted | GamePhase::RoundEnded) {
            return Err(GameError::InvalidPhase {
                expected: GamePhase::NotStarted,
                actual: self.phase,
            });
        }

        let dealer = self.select_dealer()?;
        info!(round = self.round_number(), dealer = self.players[dealer].name(), "dealing");

        self.deck.shuffle();
        self.deck
            .deal_cards(self.players.as_mut_slice(), self.config.hand_size)?;
        for player in self.players.values() {
            debug!(%player, "hand dealt");
        }

        self.direction = Direction::Forward;
        self.current = dealer.step(Direction::Forward, self.players.player_count());
        let starting = self.deck.draw_card()?;
        debug!(card = %starting, "starting discard");
        let penalty = matches!(
            starting.action_type(),
            Some(ActionType::DrawTwo | ActionType::WildDrawFour)
        );
        self.place_card(starting)?;
        // The effect leaves the victim current
        if penalty {
            self.move_to_next_player();
        }

        self.phase = GamePhase::InRound;
        Ok(())
    }

    /// Each player draws one card; the strictly highest score deals.
    ///
    /// Ties go to the earlier seat. The drawn cards go back under the draw
    /// pile and the pile is shuffled.
    pub fn select_dealer(&mut self) -> Result<PlayerId> {
        let mut dealer = PlayerId::new(0);
        let mut high = None;
        for seat in self.players.player_ids() {
            let card = self.deck.draw_card()?;
            debug!(player = self.players[seat].name(), %card, "draws for dealer");
            if high < Some(card.score()) {
                dealer = seat;
                high = Some(card.score());
            }
            self.deck.add_card_to_draw_pile(card);
        }
        self.deck.shuffle();

        self.dealer = dealer;
        Ok(dealer)
    }

    /// Play turns until someone empties their hand.
    ///
    /// Scores the round, reports it to the sink, and either ends the game
    /// or deals the next round. A round whose deck runs completely dry is
    /// abandoned without scoring.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        if self.phase != GamePhase::InRound {
            return Err(GameError::InvalidPhase {
                expected: GamePhase::InRound,
                actual: self.phase,
            });
        }

        info!(round = self.round_number(), "round started");

        let outcome = loop {
            match self.play_turn() {
                Ok(Some(winner)) => {
                    let points = self.update_scores(winner);
                    break RoundOutcome::Won { winner, points };
                }
                Ok(None) => {}
                Err(GameError::DeckExhausted) => {
                    warn!(round = self.round_number(), "deck exhausted, round abandoned");
                    break RoundOutcome::Abandoned;
                }
                Err(err) => return Err(err),
            }
        };

        self.phase = GamePhase::RoundEnded;
        self.rounds_played += 1;
        self.check_game_over();
        self.export_round();

        if self.phase == GamePhase::RoundEnded {
            self.reset_round()?;
        }
        Ok(outcome)
    }

    /// Drive the game from wherever it is to the end.
    pub fn play_to_completion(&mut self) -> Result<GameResult> {
        if self.phase == GamePhase::NotStarted {
            self.start_game()?;
        }
        while self.phase != GamePhase::GameOver {
            self.play_round()?;
        }
        self.result().ok_or(GameError::InvalidPhase {
            expected: GamePhase::GameOver,
            actual: self.phase,
        })
    }

    /// The round winner collects the value of every other hand.
    ///
    /// Returns the points awarded.
    pub fn update_scores(&mut self, winner: PlayerId) -> u32 {
        let points: u32 = self
            .players
            .iter()
            .filter(|&(seat, _)| seat != winner)
            .map(|(_, player)| player.hand_score())
            .sum();

        let player = &mut self.players[winner];
        player.add_score(points);
        info!(player = player.name(), points, total = player.score(), "round won");
        points
    }

    /// End the game if anyone has reached the win score.
    ///
    /// The earliest seat at or above the threshold wins.
    pub fn check_game_over(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return true;
        }
        let reached = self
            .players
            .iter()
            .find(|(_, player)| player.score() >= self.config.win_score)
            .map(|(seat, _)| seat);

        if let Some(seat) = reached {
            self.winner = Some(seat);
            self.phase = GamePhase::GameOver;
            info!(
                winner = self.players[seat].name(),
                score = self.players[seat].score(),
                "game over"
            );
        }
        reached.is_some()
    }

    // === Turns ===

    /// One turn for the current seat. Returns the seat if it won the round.
    fn play_turn(&mut self) -> Result<Option<PlayerId>> {
        let acting = self.current;

        // A shuffle can leave a player with nothing to play
        if self.players[acting].hand().is_empty() {
            return Ok(Some(acting));
        }

        // The discard pile always keeps its top card once a round is dealt
        let top = self
            .deck
            .top_discard_pile_card()
            .cloned()
            .ok_or(GameError::DeckExhausted)?;
        debug!(player = self.players[acting].name(), top = %top, color = ?self.current_color, "turn");

        let choice = self.players[acting]
            .choose_playable_card(&top, &mut self.decisions)
            .and_then(|id| self.players[acting].play_card(id));

        match choice {
            Some(card) => {
                debug!(player = self.players[acting].name(), %card, "plays");
                self.place_card(card)?;
            }
            None => {
                let drawn = self.deck.draw_card()?;
                debug!(player = self.players[acting].name(), card = %drawn, "draws");
                if drawn.is_playable(&top) {
                    debug!(player = self.players[acting].name(), card = %drawn, "plays drawn card");
                    self.place_card(drawn)?;
                } else {
                    self.players[acting].add_card(drawn);
                }
            }
        }

        if self.players[acting].hand().is_empty() {
            return Ok(Some(acting));
        }
        self.move_to_next_player();
        Ok(None)
    }

    /// Put a card into play: update the color, resolve an action, and
    /// discard it. The card reaches the discard pile even if its effect
    /// fails.
    fn place_card(&mut self, mut card: Card) -> Result<()> {
        self.current_color = Some(card.color());
        let resolved = if card.is_action() {
            card.execute_effect(self)
        } else {
            Ok(())
        };
        self.deck.put_card_to_discard_pile(card);
        resolved
    }

    fn reset_round(&mut self) -> Result<()> {
        self.deck = Deck::standard(self.rng.fork());
        for player in self.players.as_mut_slice() {
            player.clear_hand();
        }
        self.current_color = None;
        self.start_game()
    }

    fn export_round(&mut self) {
        let snapshot = self.snapshot();
        let summary = self.result().map(|result| GameSummary {
            winner: result.winner_name,
            score: result.score,
            rounds: result.rounds,
        });

        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(err) = sink.record_round(&snapshot) {
            warn!(%err, round = snapshot.round, "failed to record round");
        }
        if let Some(summary) = summary {
            if let Err(err) = sink.record_game_over(&summary) {
                warn!(%err, "failed to record game result");
            }
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: PlayerId) -> &mut Player {
        &mut self.players[seat]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    /// Hand the turn to `seat`. For setting up fixed positions.
    pub fn set_current_player(&mut self, seat: PlayerId) {
        assert!(seat.index() < self.player_count(), "No such seat: {seat}");
        self.current = seat;
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn current_color(&self) -> Option<CardColor> {
        self.current_color
    }

    /// The round in progress, or the next one to be dealt.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.rounds_played + 1
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| &self.players[seat])
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let seat = self.winner?;
        let player = &self.players[seat];
        Some(GameResult {
            winner: seat,
            winner_name: player.name().to_string(),
            score: player.score(),
            rounds: self.rounds_played,
        })
    }

    /// Read-only view of the authoritative deck.
    #[must_use]
    pub fn deck_view(&self) -> &Deck {
        &self.deck
    }

    /// Cards in all hands plus both piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self.players.values().map(|p| p.hand().len()).sum();
        in_hands + self.deck.len()
    }

    /// Standings after the last finished round, in seat order.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.rounds_played,
            scores: self
                .players
                .values()
                .map(|player| PlayerScore {
                    name: player.name().to_string(),
                    score: player.score(),
                })
                .collect(),
        }
    }
}

impl GameMediator for DuoGame {
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
        self.current_color = Some(color);
    }

    fn shuffle_hands(&mut self) {
        let mut pool: Vec<Card> = Vec::new();
        for player in self.players.as_mut_slice() {
            pool.extend(player.clear_hand());
        }
        self.decisions.shuffle(&mut pool);

        let count = self.players.player_count();
        for (i, card) in pool.into_iter().enumerate() {
            self.players[PlayerId::new((i % count) as u8)].add_card(card);
        }
    }

    fn deck(&self) -> Deck {
        self.deck.clone()
    }

    fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    fn choose_color_for_current_player(&mut self) -> CardColor {
        self.players[self.current].choose_color(&mut self.decisions)
    }
}
