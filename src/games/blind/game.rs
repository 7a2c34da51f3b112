//! Blind bidding game orchestration.
//!
//! `BlindBiddingGame` owns the deck, the resource totals and the RNG, and
//! walks each round through bid resolution, card effect and validation. It
//! performs no I/O: bids come from a [`BidSource`] and every step returns
//! plain data for a front end to render.

use im::Vector;
use log::{debug, info};

use super::round::{RoundPhase, RoundReport, RoundState};
use crate::bidding::{resolve_round, validate_bid, BidSet, BidSource, RoundOutcome};
use crate::cards::{build_deck, Card, Deck};
use crate::core::{BiddingError, GameConfig, GameRng, PlayerMap, PlayerName, Result};
use crate::effects::apply_effect;
use crate::rules::{check_terminal, final_result, GameResult, TerminalReason};
use crate::validation::{validate, ResourceStatus};

/// A game in progress.
///
/// ## Example
///
/// ```
/// use blind_bidding::core::{GameConfig, PlayerName};
/// use blind_bidding::games::blind::BlindBiddingGame;
///
/// let config = GameConfig::new(["Player 1", "Player 2"]);
/// let mut game = BlindBiddingGame::new(config, 42).unwrap();
///
/// // Everybody bids a fifth of what they have
/// let mut source = |_: &PlayerName, available: i64| available / 5;
/// let report = game.play_round(&mut source).unwrap();
///
/// assert_eq!(report.round, 1);
/// assert_eq!(game.deck().len(), 13);
/// ```
#[derive(Clone, Debug)]
pub struct BlindBiddingGame {
    config: GameConfig,
    deck: Deck,
    resources: PlayerMap<i64>,
    rng: GameRng,
    round: u32,
    state: RoundState,
    history: Vector<RoundReport>,
}

impl BlindBiddingGame {
    /// Start a game: build the deck from the catalog, shuffle it if
    /// configured, and give every player the starting resources.
    ///
    /// The shuffle uses its own stream derived from `seed`, so steal target
    /// draws do not depend on deck size.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let rng = GameRng::new(seed);
        let mut deck = build_deck(&config.catalog)?;
        if config.shuffle_deck {
            deck.shuffle(&mut rng.for_context("shuffle"));
        }

        let starting = config.starting_resources;
        let resources = PlayerMap::from_names(config.players.iter().cloned(), |_| starting);

        info!(
            "starting game: {} players, {} cards, seed {}",
            resources.len(),
            deck.len(),
            seed
        );

        Ok(Self {
            config,
            deck,
            resources,
            rng,
            round: 1,
            state: RoundState::AwaitingBids,
            history: Vector::new(),
        })
    }

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current resource totals.
    #[must_use]
    pub fn resources(&self) -> &PlayerMap<i64> {
        &self.resources
    }

    /// Remaining deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round
    }

    /// Phase of the current round.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    /// Reports of all completed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundReport> {
        &self.history
    }

    /// Players allowed to bid this round: those with resources above zero.
    #[must_use]
    pub fn eligible_players(&self) -> Vec<PlayerName> {
        self.resources
            .iter()
            .filter(|(_, &total)| total > 0)
            .map(|(player, _)| player.clone())
            .collect()
    }

    /// Why the game is over, or `None` if it continues.
    #[must_use]
    pub fn terminal(&self) -> Option<TerminalReason> {
        check_terminal(&self.resources, self.deck.len(), self.config.elimination_threshold)
    }

    /// Standings over the current totals.
    #[must_use]
    pub fn result(&self) -> GameResult {
        final_result(&self.resources)
    }

    fn phase_error(&self, expected: RoundPhase) -> BiddingError {
        BiddingError::PhaseOrder {
            expected,
            actual: self.state.phase(),
        }
    }

    /// Resolve this round's bids (`AwaitingBids -> BidsResolved`).
    ///
    /// Every bidder must exist, be eligible and bid within `[0, resources]`.
    /// All checks run before anything changes.
    pub fn submit_bids(&mut self, bids: BidSet) -> Result<RoundOutcome> {
        if !matches!(self.state, RoundState::AwaitingBids) {
            return Err(self.phase_error(RoundPhase::AwaitingBids));
        }
        if let Some(reason) = self.terminal() {
            return Err(BiddingError::GameOver(reason));
        }

        for (player, &bid) in bids.iter() {
            let available = *self
                .resources
                .get(player.as_str())
                .ok_or_else(|| BiddingError::UnknownPlayer(player.to_string()))?;
            if available <= 0 {
                return Err(BiddingError::IneligibleBidder(player.to_string()));
            }
            validate_bid(player.as_str(), bid, available)?;
        }

        let outcome = resolve_round(&self.resources, &bids)?;
        self.resources = outcome.updated_resources.clone();

        let resolved = outcome.clone();
        self.advance(|_| RoundState::BidsResolved {
            bids,
            outcome: resolved,
        });
        Ok(outcome)
    }

    /// Reveal the top card and apply it to the winners
    /// (`BidsResolved -> CardApplied`).
    ///
    /// Returns the revealed card, or `None` if the deck was empty.
    pub fn reveal_and_apply(&mut self) -> Result<Option<Card>> {
        let RoundState::BidsResolved { outcome, .. } = &self.state else {
            return Err(self.phase_error(RoundPhase::BidsResolved));
        };

        let card = self.deck.peek().cloned();
        let winners = &outcome.winning_players;
        let result = apply_effect(&self.resources, card.as_ref(), winners, &mut self.rng)?;
        self.deck.reveal();
        self.resources = result.resources;

        match &card {
            Some(card) => debug!("round {}: revealed {}", self.round, card),
            None => debug!("round {}: deck is empty", self.round),
        }

        let events = result.events;
        let revealed = card.clone();
        self.advance(|state| match state {
            RoundState::BidsResolved { bids, outcome } => RoundState::CardApplied {
                bids,
                outcome,
                card,
                events,
            },
            other => other,
        });
        Ok(revealed)
    }

    /// Classify the post-effect totals (`CardApplied -> Validated`), then
    /// clamp them if the configuration asks for it.
    pub fn validate_resources(&mut self) -> Result<PlayerMap<ResourceStatus>> {
        if !matches!(self.state, RoundState::CardApplied { .. }) {
            return Err(self.phase_error(RoundPhase::CardApplied));
        }

        let statuses = validate(&self.resources, &self.config.bounds);
        if self.config.clamp_to_bounds {
            let bounds = self.config.bounds;
            self.resources = self.resources.map(|_, &total| bounds.clamp(total));
        }

        let report_statuses = statuses.clone();
        self.advance(|state| match state {
            RoundState::CardApplied {
                bids,
                outcome,
                card,
                events,
            } => RoundState::Validated {
                bids,
                outcome,
                card,
                events,
                statuses,
            },
            other => other,
        });
        Ok(report_statuses)
    }

    /// Close the round (`Validated -> RoundComplete`) and open the next one.
    pub fn finish_round(&mut self) -> Result<RoundReport> {
        let (bids, outcome, card, events, statuses) =
            match std::mem::replace(&mut self.state, RoundState::AwaitingBids) {
                RoundState::Validated {
                    bids,
                    outcome,
                    card,
                    events,
                    statuses,
                } => (bids, outcome, card, events, statuses),
                other => {
                    self.state = other;
                    return Err(self.phase_error(RoundPhase::Validated));
                }
            };

        let report = RoundReport {
            round: self.round,
            bids,
            outcome,
            card,
            events,
            statuses,
            resources: self.resources.clone(),
            cards_remaining: self.deck.len(),
        };

        let completed = RoundPhase::Validated.next();
        debug!("round {}: {:?} -> {:?}", self.round, completed, completed.next());
        self.history.push_back(report.clone());
        self.round += 1;

        if let Some(reason) = self.terminal() {
            info!("game over after round {}: {:?}", report.round, reason);
        }
        Ok(report)
    }

    /// Play a whole round: collect a bid from every eligible player, then
    /// run every phase.
    ///
    /// Invalid bids from `source` fail the round before any state changes;
    /// an interactive source should re-prompt with [`validate_bid`] instead.
    /// `source` is never asked for bids once the game is over.
    pub fn play_round(&mut self, source: &mut impl BidSource) -> Result<RoundReport> {
        if !matches!(self.state, RoundState::AwaitingBids) {
            return Err(self.phase_error(RoundPhase::AwaitingBids));
        }
        if let Some(reason) = self.terminal() {
            return Err(BiddingError::GameOver(reason));
        }

        let bids: BidSet = self
            .eligible_players()
            .into_iter()
            .map(|player| {
                let bid = source.bid(&player, self.resources[player.as_str()]);
                (player, bid)
            })
            .collect();

        self.submit_bids(bids)?;
        self.reveal_and_apply()?;
        self.validate_resources()?;
        self.finish_round()
    }

    /// Play rounds until the game ends and return the standings.
    pub fn run(&mut self, source: &mut impl BidSource) -> Result<GameResult> {
        while self.terminal().is_none() {
            self.play_round(source)?;
        }
        Ok(self.result())
    }

    /// Move to the next phase, carrying the round's data forward.
    fn advance(&mut self, f: impl FnOnce(RoundState) -> RoundState) {
        let from = self.state.phase();
        let state = std::mem::replace(&mut self.state, RoundState::AwaitingBids);
        self.state = f(state);

        debug_assert_eq!(self.state.phase(), from.next());
        debug!("round {}: {:?} -> {:?}", self.round, from, self.state.phase());
    }
}
