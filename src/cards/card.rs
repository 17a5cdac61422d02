//! Card values.
//!
//! A `Card` is a closed sum over two kinds: numbered cards and action
//! cards. Everything that varies by kind (score, playability, effect) is
//! an exhaustive `match` on `CardKind`.
//!
//! Cards are plain values. "Copying" a card is `Clone`; the copy is an
//! independent value and reassigning its color never touches the original.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Unique identifier of a physical card within one deck.
///
/// Assigned when the deck is built. Cards constructed on their own
/// (tests, fixed scenarios) carry `CardId::UNASSIGNED` until given one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    pub const UNASSIGNED: CardId = CardId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Card color. `Wild` only appears on unresolved Wild-family cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardColor {
    Blue,
    Green,
    Red,
    Yellow,
    Wild,
}

impl CardColor {
    /// The four colors a player can choose or a number card can have.
    pub const CONCRETE: [CardColor; 4] = [
        CardColor::Blue,
        CardColor::Green,
        CardColor::Red,
        CardColor::Yellow,
    ];

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardColor::Wild)
    }
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardColor::Blue => "Blue",
            CardColor::Green => "Green",
            CardColor::Red => "Red",
            CardColor::Yellow => "Yellow",
            CardColor::Wild => "Wild",
        };
        f.write_str(name)
    }
}

/// The six action card types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    DrawTwo,
    Reverse,
    Skip,
    Wild,
    WildDrawFour,
    ShuffleHands,
}

impl ActionType {
    /// Points this card is worth in an opponent's hand.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            ActionType::DrawTwo | ActionType::Reverse | ActionType::Skip => 20,
            ActionType::Wild | ActionType::WildDrawFour => 50,
            ActionType::ShuffleHands => 40,
        }
    }

    /// Wild-family cards are always playable and get a color chosen on play.
    #[must_use]
    pub const fn is_wild_family(self) -> bool {
        matches!(
            self,
            ActionType::Wild | ActionType::WildDrawFour | ActionType::ShuffleHands
        )
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionType::DrawTwo => "DrawTwo",
            ActionType::Reverse => "Reverse",
            ActionType::Skip => "Skip",
            ActionType::Wild => "Wild",
            ActionType::WildDrawFour => "WildDrawFour",
            ActionType::ShuffleHands => "ShuffleHands",
        };
        f.write_str(name)
    }
}

/// What a card is, independent of its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Numbered card, 0-9.
    Number(u8),
    /// Action card.
    Action(ActionType),
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Number(n) => write!(f, "number card {n}"),
            CardKind::Action(action) => write!(f, "{action}"),
        }
    }
}

/// A playable card.
///
/// ```
/// use duo_cards::cards::{ActionType, Card, CardColor};
///
/// let red5 = Card::number(CardColor::Red, 5).unwrap();
/// let blue5 = Card::number(CardColor::Blue, 5).unwrap();
/// let wild = Card::action(CardColor::Wild, ActionType::Wild).unwrap();
///
/// assert!(red5.is_playable(&blue5));
/// assert!(wild.is_playable(&red5));
/// assert_eq!(wild.score(), 50);
/// assert_eq!(red5.to_string(), "Red 5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    color: CardColor,
    kind: CardKind,
}

impl Card {
    /// Create a numbered card.
    ///
    /// Fails with `InvalidCardValue` outside 0-9 and `InvalidCardColor`
    /// for Wild.
    pub fn number(color: CardColor, number: u8) -> Result<Self> {
        if number > 9 {
            return Err(GameError::InvalidCardValue(number));
        }
        let kind = CardKind::Number(number);
        if color.is_wild() {
            return Err(GameError::InvalidCardColor { color, kind });
        }
        Ok(Self {
            id: CardId::UNASSIGNED,
            color,
            kind,
        })
    }

    /// Create an action card.
    ///
    /// DrawTwo, Reverse and Skip need a concrete color. Wild-family cards
    /// accept any color: Wild before play, the chosen color after.
    pub fn action(color: CardColor, action: ActionType) -> Result<Self> {
        let kind = CardKind::Action(action);
        if color.is_wild() && !action.is_wild_family() {
            return Err(GameError::InvalidCardColor { color, kind });
        }
        Ok(Self {
            id: CardId::UNASSIGNED,
            color,
            kind,
        })
    }

    /// Stamp this card with its deck identity.
    #[must_use]
    pub fn with_id(mut self, id: CardId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> CardColor {
        self.color
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// The number, for numbered cards.
    #[must_use]
    pub fn number_value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(n) => Some(n),
            CardKind::Action(_) => None,
        }
    }

    /// The action type, for action cards.
    #[must_use]
    pub fn action_type(&self) -> Option<ActionType> {
        match self.kind {
            CardKind::Number(_) => None,
            CardKind::Action(action) => Some(action),
        }
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.kind, CardKind::Action(_))
    }

    #[must_use]
    pub fn is_wild_family(&self) -> bool {
        matches!(self.kind, CardKind::Action(action) if action.is_wild_family())
    }

    /// Points this card is worth when left in a losing hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self.kind {
            CardKind::Number(n) => u32::from(n),
            CardKind::Action(action) => action.score(),
        }
    }

    /// Can this card be played on top of `top`?
    ///
    /// - Numbers match a numbered top on color or number, any other top
    ///   on color only.
    /// - Wild-family actions always match.
    /// - Other actions match on color, or on the same action type.
    #[must_use]
    pub fn is_playable(&self, top: &Card) -> bool {
        match (self.kind, top.kind) {
            (CardKind::Number(mine), CardKind::Number(theirs)) => {
                self.color == top.color || mine == theirs
            }
            (CardKind::Number(_), CardKind::Action(_)) => self.color == top.color,
            (CardKind::Action(action), _) if action.is_wild_family() => true,
            (CardKind::Action(mine), top_kind) => {
                self.color == top.color || top_kind == CardKind::Action(mine)
            }
        }
    }

    /// Fix the color of a Wild-family card once chosen. Other cards keep
    /// their printed color.
    pub(crate) fn assign_color(&mut self, color: CardColor) {
        if self.is_wild_family() {
            self.color = color;
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Number(n) => write!(f, "{} {}", self.color, n),
            CardKind::Action(action) => write!(f, "{} {}", self.color, action),
        }
    }
}
