//! Cards: the closed set of card kinds and their effects.
//!
//! - `Card`: id + color + kind, with scoring and playability
//! - `CardKind`: `Number(0..=9)` or `Action(ActionType)`
//! - `execute_effect`: effect dispatch through `GameMediator`

pub mod card;
pub mod effect;

pub use card::{ActionType, Card, CardColor, CardId, CardKind};
