//! Observer bus.
//!
//! The bus stores observers and forwards every event to the ones whose
//! filter accepts it, in subscription order. Observers are borrowed for the
//! bus lifetime `'a`, so a caller can subscribe `&mut renderer` and read the
//! renderer back once the battle is over.

use serde::{Deserialize, Serialize};

use super::event::{BattleEvent, EventKind};
use crate::core::{BattleError, TeamId};

/// Receives battle events.
pub trait BattleObserver {
    /// Handle one event. An error aborts the battle.
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), BattleError>;
}

impl<O: BattleObserver + ?Sized> BattleObserver for &mut O {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), BattleError> {
        (**self).on_event(event)
    }
}

impl<O: BattleObserver + ?Sized> BattleObserver for Box<O> {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), BattleError> {
        (**self).on_event(event)
    }
}

/// Observer backed by a closure that cannot fail. See [`from_fn`].
pub struct FnObserver<F>(F);

impl<F> BattleObserver for FnObserver<F>
where
    F: FnMut(&BattleEvent),
{
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), BattleError> {
        (self.0)(event);
        Ok(())
    }
}

/// Wrap a closure as an observer.
///
/// ```
/// use monster_arena::events::{from_fn, BattleEvent, EventBus, EventKind};
///
/// let mut kinds = Vec::new();
/// {
///     let mut bus = EventBus::new();
///     bus.subscribe(from_fn(|e: &BattleEvent| kinds.push(e.kind())));
///     bus.emit(&BattleEvent::BattleStarted { lineups: Default::default() }).unwrap();
/// }
/// assert_eq!(kinds, vec![EventKind::BattleStarted]);
/// ```
pub fn from_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut(&BattleEvent),
{
    FnObserver(f)
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Which events a subscription receives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventFilter {
    /// Everything.
    #[default]
    All,
    /// Only these kinds.
    Kinds(Vec<EventKind>),
    /// Only events attributed to this team (see [`BattleEvent::team`]).
    Team(TeamId),
    /// Both filters must accept.
    And(Box<EventFilter>, Box<EventFilter>),
}

impl EventFilter {
    /// Only the given kinds.
    pub fn kinds(kinds: impl IntoIterator<Item = EventKind>) -> Self {
        EventFilter::Kinds(kinds.into_iter().collect())
    }

    /// Combine with another filter.
    #[must_use]
    pub fn and(self, other: EventFilter) -> Self {
        EventFilter::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn accepts(&self, event: &BattleEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Kinds(kinds) => kinds.contains(&event.kind()),
            EventFilter::Team(team) => event.team() == Some(*team),
            EventFilter::And(a, b) => a.accepts(event) && b.accepts(event),
        }
    }
}

struct Subscription<'a> {
    id: ObserverId,
    filter: EventFilter,
    observer: Box<dyn BattleObserver + 'a>,
}

/// Fans events out to subscribed observers.
#[derive(Default)]
pub struct EventBus<'a> {
    subscriptions: Vec<Subscription<'a>>,
    next_id: u32,
}

impl<'a> EventBus<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every event.
    pub fn subscribe(&mut self, observer: impl BattleObserver + 'a) -> ObserverId {
        self.subscribe_filtered(EventFilter::All, observer)
    }

    /// Subscribe to events accepted by `filter`.
    pub fn subscribe_filtered(
        &mut self,
        filter: EventFilter,
        observer: impl BattleObserver + 'a,
    ) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            filter,
            observer: Box::new(observer),
        });
        id
    }

    /// Remove a subscription. Returns `false` if it was not present.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `event` to every matching observer.
    ///
    /// Stops at the first observer error.
    pub fn emit(&mut self, event: &BattleEvent) -> Result<(), BattleError> {
        for subscription in &mut self.subscriptions {
            if !subscription.filter.accepts(event) {
                continue;
            }
            if let Err(err) = subscription.observer.on_event(event) {
                tracing::debug!(observer = %subscription.id, %err, "observer failed");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Deliver a batch of events in order.
    pub fn emit_all(&mut self, events: &[BattleEvent]) -> Result<(), BattleError> {
        events.iter().try_for_each(|event| self.emit(event))
    }

    /// Number of subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for EventBus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field(
                "subscriptions",
                &self.subscriptions.iter().map(|s| s.id).collect::<Vec<_>>(),
            )
            .finish()
    }
}
