use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tracing::{debug, info, warn};

use super::errors::TransportError;
use super::session::SessionState;
use super::types::{FetchResult, RefreshTarget, TargetKind};
use super::view::ViewState;

/// Issues one request for an endpoint path and decodes the payload.
///
/// Backend-reported failures are `Ok` with `success = false`; `Err` means
/// the request never completed or the body was not a `FetchResult`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn fetch(&self, path: &str) -> Result<FetchResult, TransportError>;
}

/// Presentation boundary. Receives every view a target moves through.
pub trait Renderer {
    fn render(&mut self, kind: TargetKind, view: &ViewState);
}

/// Identifies one in-flight request for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: TargetKind,
    generation: u64,
}

/// A started refresh: the ticket to complete it with and the endpoint path
/// chosen for the session at the time it began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRefresh {
    pub ticket: Ticket,
    pub path: String,
}

struct Slot {
    target: RefreshTarget,
    view: ViewState,
    generation: u64,
    in_flight: Option<u64>,
}

/// Registered targets, their current views and the renderer they go to.
struct ViewBoard<R> {
    renderer: R,
    slots: Vec<Slot>,
}

impl<R: Renderer> ViewBoard<R> {
    fn begin(&mut self, kind: TargetKind, session: SessionState) -> Option<PendingRefresh> {
        let Some(slot) = self.slots.iter_mut().find(|slot| slot.target.kind == kind) else {
            warn!(event = "core.refresh.unknown_target", target = %kind);
            return None;
        };

        if let Some(previous) = slot.in_flight {
            debug!(
                event = "core.refresh.superseded",
                target = %kind,
                generation = previous
            );
        }

        slot.generation += 1;
        slot.in_flight = Some(slot.generation);
        slot.view = slot.view.loading(&slot.target);
        let path = slot.target.endpoint.select(session).to_string();

        info!(
            event = "core.refresh.started",
            target = %kind,
            path = %path,
            simulation = session.simulation_mode()
        );

        self.renderer.render(kind, &slot.view);

        Some(PendingRefresh {
            ticket: Ticket {
                kind,
                generation: slot.generation,
            },
            path,
        })
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<FetchResult, TransportError>,
        session: SessionState,
    ) -> SessionState {
        let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.target.kind == ticket.kind)
        else {
            return session;
        };

        if slot.in_flight != Some(ticket.generation) {
            debug!(
                event = "core.refresh.stale_response_discarded",
                target = %ticket.kind,
                generation = ticket.generation,
                current = slot.generation
            );
            return session;
        }
        slot.in_flight = None;

        let next = match outcome {
            Ok(result) => {
                let next = session.observe(&result);
                if next.simulation_mode() && !session.simulation_mode() {
                    info!(
                        event = "core.refresh.simulation_enabled",
                        reason = "reported_by_server",
                        target = %ticket.kind
                    );
                }
                slot.view = slot.view.with_result(&slot.target, &result, next);
                next
            }
            Err(e) => {
                warn!(
                    event = "core.refresh.transport_failed",
                    target = %ticket.kind,
                    error = %e
                );
                slot.view = slot.view.network_error();
                session
            }
        };

        info!(
            event = "core.refresh.completed",
            target = %ticket.kind,
            phase = ?slot.view.phase,
            simulation = next.simulation_mode()
        );

        self.renderer.render(ticket.kind, &slot.view);
        next
    }
}

/// Drives registered targets through the fetch-render cycle.
///
/// The controller holds no simulation flag of its own: every operation takes
/// the current [`SessionState`] and returns the updated one.
pub struct RefreshController<T, R> {
    transport: T,
    board: ViewBoard<R>,
}

impl<T: Transport, R: Renderer> RefreshController<T, R> {
    /// Controller for the file-content and node-tip targets.
    pub fn new(transport: T, renderer: R) -> Self {
        Self::with_targets(
            transport,
            renderer,
            vec![RefreshTarget::file_content(), RefreshTarget::node_tip()],
        )
    }

    pub fn with_targets(transport: T, renderer: R, targets: Vec<RefreshTarget>) -> Self {
        let slots = targets
            .into_iter()
            .map(|target| Slot {
                target,
                view: ViewState::idle(),
                generation: 0,
                in_flight: None,
            })
            .collect();

        Self {
            transport,
            board: ViewBoard { renderer, slots },
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = TargetKind> + '_ {
        self.board.slots.iter().map(|slot| slot.target.kind)
    }

    pub fn view(&self, kind: TargetKind) -> Option<&ViewState> {
        self.board
            .slots
            .iter()
            .find(|slot| slot.target.kind == kind)
            .map(|slot| &slot.view)
    }

    pub fn renderer(&self) -> &R {
        &self.board.renderer
    }

    pub fn into_renderer(self) -> R {
        self.board.renderer
    }

    /// Move a target into its loading state and pick the endpoint to call.
    ///
    /// Starting a target that is already in flight supersedes the earlier
    /// request: its completion will be discarded.
    pub fn begin(&mut self, kind: TargetKind, session: SessionState) -> Option<PendingRefresh> {
        self.board.begin(kind, session)
    }

    /// Apply the outcome of a request started with [`Self::begin`].
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<FetchResult, TransportError>,
        session: SessionState,
    ) -> SessionState {
        self.board.complete(ticket, outcome, session)
    }

    /// Run one full cycle for a single target.
    pub async fn refresh(&mut self, session: SessionState, kind: TargetKind) -> SessionState {
        let Some(pending) = self.board.begin(kind, session) else {
            return session;
        };
        let outcome = self.transport.fetch(&pending.path).await;
        self.board.complete(pending.ticket, outcome, session)
    }

    /// Refresh every registered target with all requests in flight at once.
    /// Completions are applied in the order they settle.
    pub async fn refresh_all(&mut self, session: SessionState) -> SessionState {
        let kinds: Vec<TargetKind> = self.targets().collect();
        let pending: Vec<PendingRefresh> = kinds
            .into_iter()
            .filter_map(|kind| self.board.begin(kind, session))
            .collect();

        let transport = &self.transport;
        let mut in_flight: FuturesUnordered<_> = pending
            .into_iter()
            .map(|pending| async move {
                let outcome = transport.fetch(&pending.path).await;
                (pending.ticket, outcome)
            })
            .collect();

        let mut session = session;
        while let Some((ticket, outcome)) = in_flight.next().await {
            session = self.board.complete(ticket, outcome, session);
        }
        session
    }

    /// Switch the session to simulation mode and re-fetch every target.
    pub async fn enable_simulation_mode(&mut self, session: SessionState) -> SessionState {
        if !session.simulation_mode() {
            info!(event = "core.refresh.simulation_enabled", reason = "requested");
        }
        self.refresh_all(session.with_simulation_mode()).await
    }
}
