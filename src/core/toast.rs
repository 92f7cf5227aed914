use crate::domain::model::NotificationState;
use crate::domain::ports::{Clock, Delay, SystemClock};
use crate::page::{Document, NodeId};
use std::time::{Duration, Instant};

/// One live notification and its private timetable.
///
/// Owned exclusively by the scheduler that created it; independent toasts
/// never share state, so concurrent timelines cannot interfere.
#[derive(Debug)]
struct Toast {
    node: NodeId,
    created_at: Instant,
    applied: NotificationState,
}

impl Toast {
    /// State the timetable prescribes at `now`. Pure; the page is untouched.
    fn state_at(&self, now: Instant, visible: Duration, fade: Duration) -> NotificationState {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < visible {
            NotificationState::Visible
        } else if elapsed < visible + fade {
            NotificationState::Fading
        } else {
            NotificationState::Removed
        }
    }
}

/// Creates "added to cart" toasts and guarantees their removal.
///
/// The lifecycle is a fixed two-phase timetable, `Visible -> Fading ->
/// Removed`, computed from the creation instant rather than chained callbacks.
/// That keeps every transition a pure function of elapsed time; `tick` only
/// reconciles the page with whatever the timetable says. There is no
/// cancellation: once shown, a toast runs to removal.
pub struct ToastScheduler<C: Clock = SystemClock> {
    clock: C,
    visible: Duration,
    fade: Duration,
    toasts: Vec<Toast>,
}

impl<C: Clock> ToastScheduler<C> {
    pub fn new(clock: C, visible: Duration, fade: Duration) -> Self {
        Self {
            clock,
            visible,
            fade,
            toasts: Vec::new(),
        }
    }

    /// Builds the toast element, appends it to the body synchronously and
    /// starts its timetable. Every call creates an independent notification.
    pub fn show(&mut self, doc: &mut Document, product_name: &str) -> NodeId {
        let node = build_toast_element(doc, product_name);
        let body = doc.body();
        doc.append_child(body, node);

        self.toasts.push(Toast {
            node,
            created_at: self.clock.now(),
            applied: NotificationState::Visible,
        });

        tracing::info!("Showing cart confirmation for '{}'", product_name);
        node
    }

    /// Reconciles every toast with its timetable at `now`: dropping the show
    /// class on entry to `Fading`, detaching the element on entry to
    /// `Removed`. Removal is idempotent; a toast whose node already lost its
    /// parent is skipped, not an error.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        let (visible, fade) = (self.visible, self.fade);
        for toast in &mut self.toasts {
            let due = toast.state_at(now, visible, fade);
            if toast.applied == NotificationState::Visible && due != NotificationState::Visible {
                doc.remove_class(toast.node, "show");
                toast.applied = NotificationState::Fading;
            }
            if toast.applied == NotificationState::Fading && due == NotificationState::Removed {
                if doc.parent(toast.node).is_some() {
                    doc.detach(toast.node);
                }
                toast.applied = NotificationState::Removed;
            }
        }
        self.toasts
            .retain(|toast| toast.applied != NotificationState::Removed);
    }

    /// `tick` against the scheduler's own clock.
    pub fn poll(&mut self, doc: &mut Document) {
        let now = self.clock.now();
        self.tick(doc, now);
    }

    /// Number of toasts not yet removed.
    pub fn active(&self) -> usize {
        self.toasts.len()
    }

    /// Earliest instant at which some toast is due a transition.
    fn next_deadline(&self) -> Option<Instant> {
        self.toasts
            .iter()
            .map(|toast| match toast.applied {
                NotificationState::Visible => toast.created_at + self.visible,
                _ => toast.created_at + self.visible + self.fade,
            })
            .min()
    }

    /// Drives every pending toast to removal, sleeping on the [`Delay`] port
    /// between transitions. Wall-clock runs and simulated-time tests share
    /// this one code path.
    pub async fn run_until_idle(&mut self, doc: &mut Document, delay: &dyn Delay) {
        while let Some(deadline) = self.next_deadline() {
            let wait = deadline.saturating_duration_since(self.clock.now());
            if !wait.is_zero() {
                delay.sleep(wait).await;
            }
            self.poll(doc);
        }
    }
}

/// Markup matching the storefront's toast conventions: alert role, assertive
/// live region, a header with the close affordance (dismissal itself is the
/// page framework's job) and the confirmation text in the body.
fn build_toast_element(doc: &mut Document, product_name: &str) -> NodeId {
    let toast = doc.create_element("div");
    for class in ["toast", "show", "position-fixed", "bottom-0", "end-0", "m-3"] {
        doc.add_class(toast, class);
    }
    doc.set_attribute(toast, "role", "alert");
    doc.set_attribute(toast, "aria-live", "assertive");
    doc.set_attribute(toast, "aria-atomic", "true");

    let header = doc.create_element("div");
    doc.add_class(header, "toast-header");
    let title = doc.create_element("strong");
    doc.set_text(title, "Item Added");
    let close = doc.create_element("button");
    doc.add_class(close, "btn-close");
    doc.set_attribute(close, "data-bs-dismiss", "toast");
    doc.set_attribute(close, "aria-label", "Close");
    doc.append_child(header, title);
    doc.append_child(header, close);
    doc.append_child(toast, header);

    let body = doc.create_element("div");
    doc.add_class(body, "toast-body");
    doc.set_text(
        body,
        &format!("{} has been added to your cart.", product_name),
    );
    doc.append_child(toast, body);

    toast
}
