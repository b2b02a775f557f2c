//! Panic recovery middleware.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::panic;
use std::sync::Once;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::status_text;

/// Converts a caught panic payload into a response.
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

static INSTALL_HOOK: Once = Once::new();

thread_local! {
    /// Backtrace of the most recent panic on this thread, taken at the panic site.
    static PANIC_BACKTRACE: RefCell<Option<Backtrace>> = const { RefCell::new(None) };
}

/// Creates a layer that contains panics raised by the wrapped service.
///
/// Panics raised while calling the handler or while polling its future are
/// caught, logged at `ERROR` with the panic message and a backtrace, and
/// answered with `500 Internal Server Error`. Other in-flight requests are
/// unaffected.
///
/// The backtrace is recorded where the panic was raised by a process-wide
/// panic hook installed on first use. The previously installed hook still
/// runs afterwards.
///
/// Requires `panic = "unwind"`.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    install_panic_hook();
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn install_panic_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let backtrace = Backtrace::force_capture();
            PANIC_BACKTRACE.with(|slot| *slot.borrow_mut() = Some(backtrace));
            previous(info);
        }));
    });
}

/// Takes the backtrace recorded for the last panic on this thread.
///
/// The panic is caught on the thread that raised it, so the slot holds the
/// trace of the panic being handled.
fn take_panic_backtrace() -> Option<Backtrace> {
    PANIC_BACKTRACE.with(|slot| slot.borrow_mut().take())
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    // Falls back to the catch site if the hook was replaced after install.
    let backtrace = take_panic_backtrace().unwrap_or_else(Backtrace::force_capture);

    tracing::error!(panic = %message, "Recovered from handler panic\n{backtrace}");

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    (status, Json(status_text(status))).into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
