use std::{cell::RefCell, rc::Rc};

use event_finder_lib::{
    config::MapConfig,
    coordinate::Coordinate,
    geolocation::{self, LocationError},
};
use futures::{
    channel::oneshot,
    future::{self, Either},
};
use gloo_console::{info, warn};
use gloo_timers::future::TimeoutFuture;
use gloo_utils::window;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Position, PositionError, PositionOptions};

// Leaves room for a permission prompt the browser never times out on.
const PROMPT_GRACE_MS: u32 = 5_000;

type FixSender = Rc<RefCell<Option<oneshot::Sender<Result<Coordinate, LocationError>>>>>;

/// Resolves once with the viewer's position, or with the configured fallback
/// when the platform cannot or will not tell us.
pub async fn viewer_position(config: &MapConfig) -> Coordinate {
    let fix = request_fix(config.geolocation_timeout_ms).await;
    match &fix {
        Ok(position) => info!(format!("Viewer located at {}, {}", position.lat, position.lng)),
        Err(err) => warn!(format!("Geolocation failed ({err}), using fallback position")),
    }
    geolocation::resolve(fix, config.fallback)
}

async fn request_fix(timeout_ms: u32) -> Result<Coordinate, LocationError> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| LocationError::Unavailable)?;
    if geolocation.is_undefined() {
        return Err(LocationError::Unavailable);
    }

    let (tx, rx) = oneshot::channel();
    let tx: FixSender = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let tx = tx.clone();
        Closure::<dyn FnMut(Position)>::new(move |position: Position| {
            let coords = position.coords();
            let fix = Coordinate::try_new(coords.latitude(), coords.longitude())
                .ok_or(LocationError::Unavailable);
            send(&tx, fix);
        })
    };

    let on_error = {
        let tx = tx.clone();
        Closure::<dyn FnMut(PositionError)>::new(move |err: PositionError| {
            send(&tx, Err(LocationError::from_code(err.code())));
        })
    };

    let options = PositionOptions::new();
    options.set_timeout(timeout_ms);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|_| LocationError::Unavailable)?;

    let deadline = TimeoutFuture::new(timeout_ms.saturating_add(PROMPT_GRACE_MS));
    match future::select(rx, Box::pin(deadline)).await {
        Either::Left((fix, _)) => fix.unwrap_or(Err(LocationError::Unavailable)),
        Either::Right(_) => {
            // The browser may still answer later; its callbacks must stay callable.
            on_success.forget();
            on_error.forget();
            Err(LocationError::Timeout)
        }
    }
}

fn send(tx: &FixSender, fix: Result<Coordinate, LocationError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(fix);
    }
}
