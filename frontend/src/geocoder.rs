use std::rc::Rc;

use event_finder_lib::{
    config::MapConfig,
    coordinate::Coordinate,
    geocoding::{GeocodingError, GeocodingQuery, LocationCandidate},
    search::{Pending, SearchEdit, SearchInput},
};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::api;

pub struct SearchResponse {
    query: String,
    pub result: Result<Vec<LocationCandidate>, GeocodingError>,
}

/// Debounced geocoding for one search box. Only the last text typed within
/// the debounce window is sent, and only answers for the current text are
/// accepted.
pub struct GeocodingClient {
    config: Rc<MapConfig>,
    input: SearchInput,
    timer: Option<Timeout>,
}

impl GeocodingClient {
    pub fn new(config: Rc<MapConfig>) -> Self {
        Self {
            input: SearchInput::new(config.min_query_chars),
            config,
            timer: None,
        }
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Records typed text and restarts the debounce timer. Returns `false`
    /// when the text is too short to search for.
    pub fn type_text(&mut self, text: String, on_fire: Callback<Pending>) -> bool {
        match self.input.edit(text) {
            SearchEdit::Clear => {
                self.timer = None;
                false
            }
            SearchEdit::Schedule(pending) => {
                self.timer = Some(Timeout::new(self.config.debounce_ms, move || on_fire.emit(pending)));
                true
            }
        }
    }

    /// Sends the request for a fired timer. Returns `false` if it was superseded.
    pub fn dispatch(&mut self, pending: Pending, bias: Option<Coordinate>, on_done: Callback<SearchResponse>) -> bool {
        self.timer = None;
        let Some(text) = self.input.fire(pending) else {
            return false;
        };

        let config = self.config.clone();
        spawn_local(async move {
            let query = GeocodingQuery::new(text.clone(), bias);
            let result = api::search_locations(&query, &config).await;
            on_done.emit(SearchResponse { query: text, result });
        });
        true
    }

    pub fn accepts(&self, response: &SearchResponse) -> bool {
        self.input.accepts(&response.query)
    }

    /// Replaces the text without searching for it.
    pub fn settle(&mut self, text: String) {
        self.timer = None;
        self.input.settle(text);
    }
}
