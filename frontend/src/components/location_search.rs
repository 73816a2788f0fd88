use std::rc::Rc;

use event_finder_lib::{
    config::MapConfig,
    coordinate::Coordinate,
    geocoding::{LocationCandidate, Selection},
    search::Pending,
};
use gloo_console::{info, warn};
use gloo_events::EventListener;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Node};
use yew::prelude::*;

use crate::geocoder::{GeocodingClient, SearchResponse};

pub struct LocationSearch {
    client: GeocodingClient,
    candidates: Vec<LocationCandidate>,
    open: bool,
    loading: bool,
    root: NodeRef,
    _outside_press: EventListener,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub on_select: Callback<Selection>,
    pub config: Rc<MapConfig>,
    /// Biases and ranks results when known.
    #[prop_or_default]
    pub viewer: Option<Coordinate>,
    #[prop_or(AttrValue::Static("Search location..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

pub enum Msg {
    Input(String),
    Fire(Pending),
    Resolved(SearchResponse),
    Focus,
    Close,
    Select(usize),
}

impl LocationSearch {
    fn view_candidate(&self, ctx: &Context<Self>, index: usize, candidate: &LocationCandidate) -> Html {
        let onclick = ctx.link().callback(move |_| Msg::Select(index));

        html! {
            <button key={candidate.id.clone()} type="button" class="location-search-row" {onclick}>
                <div class="location-search-text">
                    <div class="location-search-primary">{candidate.primary_label()}</div>
                    <div class="location-search-label">{candidate.label.clone()}</div>
                </div>
                if let Some(distance) = candidate.distance_label() {
                    <span class="location-search-distance">{distance}</span>
                }
            </button>
        }
    }
}

impl Component for LocationSearch {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let root = NodeRef::default();

        let outside_press = {
            let root = root.clone();
            let close = ctx.link().callback(|()| Msg::Close);
            EventListener::new(&document(), "mousedown", move |event| {
                let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                let inside = root.get().is_some_and(|root| root.contains(target.as_ref()));
                if !inside {
                    close.emit(());
                }
            })
        };

        Self {
            client: GeocodingClient::new(ctx.props().config.clone()),
            candidates: Vec::new(),
            open: false,
            loading: false,
            root,
            _outside_press: outside_press,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(text) => {
                if !self.client.type_text(text, ctx.link().callback(Msg::Fire)) {
                    self.candidates.clear();
                    self.open = false;
                    self.loading = false;
                }
                true
            }
            Msg::Fire(pending) => {
                let dispatched = self
                    .client
                    .dispatch(pending, ctx.props().viewer, ctx.link().callback(Msg::Resolved));
                if dispatched {
                    self.loading = true;
                }
                dispatched
            }
            Msg::Resolved(response) => {
                if !self.client.accepts(&response) {
                    info!("Discarding results for an outdated query");
                    return false;
                }

                self.loading = false;
                match response.result {
                    Ok(candidates) => {
                        self.open = !candidates.is_empty();
                        self.candidates = candidates;
                    }
                    Err(err) => {
                        warn!(format!("Location search failed: {err}"));
                        self.candidates.clear();
                        self.open = false;
                    }
                }
                true
            }
            Msg::Focus => {
                let reopen = !self.open && !self.candidates.is_empty();
                self.open |= reopen;
                reopen
            }
            Msg::Close => {
                let was_open = self.open;
                self.open = false;
                was_open
            }
            Msg::Select(index) => {
                let Some(candidate) = self.candidates.get(index) else {
                    return false;
                };
                let selection = Selection::from(candidate);

                self.client.settle(selection.name.clone());
                self.open = false;
                self.loading = false;
                ctx.props().on_select.emit(selection);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Input(input.value())
        });
        let onfocus = ctx.link().callback(|_| Msg::Focus);

        html! {
            <div ref={self.root.clone()} class={classes!("location-search", props.class.clone())}>
                <div class="location-search-field">
                    <span class="location-search-icon">{"⌕"}</span>
                    <input
                        type="text"
                        class="input"
                        value={self.client.text().to_owned()}
                        placeholder={props.placeholder.clone()}
                        {oninput}
                        {onfocus}
                    />
                    if self.loading {
                        <span class="location-search-spinner" />
                    }
                </div>
                if self.open && !self.candidates.is_empty() {
                    <div class="location-search-results">
                        { for self.candidates.iter().enumerate().map(|(index, candidate)| self.view_candidate(ctx, index, candidate)) }
                    </div>
                }
            </div>
        }
    }
}
