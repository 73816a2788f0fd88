use event_finder_lib::{event::Event, interest::InterestStatus};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct EventCardProps {
    pub event: Event,
    pub status: Option<InterestStatus>,
    pub on_interest_toggle: Callback<i64>,
    pub on_attended_toggle: Callback<i64>,
}

#[function_component]
pub fn EventCard(props: &EventCardProps) -> Html {
    let event = &props.event;
    let id = event.id;

    let interested = props.status == Some(InterestStatus::Interested);
    let attended = props.status == Some(InterestStatus::Attended);

    let on_interest = {
        let cb = props.on_interest_toggle.clone();
        Callback::from(move |_| cb.emit(id))
    };
    let on_attended = {
        let cb = props.on_attended_toggle.clone();
        Callback::from(move |_| cb.emit(id))
    };

    let avatars = (0..event.attendees.min(3)).filter_map(|i| char::from_u32('A' as u32 + i));

    html! {
        <div class="event-card">
            <div class="event-card-image">
                <img src={event.image.clone()} alt={event.title.clone()} />
                <span class="badge">{"Free"}</span>
            </div>
            <div class="event-card-body">
                <div class="event-card-schedule">{event.short_schedule()}</div>
                <h3 class="event-card-title">{event.title.clone()}</h3>
                if let Some(organizer) = &event.organizer {
                    <p class="event-card-organizer">{format!("by {organizer}")}</p>
                }
                <div class="event-card-attendees">
                    <div class="avatars">
                        { for avatars.map(|initial| html! { <div class="avatar">{initial.to_string()}</div> }) }
                    </div>
                    <span>{format!("{} attendees", event.attendees)}</span>
                </div>
                <div class="event-card-actions">
                    <button
                        class={classes!("btn", "btn-sm", if interested { "btn-filled" } else { "btn-outline" })}
                        onclick={on_interest}
                    >
                        {if interested { "♥ Interested" } else { "♡ Interested" }}
                    </button>
                    <button
                        class={classes!("btn", "btn-sm", if attended { "btn-filled" } else { "btn-outline" })}
                        onclick={on_attended}
                    >
                        {"✓ Attended"}
                    </button>
                </div>
            </div>
        </div>
    }
}
