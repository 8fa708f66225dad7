use chrono::Utc;
use gloo_console::error;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::catalog;
use crate::config;
use crate::lead::state::{LeadAction, LeadFormState, SubmitStatus};
use crate::lead::submit::submit_lead;
use crate::lead::validate::{message, validate, Field};
use crate::timer::{self, TimeLeft};

const NOTICE_DISMISS_MS: u32 = 6_000;

#[function_component(CountdownCard)]
fn countdown_card() -> Html {
    let time_left =
        use_state(|| timer::time_left(config::content_refresh_deadline(), Utc::now()));

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || {
                    time_left.set(timer::time_left(
                        config::content_refresh_deadline(),
                        Utc::now(),
                    ));
                });
                move || drop(interval)
            },
            (),
        );
    }

    let TimeLeft { days, hours, minutes, seconds } = *time_left;

    html! {
        <div class="countdown-card">
            <h3 class="countdown-title">{"Time Until Content Refresh"}</h3>
            <div class="countdown-grid">
                <div class="countdown-cell">
                    <div class="countdown-value">{days}</div>
                    <div class="countdown-label">{"Days"}</div>
                </div>
                <div class="countdown-cell">
                    <div class="countdown-value">{hours}</div>
                    <div class="countdown-label">{"Hours"}</div>
                </div>
                <div class="countdown-cell">
                    <div class="countdown-value">{minutes}</div>
                    <div class="countdown-label">{"Minutes"}</div>
                </div>
                <div class="countdown-cell">
                    <div class="countdown-value">{seconds}</div>
                    <div class="countdown-label">{"Seconds"}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(LeadCaptureForm)]
pub fn lead_capture_form() -> Html {
    let state = use_reducer(LeadFormState::default);

    // Success/error notices dismiss themselves; the timeout dies with the
    // component if it unmounts first.
    {
        let state = state.clone();
        let status = state.status;
        use_effect_with_deps(
            move |status: &SubmitStatus| {
                let timeout = matches!(
                    status,
                    SubmitStatus::Succeeded | SubmitStatus::Failed
                )
                .then(|| {
                    Timeout::new(NOTICE_DISMISS_MS, move || {
                        state.dispatch(LeadAction::Acknowledge);
                    })
                });
                move || drop(timeout)
            },
            status,
        );
    }

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.status == SubmitStatus::Submitting {
                return;
            }
            match validate(&state.fields) {
                Err(errors) => state.dispatch(LeadAction::Reject(errors)),
                Ok(lead) => {
                    state.dispatch(LeadAction::Begin);
                    let state = state.clone();
                    spawn_local(async move {
                        let outcome = submit_lead(lead).await;
                        if let Err(ref err) = outcome {
                            error!("Lead submission failed:", err.to_string());
                        }
                        state.dispatch(LeadAction::Finish(outcome));
                    });
                }
            }
        })
    };

    let on_first_name = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::FirstName, input.value()));
        })
    };

    let on_email = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::Email, input.value()));
        })
    };

    let on_country_code = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::CountryCode, select.value()));
        })
    };

    let on_phone_number = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::PhoneNumber, input.value()));
        })
    };

    let on_city = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::City, select.value()));
        })
    };

    let on_job_title = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::JobTitle, select.value()));
        })
    };

    let on_business_name = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::BusinessName, input.value()));
        })
    };

    let on_timeline = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(LeadAction::Edit(Field::Timeline, select.value()));
        })
    };

    let field_error = |field: Field| -> Html {
        match state.errors.get(field) {
            Some(kind) => html! { <p class="field-error">{ message(field, kind) }</p> },
            None => html! {},
        }
    };

    let phone_error = state
        .errors
        .get(Field::CountryCode)
        .map(|kind| (Field::CountryCode, kind))
        .or_else(|| {
            state
                .errors
                .get(Field::PhoneNumber)
                .map(|kind| (Field::PhoneNumber, kind))
        });

    let selected_guide = catalog::guide(&state.fields.selected_guide);
    let submitting = state.status == SubmitStatus::Submitting;

    html! {
        <section id="lead-form" class="lead-section">
            <div class="lead-columns">
                <div class="lead-info">
                    <span class="free-badge">{"FREE GUIDE"}</span>

                    <h2>{"Download Your Free Expert Guide"}</h2>
                    <p class="lead-intro">
                        {
                            match selected_guide {
                                Some(guide) => guide.subtitle,
                                None => "Select a guide below to get started with professional equipment insights.",
                            }
                        }
                    </p>

                    <div class="notice-box scarcity">
                        <strong>{"Limited Access: "}</strong>
                        {"Only 30 downloads per guide this month"}
                    </div>
                    <div class="notice-box urgency">
                        <strong>{"Guides Refresh: "}</strong>
                        {"Content will be updated on September 30, 2026"}
                    </div>

                    <CountdownCard />
                </div>

                <div class="lead-card">
                    <h2 class="lead-card-title">{"Get Your Free Guide"}</h2>

                    {
                        match state.status {
                            SubmitStatus::Succeeded => html! {
                                <div class="form-notice success">
                                    {"Your guide request has been submitted. Check your email for the download link."}
                                </div>
                            },
                            SubmitStatus::Failed => html! {
                                <div class="form-notice error">
                                    {"Something went wrong. Please try again."}
                                </div>
                            },
                            _ => html! {},
                        }
                    }

                    <form {onsubmit}>
                        <div class="form-group">
                            <label>{"Choose Your Guide *"}</label>
                            <div class="guide-grid">
                                {
                                    for catalog::GUIDES.iter().map(|guide| {
                                        let selected = state.fields.selected_guide == guide.id;
                                        let onclick = {
                                            let state = state.clone();
                                            let id = guide.id;
                                            Callback::from(move |_: MouseEvent| {
                                                state.dispatch(LeadAction::Edit(
                                                    Field::SelectedGuide,
                                                    id.to_string(),
                                                ));
                                            })
                                        };
                                        html! {
                                            <div
                                                key={guide.id}
                                                class={if selected { "guide-card selected" } else { "guide-card" }}
                                                {onclick}
                                            >
                                                <img src={guide.image} alt={guide.title} />
                                                <p>{guide.title}</p>
                                            </div>
                                        }
                                    })
                                }
                            </div>
                            { field_error(Field::SelectedGuide) }
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="first-name">{"First Name *"}</label>
                                <input
                                    id="first-name"
                                    type="text"
                                    value={state.fields.first_name.clone()}
                                    oninput={on_first_name}
                                />
                                { field_error(Field::FirstName) }
                            </div>
                            <div class="form-group">
                                <label for="email">{"Email Address *"}</label>
                                <input
                                    id="email"
                                    type="email"
                                    value={state.fields.email.clone()}
                                    oninput={on_email}
                                />
                                { field_error(Field::Email) }
                            </div>
                        </div>

                        <div class="form-group">
                            <label>{"Phone Number *"}</label>
                            <div class="phone-row">
                                <select class="dial-code-select" onchange={on_country_code}>
                                    {
                                        for catalog::DIAL_CODES.iter().map(|entry| html! {
                                            <option
                                                key={entry.code}
                                                value={entry.code}
                                                title={entry.country}
                                                selected={state.fields.country_code == entry.code}
                                            >
                                                {entry.code}
                                            </option>
                                        })
                                    }
                                </select>
                                <input
                                    type="tel"
                                    placeholder="Phone number"
                                    value={state.fields.phone_number.clone()}
                                    oninput={on_phone_number}
                                />
                            </div>
                            {
                                match phone_error {
                                    Some((field, kind)) => html! {
                                        <p class="field-error">{ message(field, kind) }</p>
                                    },
                                    None => html! {},
                                }
                            }
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label>{"City *"}</label>
                                <select onchange={on_city}>
                                    <option value="" disabled={true} selected={state.fields.city.is_empty()}>
                                        {"Select city"}
                                    </option>
                                    {
                                        for catalog::CITIES.iter().map(|city| html! {
                                            <option
                                                key={*city}
                                                value={*city}
                                                selected={state.fields.city == *city}
                                            >
                                                {*city}
                                            </option>
                                        })
                                    }
                                </select>
                                { field_error(Field::City) }
                            </div>
                            <div class="form-group">
                                <label>{"Job Title *"}</label>
                                <select onchange={on_job_title}>
                                    <option value="" disabled={true} selected={state.fields.job_title.is_empty()}>
                                        {"Select job title"}
                                    </option>
                                    {
                                        for catalog::JOB_TITLES.iter().map(|title| html! {
                                            <option
                                                key={*title}
                                                value={*title}
                                                selected={state.fields.job_title == *title}
                                            >
                                                {*title}
                                            </option>
                                        })
                                    }
                                </select>
                                { field_error(Field::JobTitle) }
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="business-name">{"Business Name *"}</label>
                            <input
                                id="business-name"
                                type="text"
                                value={state.fields.business_name.clone()}
                                oninput={on_business_name}
                            />
                            { field_error(Field::BusinessName) }
                        </div>

                        <div class="form-group">
                            <label>{"Implementation Timeline *"}</label>
                            <select onchange={on_timeline}>
                                <option value="" disabled={true} selected={state.fields.timeline.is_empty()}>
                                    {"When are you looking to purchase?"}
                                </option>
                                {
                                    for catalog::TIMELINES.iter().map(|timeline| html! {
                                        <option
                                            key={*timeline}
                                            value={*timeline}
                                            selected={state.fields.timeline == *timeline}
                                        >
                                            {*timeline}
                                        </option>
                                    })
                                }
                            </select>
                            { field_error(Field::Timeline) }
                        </div>

                        <button type="submit" class="cta-button submit-button" disabled={submitting}>
                            { if submitting { "Submitting..." } else { "Get Free Guide Now" } }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
