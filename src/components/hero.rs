use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::catalog;
use crate::timer;

const ROTATION_PERIOD_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_scroll_to_form: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let current_word = use_state(|| 0usize);

    {
        let current_word = current_word.clone();
        use_effect_with_deps(
            move |_| {
                let mut index = 0usize;
                let interval = Interval::new(ROTATION_PERIOD_MS, move || {
                    index = timer::next_index(index, catalog::ROTATING_WORDS.len());
                    current_word.set(index);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let onclick = {
        let on_scroll_to_form = props.on_scroll_to_form.clone();
        Callback::from(move |_: MouseEvent| on_scroll_to_form.emit(()))
    };

    html! {
        <section class="hero">
            <img
                class="hero-logo"
                src="/assets/stovia-logo.png"
                alt="Stovia Commercial Kitchen Equipment"
            />

            <h1 class="hero-headline">
                {"Six Expert Guides. One "}
                <span class="accent">{"Free Download"}</span>
                {"."}
                <br/>
                {"Choose Yours Today."}
            </h1>

            <p class="hero-subtitle">
                {"Covering commercial kitchens, bakery equipment, refrigeration, ovens, \
                  coffee makers, laundry solutions, and more."}
            </p>

            <p class="hero-subtitle">
                {"Enjoy from our exciting lineup of "}
                <span class="rotating-words">
                    {
                        for catalog::ROTATING_WORDS.iter().enumerate().map(|(index, word)| {
                            let class = if index == *current_word {
                                "rotating-word active"
                            } else {
                                "rotating-word"
                            };
                            html! { <span key={*word} class={class}>{*word}</span> }
                        })
                    }
                </span>
            </p>

            <button class="cta-button" {onclick}>
                {"Get My Free Guide"}
                <span class="cta-chevron">{"⌄"}</span>
            </button>

            <div class="scroll-indicator">{"⌄"}</div>
        </section>
    }
}
