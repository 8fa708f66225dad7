use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;

const BENEFITS: [&str; 3] = [
    "Next-Day Delivery & Setup",
    "3-Year Warranty",
    "14-Day Money Back Guarantee",
];

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Privacy Policy", "/privacy"),
    ("Terms & Conditions", "/terms"),
    ("Refund Policy", "/refunds"),
    ("Contact Us", "/contact"),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_scroll_to_form: Callback<()>,
}

#[function_component(FooterSection)]
pub fn footer_section(props: &FooterProps) -> Html {
    let on_reserve = {
        let on_scroll_to_form = props.on_scroll_to_form.clone();
        Callback::from(move |_: MouseEvent| on_scroll_to_form.emit(()))
    };

    let on_whatsapp = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(config::WHATSAPP_URL, "_blank");
        }
    });

    let year = Utc::now().year();

    html! {
        <footer class="footer-section">
            <h2 class="footer-headline">
                {"Buy with "}
                <span class="accent">{"Stovia+"}</span>
                {", Just For You™"}
            </h2>
            <p class="footer-subtitle">
                {"Experience the difference with our premium service guarantee"}
            </p>

            <div class="benefit-grid">
                {
                    for BENEFITS.iter().map(|benefit| html! {
                        <div key={*benefit} class="benefit-item">
                            <span class="trust-check">{"✓"}</span>
                            <span>{*benefit}</span>
                        </div>
                    })
                }
            </div>

            <div class="footer-cta-row">
                <button class="cta-button" onclick={on_reserve}>{"Reserve Now"}</button>
                <button class="cta-button secondary" onclick={on_whatsapp}>{"WhatsApp Us Now"}</button>
            </div>

            <div class="footer-bottom">
                <div class="footer-links">
                    {
                        for FOOTER_LINKS.iter().map(|(name, href)| html! {
                            <a key={*name} href={*href}>{*name}</a>
                        })
                    }
                </div>
                <div class="footer-copyright">
                    {format!("© {} Stovia. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}
